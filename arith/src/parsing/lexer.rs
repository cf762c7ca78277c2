use std::fmt;

use crate::utils::Span;

/// A single token of the arithmetic language.
///
/// `Int` borrows the exact digit run from the input, leading zeros included;
/// converting it to a number is the parser's job so that overflow can be
/// reported as a diagnostic rather than a lexing failure.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A byte the lexer does not know about
    Illegal(u8),
    /// End of input. Repeated calls to `next_token` keep returning it.
    Eof,

    Int(&'a str),

    // operators
    Plus,
    Minus,
    Mul,
    Div,

    // punctuation
    Semicolon,
    LeftParen,
    RightParen,
}

impl<'a> fmt::Debug for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Illegal(c) => write!(f, "ILLEGAL({:?})", *c as char),
            Token::Eof => write!(f, "EOF"),
            Token::Int(s) => write!(f, "INT({s:?})"),
            Token::Plus => write!(f, "PLUS"),
            Token::Minus => write!(f, "MINUS"),
            Token::Mul => write!(f, "MUL"),
            Token::Div => write!(f, "DIV"),
            Token::Semicolon => write!(f, "SEMICOLON"),
            Token::LeftParen => write!(f, "LEFT_PAREN"),
            Token::RightParen => write!(f, "RIGHT_PAREN"),
        }
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Illegal(c) => write!(f, "`{}`", *c as char),
            Token::Eof => write!(f, "end of input"),
            Token::Int(s) => write!(f, "`{s}`"),
            Token::Plus => write!(f, "`+`"),
            Token::Minus => write!(f, "`-`"),
            Token::Mul => write!(f, "`*`"),
            Token::Div => write!(f, "`/`"),
            Token::Semicolon => write!(f, "`;`"),
            Token::LeftParen => write!(f, "`(`"),
            Token::RightParen => write!(f, "`)`"),
        }
    }
}

/// Handwritten lexer over the input bytes.
///
/// It keeps two cursors, the current byte and the read position one past it,
/// so a digit run can be closed off without backtracking. Past the end of the
/// input the current byte is the 0 sentinel. A lexer is not restartable.
pub(crate) struct Lexer<'a> {
    source: &'a str,
    input: &'a [u8],
    /// Byte offset of `ch` in the input
    position: usize,
    /// Byte offset one past `ch`
    read_position: usize,
    /// Byte under examination, 0 once the input is exhausted
    ch: u8,
    line: usize,
    col: usize,
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            source,
            input: source.as_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
            line: 1,
            col: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        if self.read_position > 0 {
            match self.ch {
                b'\n' => {
                    self.line += 1;
                    self.col = 0;
                }
                _ => self.col += 1,
            }
        }
        self.ch = self.input.get(self.read_position).copied().unwrap_or(0);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_number(&mut self) -> &'a str {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        &self.source[start..self.position]
    }

    pub(crate) fn next_token(&mut self) -> (Token<'a>, Span) {
        self.skip_whitespace();

        let (start_line, start_col, start_byte) = (self.line, self.col, self.position);

        let token = match self.ch {
            0 => Token::Eof,
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Mul,
            b'/' => Token::Div,
            b';' => Token::Semicolon,
            b'(' => Token::LeftParen,
            b')' => Token::RightParen,
            c if is_digit(c) => Token::Int(self.read_number()),
            c => Token::Illegal(c),
        };

        // Digit runs already consumed their last byte, Eof has nothing to consume
        if !matches!(token, Token::Int(_) | Token::Eof) {
            self.read_char();
        }

        let span = Span {
            start_line,
            start_col,
            end_line: self.line,
            end_col: self.col,
            range: start_byte..self.position,
        };
        (token, span)
    }
}

/// Lex the whole input eagerly, stopping after the first `Eof`.
/// Mostly useful for tests; the parser pulls tokens one at a time.
#[cfg(test)]
pub(crate) fn tokenize(source: &str) -> Vec<(Token<'_>, Span)> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let (token, span) = lexer.next_token();
        let done = token == Token::Eof;
        tokens.push((token, span));
        if done {
            break;
        }
    }
    tokens
}
