use crate::errors::Error;
use crate::parsing::ast::{
    BinaryOperation, BinaryOperator, Expression, IntegerLiteral, Program, UnaryOperation,
    UnaryOperator,
};
use crate::parsing::lexer::{Lexer, Token};
use crate::utils::{Span, Spanned};

/// parse_expression can call itself max 100 times per statement, after that
/// it's an error. Keeps pathological inputs like hundreds of `(` from blowing
/// the stack.
const MAX_EXPR_RECURSION: usize = 100;

/// Binding strength of operators, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Lowest,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// unary `-`
    Prefix,
    /// Reserved for call expressions, no token maps to it
    #[allow(dead_code)]
    Call,
}

/// Tokens without an infix rule bind at `Lowest` so they terminate
/// expression continuation instead of erroring.
fn token_precedence(token: Token) -> Precedence {
    match token {
        Token::Plus | Token::Minus => Precedence::Sum,
        Token::Mul | Token::Div => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

/// An operator-precedence (Pratt) parser over a pull-based lexer.
///
/// It holds exactly the next two unconsumed tokens and never materializes the
/// token stream. Diagnostics accumulate instead of aborting: a malformed
/// statement is dropped and parsing resumes at the next token, so one pass can
/// surface several errors.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: (Token<'a>, Span),
    peek: (Token<'a>, Span),
    num_expr_calls: usize,
    errors: Vec<Error>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        // Pre-load two tokens so current and peek are both set
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            num_expr_calls: 0,
            errors: Vec::new(),
        }
    }

    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn peek_precedence(&self) -> Precedence {
        token_precedence(self.peek.0)
    }

    fn expect_peek(&mut self, expected: Token<'static>) -> Option<()> {
        if self.peek.0 == expected {
            self.advance();
            Some(())
        } else {
            self.errors.push(Error::syntax_error(
                format!(
                    "expected next token to be {}, got {} instead",
                    expected, self.peek.0
                ),
                &self.peek.1,
            ));
            None
        }
    }

    fn parse_integer_literal(&mut self, literal: &'a str) -> Option<Expression> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(Spanned::new(
                IntegerLiteral {
                    literal: literal.to_string(),
                    value,
                },
                self.current.1.clone(),
            ))),
            Err(_) => {
                self.errors.push(Error::syntax_error(
                    format!("could not parse `{literal}` as integer"),
                    &self.current.1,
                ));
                None
            }
        }
    }

    fn parse_unary_operation(&mut self) -> Option<Expression> {
        let mut span = self.current.1.clone();
        self.advance();
        let expr = self.parse_expression(Precedence::Prefix)?;
        span.expand(expr.span());
        Some(Expression::UnaryOperation(Spanned::new(
            UnaryOperation {
                op: UnaryOperator::Minus,
                expr,
            },
            span,
        )))
    }

    /// `(` parses a full expression back at `Lowest` and requires the closing
    /// `)`. The parentheses only shape the tree, they leave no node behind.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::RightParen)?;
        Some(expr)
    }

    /// Prefix position dispatch. The token enum is closed, so "no rule for
    /// this token" is an explicit branch rather than a failed table lookup.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.0 {
            Token::Int(literal) => self.parse_integer_literal(literal),
            Token::Minus => self.parse_unary_operation(),
            Token::LeftParen => self.parse_grouped_expression(),
            token => {
                self.errors.push(Error::syntax_error(
                    format!("no prefix parse function for {token} found"),
                    &self.current.1,
                ));
                None
            }
        }
    }

    /// Called with `current` on the operator and `left` already parsed. The
    /// right operand is parsed at the operator's own precedence, so a tighter
    /// follow-on operator binds into it.
    fn parse_binary_operation(&mut self, left: Expression) -> Option<Expression> {
        let op = match self.current.0 {
            Token::Plus => BinaryOperator::Plus,
            Token::Minus => BinaryOperator::Minus,
            Token::Mul => BinaryOperator::Mul,
            Token::Div => BinaryOperator::Div,
            token => unreachable!("parse_binary_operation called on {token:?}"),
        };
        let precedence = token_precedence(self.current.0);
        let mut span = left.span().clone();
        self.advance();
        let right = self.parse_expression(precedence)?;
        span.expand(right.span());
        Some(Expression::BinaryOperation(Spanned::new(
            BinaryOperation { op, left, right },
            span,
        )))
    }

    fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expression> {
        self.num_expr_calls += 1;
        if self.num_expr_calls > MAX_EXPR_RECURSION {
            self.errors.push(Error::syntax_error(
                "the expression is too complex".to_string(),
                &self.current.1,
            ));
            return None;
        }

        let mut left = self.parse_prefix()?;

        while self.peek.0 != Token::Semicolon && min_precedence < self.peek_precedence() {
            match self.peek.0 {
                Token::Plus | Token::Minus | Token::Mul | Token::Div => {
                    self.advance();
                    left = self.parse_binary_operation(left)?;
                }
                // No infix rule: the expression ends here
                _ => break,
            }
        }

        Some(left)
    }

    /// Parse the whole input as a sequence of expression statements, each
    /// optionally terminated by `;`. Never fails outright: check the returned
    /// error list to know whether the program is complete.
    pub fn parse(mut self) -> (Program, Vec<Error>) {
        let mut program = Program::default();

        while self.current.0 != Token::Eof {
            self.num_expr_calls = 0;
            if let Some(expr) = self.parse_expression(Precedence::Lowest) {
                program.statements.push(expr);
            }
            if self.peek.0 == Token::Semicolon {
                self.advance();
            }
            self.advance();
        }

        (program, self.errors)
    }
}
