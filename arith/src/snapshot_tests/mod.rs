mod compiler;
mod lexer;
mod parser;
