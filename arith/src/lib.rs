mod errors;
mod parsing;
mod reporting;
mod script;
mod utils;

pub use crate::errors::{Error, ErrorKind, SyntaxError};
pub use crate::parsing::ast::{
    BinaryOperation, BinaryOperator, Expression, IntegerLiteral, Program, UnaryOperation,
    UnaryOperator,
};
pub use crate::parsing::instructions::{Chunk, Instruction};
pub use crate::parsing::parser::Parser;
pub use crate::script::Script;
pub use crate::utils::{Span, Spanned};

#[cfg(test)]
mod snapshot_tests;
