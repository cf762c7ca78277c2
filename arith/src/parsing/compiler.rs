//! AST -> stack-machine instructions
use crate::parsing::ast::{BinaryOperator, Expression, Program};
use crate::parsing::instructions::{Chunk, Instruction};

/// Lowers an expression tree into a flat instruction sequence with a
/// post-order walk: left operands first, then right, then the operator.
/// A left-to-right stack interpreter therefore always finds the two operands
/// of an operator on top of the stack.
pub(crate) struct Compiler {
    pub(crate) chunk: Chunk,
}

impl Compiler {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            chunk: Chunk::new(name),
        }
    }

    fn compile_expr(&mut self, expr: Expression) {
        match expr {
            Expression::Integer(e) => {
                let (lit, span) = e.into_parts();
                self.chunk.add(Instruction::Push(lit.value), Some(span));
            }
            Expression::UnaryOperation(e) => {
                let (op, span) = e.into_parts();
                self.compile_expr(op.expr);
                // Unary minus gets its own opcode rather than `push 0` + `-`
                self.chunk.add(Instruction::Neg, Some(span));
            }
            Expression::BinaryOperation(e) => {
                let (op, span) = e.into_parts();
                let instr = match op.op {
                    BinaryOperator::Plus => Instruction::Add,
                    BinaryOperator::Minus => Instruction::Sub,
                    BinaryOperator::Mul => Instruction::Mul,
                    BinaryOperator::Div => Instruction::Div,
                };
                self.compile_expr(op.left);
                self.compile_expr(op.right);
                self.chunk.add(instr, Some(span));
            }
        }
    }

    pub(crate) fn compile(&mut self, program: Program) {
        for stmt in program.statements {
            self.compile_expr(stmt);
        }
    }
}
