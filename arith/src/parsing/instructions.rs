use std::fmt;

use crate::utils::Span;

/// A stack-machine opcode. The textual form (`Display`) is the external
/// representation: `push <int>`, `+`, `-`, `*`, `/`, `neg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Push an integer on the stack
    Push(i64),

    // binary: pop two operands, push the result
    Add,
    Sub,
    Mul,
    Div,

    /// Negate the top of the stack
    Neg,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(v) => write!(f, "push {v}"),
            Instruction::Add => write!(f, "+"),
            Instruction::Sub => write!(f, "-"),
            Instruction::Mul => write!(f, "*"),
            Instruction::Div => write!(f, "/"),
            Instruction::Neg => write!(f, "neg"),
        }
    }
}

/// A flat, ordered sequence of instructions with their source spans.
#[derive(Clone, PartialEq, Default)]
pub struct Chunk {
    instructions: Vec<(Instruction, Option<Span>)>,
    /// The script name so error messages can point at the right place
    pub name: String,
}

impl Chunk {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            instructions: Vec::with_capacity(32),
            name: name.to_owned(),
        }
    }

    pub(crate) fn add(&mut self, instr: Instruction, span: Option<Span>) -> u32 {
        let idx = self.instructions.len();
        self.instructions.push((instr, span));
        idx as u32
    }

    pub fn get(&self, idx: usize) -> Option<&Instruction> {
        self.instructions.get(idx).map(|(instr, _)| instr)
    }

    pub fn get_span(&self, idx: u32) -> Option<&Span> {
        self.instructions
            .get(idx as usize)
            .and_then(|(_, span)| span.as_ref())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().map(|(instr, _)| instr)
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.name)?;

        for (offset, (instr, _)) in self.instructions.iter().enumerate() {
            writeln!(f, "{offset:>04} {instr}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(std::mem::size_of::<Instruction>(), 16);
    }

    #[test]
    fn display_matches_the_wire_format() {
        assert_eq!(Instruction::Push(42).to_string(), "push 42");
        assert_eq!(Instruction::Push(-1).to_string(), "push -1");
        assert_eq!(Instruction::Add.to_string(), "+");
        assert_eq!(Instruction::Sub.to_string(), "-");
        assert_eq!(Instruction::Mul.to_string(), "*");
        assert_eq!(Instruction::Div.to_string(), "/");
        assert_eq!(Instruction::Neg.to_string(), "neg");
    }
}
