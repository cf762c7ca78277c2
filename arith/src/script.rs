use crate::errors::{Error, ErrorKind};
use crate::parsing::instructions::Chunk;
use crate::parsing::parser::Parser;
use crate::parsing::Compiler;

/// A compiled script: the parse + lowering pipeline run front to back.
///
/// Construction fails with the full ordered diagnostic list rather than the
/// first error, since the parser recovers and keeps going.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub name: String,
    pub(crate) source: String,
    pub(crate) chunk: Chunk,
}

impl Script {
    pub fn new(name: &str, source: &str) -> Result<Self, Vec<Error>> {
        let (program, mut errors) = Parser::new(source).parse();
        if !errors.is_empty() {
            for error in &mut errors {
                if let ErrorKind::SyntaxError(ref mut s) = error.kind {
                    s.set_source(name, source);
                }
            }
            return Err(errors);
        }

        let mut compiler = Compiler::new(name);
        compiler.compile(program);

        Ok(Self {
            name: name.to_string(),
            source: source.to_string(),
            chunk: compiler.chunk,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    /// The emitted opcodes in their textual form, in execution order.
    pub fn instructions(&self) -> Vec<String> {
        self.chunk.iter().map(ToString::to_string).collect()
    }
}
