//! Python code generation
//!
//! Walks the AST once and emits indented Python source:
//! - [`generator`]: statements, blocks, else-if flattening, for-loop ranges
//! - `expressions`: expression and call emission
//!
//! Generation never fails. Constructs without a faithful Python shape (for
//! now only for-loops that are not simple counting loops) are emitted as a
//! placeholder comment, see [`UNSUPPORTED_FOR_LOOP`].

mod expressions;
pub mod generator;

pub use generator::{Generator, GeneratorOptions, UNSUPPORTED_FOR_LOOP};

use crate::parser::ast::Program;

/// Generate Python for `program` with default options.
pub fn generate(program: &Program) -> String {
    Generator::default().generate(program)
}
