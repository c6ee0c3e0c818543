//! # Introduction
//!
//! cpp2py translates a small subset of C++ into Python. The translation is a
//! strictly linear, single-pass pipeline; the AST is the only intermediate
//! form.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Generator → Python
//! ```
//!
//! 1. [`parser`]: tokenises the source ([`parser::lexer`]) and builds the
//!    AST ([`parser::ast`]) by recursive descent. The first lexical or
//!    syntactic error aborts the run.
//! 2. [`codegen`]: walks the AST and emits indented Python. Generation never
//!    fails; for-loops without a `range()` equivalent become a placeholder
//!    comment.
//! 3. [`config`]: command-line options of the `cpp2py` binary.
//! 4. [`ui`]: ratatui-based side-by-side viewer; not part of the stable
//!    library API.
//!
//! ## Supported subset
//!
//! Types: `int`, `float`, `double`, `char`, `void` (return type only).
//! Control flow: `if/else if/else`, `while`, counting `for`, `return`.
//! I/O: `cout <<` and `cin >>`. `#include` and `using namespace` are dropped.
//!
//! ```
//! use cpp2py::{transpile, codegen::GeneratorOptions};
//!
//! let python = transpile("int x = 2 * 3;", &GeneratorOptions::default()).unwrap();
//! assert_eq!(python, "x = (2 * 3)\n");
//! ```

pub mod codegen;
pub mod config;
pub mod parser;
pub mod ui;

use codegen::{Generator, GeneratorOptions};
use parser::ast::SourceLocation;
use parser::{LexError, ParseError};
use thiserror::Error;

/// Failure of a pipeline run; no output is produced in either case
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranspileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TranspileError {
    /// Where in the source the run failed
    pub fn location(&self) -> SourceLocation {
        match self {
            TranspileError::Lex(err) => err.location,
            TranspileError::Parse(err) => err.location,
        }
    }
}

/// Run the whole pipeline on `source`.
pub fn transpile(source: &str, options: &GeneratorOptions) -> Result<String, TranspileError> {
    let tokens = parser::tokenize(source)?;
    let program = parser::parse(tokens)?;
    Ok(Generator::new(options.clone()).generate(&program))
}
