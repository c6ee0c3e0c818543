//! C++ subset front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with the grammar rules spread over
//!   `declarations`, `statements` and `expressions`
//! - [`ast`]: AST node definitions
//!
//! # Supported Subset
//!
//! - Types: `int`, `float`, `double`, `char` (plus `void` return types)
//! - Statements: declarations, assignments, `x++`/`--x`, function calls,
//!   `if`/`else if`/`else`, `for`, `while`, `return`
//! - Stream I/O: `cout << ...;` and `cin >> ...;`
//! - Expressions: `+ - * / %`, comparisons, unary minus, calls, parentheses
//! - `#include` lines and `using namespace` are accepted and dropped
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser; precedence is encoded by the
//! nesting of the expression rules. No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use declarations::TYPE_KEYWORDS;
pub use lexer::{tokenize, LexError, Token, TokenKind};
pub use parse::{parse, ParseError, Parser, MAX_NESTING_DEPTH};
