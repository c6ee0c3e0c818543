//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: function definitions, variable declarations, `using namespace`
//! - `statements`: statement dispatch, blocks, control flow, I/O statements
//! - `expressions`: the comparison → additive → multiplicative → factor chain
//!
//! Lookahead is one token, except that a type keyword peeks two tokens ahead
//! for `(` to tell a function definition from a variable declaration. The
//! parser never backtracks and stops at the first error.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use log::debug;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Parse error at line {}, column {}: expected {expected}, found {}",
    .location.line,
    .location.column,
    describe_found(.found)
)]
pub struct ParseError {
    /// What the grammar rule required at this point
    pub expected: String,
    /// The offending token, `None` at end of input
    pub found: Option<Token>,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn line(&self) -> usize {
        self.location.line
    }
}

fn describe_found(found: &Option<Token>) -> String {
    match found {
        Some(token) => token.to_string(),
        None => "end of input".to_string(),
    }
}

/// Deepest nesting of blocks, parentheses, calls and else-if links accepted
/// before parsing stops with an error instead of exhausting the stack
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive descent parser for the C++ subset
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Tokenize `source` and build a parser over the result
    pub fn from_source(source: &str) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(source);
        Ok(Self::new(lexer.tokenize()?))
    }

    /// Parse the entire program (top-level statements)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            // Directives parse to nothing
            if let Some(stmt) = self.parse_statement()? {
                program.statements.push(stmt);
            }
        }

        debug!(
            "parsed {} top-level statement(s)",
            program.statements.len()
        );
        Ok(program)
    }

    // ===== Helper methods =====

    /// Run a recursive rule one nesting level deeper
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!("at most {MAX_NESTING_DEPTH} levels of nesting")));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.check_ahead(0, kind, lexeme)
    }

    pub(crate) fn check_ahead(&self, n: usize, kind: TokenKind, lexeme: &str) -> bool {
        self.peek_ahead(n).is_some_and(|t| t.is(kind, lexeme))
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.check(kind, lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// `++`/`--` sitting `n` tokens ahead, if any
    pub(crate) fn step_operator_ahead(&self, n: usize) -> Option<UnaryOperator> {
        self.peek_ahead(n)
            .filter(|t| t.kind == TokenKind::Operator)
            .and_then(|t| UnaryOperator::from_lexeme(&t.lexeme))
    }

    /// Location of the current token, or of the last token at end of input
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.location)
            .unwrap_or(SourceLocation::new(1, 1))
    }

    /// Build an error for the current position
    pub(crate) fn error(&self, expected: impl Into<String>) -> ParseError {
        ParseError {
            expected: expected.into(),
            found: self.peek().cloned(),
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        lexeme: &str,
        ctx: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind, lexeme) {
            self.advance().ok_or_else(|| self.error(format!("'{lexeme}' {ctx}")))
        } else {
            Err(self.error(format!("'{lexeme}' {ctx}")))
        }
    }

    pub(crate) fn expect_kind(
        &mut self,
        kind: TokenKind,
        ctx: &str,
    ) -> Result<Token, ParseError> {
        if self.check_kind(kind) {
            self.advance().ok_or_else(|| self.error(format!("{kind} {ctx}")))
        } else {
            Err(self.error(format!("{kind} {ctx}")))
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Delimiter, "(", ctx).map(|_| ())
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Delimiter, ")", ctx).map(|_| ())
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Delimiter, "{", ctx).map(|_| ())
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Delimiter, "}", ctx).map(|_| ())
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Delimiter, ";", ctx).map(|_| ())
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        self.expect_kind(TokenKind::Identifier, ctx).map(|t| t.lexeme)
    }
}

/// Parse a token sequence into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_source(source: &str) -> Result<Program, ParseError> {
        Parser::from_source(source).unwrap().parse_program()
    }

    #[test]
    fn test_parse_simple_function() {
        let program = parse_source("int main() { return 0; }").unwrap();

        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::FunctionDef(func) => {
                assert_eq!(func.name, "main");
                assert_eq!(func.return_type, "int");
                assert!(func.params.is_empty());
                assert_eq!(func.body.len(), 1);
            }
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    #[test]
    fn test_directives_produce_no_nodes() {
        let source = "#include <iostream>\nusing namespace std;\nint x = 1;";
        let program = parse_source(source).unwrap();

        assert_eq!(program.statements.len(), 1);
        assert!(matches!(program.statements[0], Stmt::VarDecl(_)));
    }

    #[test]
    fn test_empty_program() {
        let program = parse_source("// nothing here\n").unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_missing_semicolon_reports_found_token() {
        let err = parse_source("int main() {\n    int x = 5\n    return x;\n}").unwrap_err();

        assert_eq!(err.line(), 3);
        assert_eq!(err.expected, "';' after declaration");
        let found = err.found.unwrap();
        assert!(found.is(TokenKind::Keyword, "return"));
    }

    #[test]
    fn test_missing_semicolon_same_line() {
        let err = parse_source("int main() {\n  x = 5 }").unwrap_err();

        assert_eq!(err.line(), 2);
        assert_eq!(
            err.to_string(),
            "Parse error at line 2, column 9: expected ';' after assignment, found delimiter '}'"
        );
    }

    #[test]
    fn test_unclosed_brace_reports_end_of_input() {
        let err = parse_source("int main() {\n  int x = 1;\n").unwrap_err();

        assert!(err.found.is_none());
        assert_eq!(err.line(), 2);
        assert!(err.to_string().ends_with("found end of input"));
    }

    #[test]
    fn test_stray_closing_brace() {
        let err = parse_source("int x = 1;\n}").unwrap_err();

        assert_eq!(err.expected, "a statement");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_parse_free_function() {
        let tokens = crate::parser::lexer::tokenize("x = 1;").unwrap();
        let program = parse(tokens).unwrap();

        assert_eq!(
            program.statements,
            vec![Stmt::Assignment(Assignment {
                name: "x".to_string(),
                value: Expr::number("1"),
            })]
        );
    }
}
