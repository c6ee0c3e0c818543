//! Declaration parsing implementation
//!
//! This module handles the statements that introduce names or configure the
//! translation unit:
//!
//! - Function definitions: `type name(type a, type b) { ... }`
//! - Variable declarations: `type name [= expr];`
//! - `using namespace name;` (consumed, produces no node)
//!
//! # Grammar
//!
//! ```text
//! declaration  ::= function_def | var_decl
//! function_def ::= (type | "void") identifier "(" params ")" block
//! params       ::= ε | "void" | type identifier ("," type identifier)*
//! var_decl     ::= type identifier ("=" comparison)? ";"
//! type         ::= "int" | "float" | "double" | "char"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// Keywords that name a value type
pub const TYPE_KEYWORDS: [&str; 4] = ["int", "float", "double", "char"];

pub(crate) fn is_type_keyword(word: &str) -> bool {
    TYPE_KEYWORDS.contains(&word)
}

impl Parser {
    /// Parse a statement starting with a type keyword (or `void`).
    ///
    /// A `(` two tokens ahead means `type name(`, i.e. a function definition;
    /// anything else is a variable declaration.
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let is_function = self.check_ahead(2, TokenKind::Delimiter, "(")
            || self.check(TokenKind::Keyword, "void");

        if is_function {
            self.parse_function_definition().map(Stmt::FunctionDef)
        } else {
            self.parse_variable_declaration(true).map(Stmt::VarDecl)
        }
    }

    /// Parse function definition: type name(params) { body }
    pub(crate) fn parse_function_definition(&mut self) -> Result<FunctionDef, ParseError> {
        let return_type = self.parse_type(true)?;
        let name = self.expect_identifier("as function name")?;

        self.expect_lparen("after function name")?;
        let params = self.parse_parameter_list()?;
        self.expect_rparen("after parameters")?;

        let body = self.parse_block("function body")?;

        Ok(FunctionDef {
            return_type,
            name,
            params,
            body,
        })
    }

    /// Parse parameter list: (type name, type name, ...)
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(TokenKind::Delimiter, ")") {
            return Ok(params);
        }

        // Special case: (void) means no parameters
        if self.check(TokenKind::Keyword, "void") && self.check_ahead(1, TokenKind::Delimiter, ")")
        {
            self.advance();
            return Ok(params);
        }

        loop {
            let param_type = self.parse_type(false)?;
            let name = self.expect_identifier("as parameter name")?;
            params.push(Param { param_type, name });

            if !self.match_token(TokenKind::Delimiter, ",") {
                break;
            }
        }

        Ok(params)
    }

    /// Parse variable declaration: type name [= expr] [;]
    ///
    /// The for-loop initializer passes `expect_semicolon = false` because the
    /// loop header supplies its own `;` separators.
    pub(crate) fn parse_variable_declaration(
        &mut self,
        expect_semicolon: bool,
    ) -> Result<VarDeclaration, ParseError> {
        let var_type = self.parse_type(false)?;
        let name = self.expect_identifier("as variable name")?;

        let value = if self.match_token(TokenKind::Operator, "=") {
            Some(self.parse_comparison()?)
        } else {
            None
        };

        if expect_semicolon {
            self.expect_semicolon("after declaration")?;
        }

        Ok(VarDeclaration {
            var_type,
            name,
            value,
        })
    }

    /// Parse `using namespace name;` and discard it
    pub(crate) fn parse_using_directive(&mut self) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Keyword, "using", "to start a using directive")?;
        self.expect_token(TokenKind::Keyword, "namespace", "after 'using'")?;
        self.expect_identifier("as namespace name")?;
        self.expect_semicolon("after using directive")?;
        Ok(())
    }

    /// Parse a type keyword; `void` only where a return type is allowed
    fn parse_type(&mut self, allow_void: bool) -> Result<String, ParseError> {
        let accepted = self.peek().is_some_and(|t| {
            t.kind == TokenKind::Keyword
                && (is_type_keyword(&t.lexeme) || (allow_void && t.lexeme == "void"))
        });

        if !accepted {
            return Err(self.error("a type name"));
        }

        self.expect_kind(TokenKind::Keyword, "as type name")
            .map(|t| t.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> Stmt {
        let mut parser = Parser::from_source(source).unwrap();
        let mut program = parser.parse_program().unwrap();
        assert_eq!(program.statements.len(), 1);
        program.statements.remove(0)
    }

    #[test]
    fn test_function_with_parameters() {
        let stmt = parse_one("int add(int a, float b) { return a + b; }");

        let Stmt::FunctionDef(func) = stmt else {
            panic!("Expected function definition");
        };
        assert_eq!(
            func.params,
            vec![
                Param {
                    param_type: "int".to_string(),
                    name: "a".to_string()
                },
                Param {
                    param_type: "float".to_string(),
                    name: "b".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_void_function_and_void_params() {
        let stmt = parse_one("void greet(void) { cout << \"hi\"; }");

        let Stmt::FunctionDef(func) = stmt else {
            panic!("Expected function definition");
        };
        assert_eq!(func.return_type, "void");
        assert!(func.params.is_empty());
        assert_eq!(func.body.len(), 1);
    }

    #[test]
    fn test_declaration_without_initializer() {
        let stmt = parse_one("double ratio;");

        assert_eq!(
            stmt,
            Stmt::VarDecl(VarDeclaration {
                var_type: "double".to_string(),
                name: "ratio".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn test_declaration_with_expression() {
        let stmt = parse_one("int total = a + b * 2;");

        let Stmt::VarDecl(decl) = stmt else {
            panic!("Expected declaration");
        };
        assert_eq!(
            decl.value,
            Some(Expr::binary(
                Expr::identifier("a"),
                BinaryOperator::Add,
                Expr::binary(Expr::identifier("b"), BinaryOperator::Mul, Expr::number("2")),
            ))
        );
    }

    #[test]
    fn test_void_variable_rejected() {
        let mut parser = Parser::from_source("void x;").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(err.expected, "'(' after function name");
    }

    #[test]
    fn test_malformed_using_directive() {
        let mut parser = Parser::from_source("using std;").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert_eq!(err.expected, "'namespace' after 'using'");
    }
}
