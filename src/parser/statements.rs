//! Statement parsing implementation
//!
//! This module handles parsing of all statement types:
//!
//! - Declarations (delegated to `declarations`)
//! - Control flow: `if`/`else if`/`else`, `for`, `while`, `return`
//! - Stream I/O: `cout << ...;`, `cin >> ...;`
//! - Assignments, function-call statements, `x++;` / `--x;`
//! - Blocks: `{ ... }`
//!
//! # Grammar
//!
//! ```text
//! statement ::= include | using | declaration | if_stmt | for_stmt
//!             | while_stmt | return_stmt | cout_stmt | cin_stmt
//!             | call ";" | step ";" | assignment ";"
//! block     ::= "{" statement* "}"
//! if_stmt   ::= "if" "(" comparison ")" block ("else" (if_stmt | block))?
//! for_stmt  ::= "for" "(" init? ";" comparison? ";" update? ")" block
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::declarations::is_type_keyword;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse one statement.
    ///
    /// Returns `Ok(None)` for `#include` and `using namespace`, which are
    /// consumed without producing a node.
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error("a statement"));
        };

        match token.kind {
            TokenKind::Include => {
                self.advance();
                Ok(None)
            }
            TokenKind::Keyword => self.parse_keyword_statement(&token),
            TokenKind::Identifier => self.parse_identifier_statement(&token).map(Some),
            TokenKind::Operator if self.step_operator_ahead(0).is_some() => {
                let step = self.parse_prefix_step()?;
                self.expect_semicolon("after increment")?;
                Ok(Some(Stmt::Step(step)))
            }
            _ => Err(self.error("a statement")),
        }
    }

    fn parse_keyword_statement(&mut self, token: &Token) -> Result<Option<Stmt>, ParseError> {
        let stmt = match token.lexeme.as_str() {
            word if is_type_keyword(word) || word == "void" => self.parse_declaration()?,
            "using" => {
                self.parse_using_directive()?;
                return Ok(None);
            }
            "if" => Stmt::If(self.parse_if_statement()?),
            "for" => Stmt::For(self.parse_for_statement()?),
            "while" => Stmt::While(self.parse_while_statement()?),
            "return" => Stmt::Return(self.parse_return_statement()?),
            _ => return Err(self.error("a statement")),
        };
        Ok(Some(stmt))
    }

    fn parse_identifier_statement(&mut self, token: &Token) -> Result<Stmt, ParseError> {
        match token.lexeme.as_str() {
            "cout" => self.parse_cout_statement().map(Stmt::Cout),
            "cin" => self.parse_cin_statement().map(Stmt::Cin),
            _ if self.check_ahead(1, TokenKind::Delimiter, "(") => {
                let name = self.expect_identifier("as function name")?;
                let call = self.parse_call(name)?;
                self.expect_semicolon("after function call")?;
                Ok(Stmt::Call(call))
            }
            _ if self.step_operator_ahead(1).is_some() => {
                let step = self.parse_postfix_step()?;
                self.expect_semicolon("after increment")?;
                Ok(Stmt::Step(step))
            }
            _ => self.parse_assignment(true).map(Stmt::Assignment),
        }
    }

    /// Parse block statements, braces included
    pub(crate) fn parse_block(&mut self, ctx: &str) -> Result<Vec<Stmt>, ParseError> {
        self.expect_lbrace(&format!("to open {ctx}"))?;
        let statements = self.nested(Self::parse_block_statements)?;
        self.expect_rbrace(&format!("to close {ctx}"))?;
        Ok(statements)
    }

    fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenKind::Delimiter, "}") && !self.is_at_end() {
            if let Some(stmt) = self.parse_statement()? {
                statements.push(stmt);
            }
        }
        Ok(statements)
    }

    /// Parse assignment: name = expr [;]
    pub(crate) fn parse_assignment(
        &mut self,
        expect_semicolon: bool,
    ) -> Result<Assignment, ParseError> {
        let name = self.expect_identifier("as assignment target")?;
        self.expect_token(TokenKind::Operator, "=", "in assignment")?;
        let value = self.parse_comparison()?;

        if expect_semicolon {
            self.expect_semicolon("after assignment")?;
        }

        Ok(Assignment { name, value })
    }

    /// Parse `name++` / `name--`
    pub(crate) fn parse_postfix_step(&mut self) -> Result<UnaryOp, ParseError> {
        let name = self.expect_identifier("before '++' or '--'")?;
        let operator = self.parse_step_operator()?;

        Ok(UnaryOp {
            operand: Box::new(Expr::Identifier(name)),
            operator,
        })
    }

    /// Parse `++name` / `--name`
    pub(crate) fn parse_prefix_step(&mut self) -> Result<UnaryOp, ParseError> {
        let operator = self.parse_step_operator()?;
        let name = self.expect_identifier("after '++' or '--'")?;

        Ok(UnaryOp {
            operand: Box::new(Expr::Identifier(name)),
            operator,
        })
    }

    fn parse_step_operator(&mut self) -> Result<UnaryOperator, ParseError> {
        match self.step_operator_ahead(0) {
            Some(operator) => {
                self.advance();
                Ok(operator)
            }
            None => Err(self.error("'++' or '--'")),
        }
    }

    /// Parse `cout << expr << expr ... ;`
    fn parse_cout_statement(&mut self) -> Result<CoutStatement, ParseError> {
        self.advance(); // cout

        let mut values = Vec::new();
        while self.match_token(TokenKind::ShiftOp, "<<") {
            values.push(self.parse_comparison()?);
        }

        self.expect_semicolon("after output statement")?;
        Ok(CoutStatement { values })
    }

    /// Parse `cin >> name >> name ... ;`
    fn parse_cin_statement(&mut self) -> Result<CinStatement, ParseError> {
        self.advance(); // cin

        let mut variables = Vec::new();
        while self.match_token(TokenKind::ShiftOp, ">>") {
            variables.push(self.expect_identifier("after '>>'")?);
        }

        self.expect_semicolon("after input statement")?;
        Ok(CinStatement { variables })
    }

    /// Parse if statement; `else if` nests the next link as [`ElseBranch::ElseIf`]
    pub(crate) fn parse_if_statement(&mut self) -> Result<IfStatement, ParseError> {
        self.advance(); // if

        self.expect_lparen("after 'if'")?;
        let condition = self.parse_comparison()?;
        self.expect_rparen("after if condition")?;

        let body = self.parse_block("if body")?;

        let else_branch = if self.match_token(TokenKind::Keyword, "else") {
            if self.check(TokenKind::Keyword, "if") {
                ElseBranch::ElseIf(Box::new(self.nested(Self::parse_if_statement)?))
            } else {
                ElseBranch::Block(self.parse_block("else body")?)
            }
        } else {
            ElseBranch::None
        };

        Ok(IfStatement {
            condition,
            body,
            else_branch,
        })
    }

    /// Parse for statement
    fn parse_for_statement(&mut self) -> Result<ForLoop, ParseError> {
        self.advance(); // for

        self.expect_lparen("after 'for'")?;

        let init = if self.check_kind(TokenKind::Keyword) {
            Some(ForInit::Declaration(self.parse_variable_declaration(false)?))
        } else if self.check_kind(TokenKind::Identifier) {
            Some(ForInit::Assignment(self.parse_assignment(false)?))
        } else {
            None
        };
        self.expect_semicolon("after for-loop initializer")?;

        let condition = if self.check(TokenKind::Delimiter, ";") {
            None
        } else {
            Some(self.parse_comparison()?)
        };
        self.expect_semicolon("after for-loop condition")?;

        let update = self.parse_for_update()?;
        self.expect_rparen("after for-loop header")?;

        let body = self.parse_block("for-loop body")?;

        Ok(ForLoop {
            init,
            condition,
            update,
            body,
        })
    }

    /// Parse the update clause of a for-loop header
    fn parse_for_update(&mut self) -> Result<Option<ForUpdate>, ParseError> {
        if self.check(TokenKind::Delimiter, ")") {
            return Ok(None);
        }

        if self.step_operator_ahead(0).is_some() {
            return self.parse_prefix_step().map(|s| Some(ForUpdate::Step(s)));
        }

        if self.check_kind(TokenKind::Identifier) {
            if self.step_operator_ahead(1).is_some() {
                return self.parse_postfix_step().map(|s| Some(ForUpdate::Step(s)));
            }
            if self.check_ahead(1, TokenKind::Operator, "=") {
                return self
                    .parse_assignment(false)
                    .map(|a| Some(ForUpdate::Assignment(a)));
            }
        }

        // Anything else is kept as a plain expression
        Ok(Some(ForUpdate::Expr(self.parse_comparison()?)))
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<WhileLoop, ParseError> {
        self.advance(); // while

        self.expect_lparen("after 'while'")?;
        let condition = self.parse_comparison()?;
        self.expect_rparen("after while condition")?;

        let body = self.parse_block("while body")?;

        Ok(WhileLoop { condition, body })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<ReturnStatement, ParseError> {
        self.advance(); // return

        let value = if self.check(TokenKind::Delimiter, ";") {
            None
        } else {
            Some(self.parse_comparison()?)
        };

        self.expect_semicolon("after return")?;
        Ok(ReturnStatement { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(source: &str) -> Vec<Stmt> {
        let wrapped = format!("void f() {{ {} }}", source);
        let mut parser = Parser::from_source(&wrapped).unwrap();
        let mut program = parser.parse_program().unwrap();
        match program.statements.remove(0) {
            Stmt::FunctionDef(func) => func.body,
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    fn parse_err(source: &str) -> ParseError {
        let mut parser = Parser::from_source(source).unwrap();
        parser.parse_program().unwrap_err()
    }

    #[test]
    fn test_cout_chain() {
        let body = parse_body(r#"cout << "x = " << x + 1 << endl;"#);

        let [Stmt::Cout(cout)] = body.as_slice() else {
            panic!("Expected a single cout statement");
        };
        assert_eq!(cout.values.len(), 3);
        assert_eq!(cout.values[0], Expr::Str("\"x = \"".to_string()));
        assert_eq!(cout.values[2], Expr::identifier("endl"));
    }

    #[test]
    fn test_cin_chain() {
        let body = parse_body("cin >> a >> b;");

        assert_eq!(
            body,
            vec![Stmt::Cin(CinStatement {
                variables: vec!["a".to_string(), "b".to_string()]
            })]
        );
    }

    #[test]
    fn test_cin_requires_identifiers() {
        let err = parse_err("void f() { cin >> 5; }");
        assert_eq!(err.expected, "identifier after '>>'");
    }

    #[test]
    fn test_step_statements() {
        let body = parse_body("i++; --j;");

        assert_eq!(
            body,
            vec![
                Stmt::Step(UnaryOp {
                    operand: Box::new(Expr::identifier("i")),
                    operator: UnaryOperator::Increment,
                }),
                Stmt::Step(UnaryOp {
                    operand: Box::new(Expr::identifier("j")),
                    operator: UnaryOperator::Decrement,
                }),
            ]
        );
    }

    #[test]
    fn test_call_statement() {
        let body = parse_body("report(total, 2);");

        assert_eq!(
            body,
            vec![Stmt::Call(FunctionCall {
                name: "report".to_string(),
                args: vec![Expr::identifier("total"), Expr::number("2")],
            })]
        );
    }

    #[test]
    fn test_assignment_requires_equals() {
        let err = parse_err("void f() { x + 1; }");
        assert_eq!(err.expected, "'=' in assignment");
    }

    #[test]
    fn test_else_if_chain_encoding() {
        let body = parse_body("if (x > 0) { a = 1; } else if (x < 0) { a = 2; } else { a = 3; }");

        let [Stmt::If(first)] = body.as_slice() else {
            panic!("Expected a single if statement");
        };
        let ElseBranch::ElseIf(second) = &first.else_branch else {
            panic!("Expected else-if link");
        };
        assert_eq!(
            second.condition,
            Expr::binary(Expr::identifier("x"), BinaryOperator::Lt, Expr::number("0"))
        );
        let ElseBranch::Block(last) = &second.else_branch else {
            panic!("Expected final else block");
        };
        assert_eq!(last.len(), 1);
    }

    #[test]
    fn test_if_without_else() {
        let body = parse_body("if (x) { y = 1; }");

        let [Stmt::If(stmt)] = body.as_slice() else {
            panic!("Expected a single if statement");
        };
        assert_eq!(stmt.else_branch, ElseBranch::None);
    }

    #[test]
    fn test_for_loop_clauses() {
        let body = parse_body("for (int i = 0; i < 10; i++) { sum = sum + i; }");

        let [Stmt::For(for_loop)] = body.as_slice() else {
            panic!("Expected a single for loop");
        };
        assert_eq!(for_loop.init.as_ref().map(|i| i.name()), Some("i"));
        assert!(matches!(for_loop.condition, Some(Expr::Binary(_))));
        assert!(matches!(
            for_loop.update,
            Some(ForUpdate::Step(UnaryOp {
                operator: UnaryOperator::Increment,
                ..
            }))
        ));
        assert_eq!(for_loop.body.len(), 1);
    }

    #[test]
    fn test_for_loop_all_clauses_empty() {
        let body = parse_body("for (;;) { }");

        let [Stmt::For(for_loop)] = body.as_slice() else {
            panic!("Expected a single for loop");
        };
        assert!(for_loop.init.is_none());
        assert!(for_loop.condition.is_none());
        assert!(for_loop.update.is_none());
        assert!(for_loop.body.is_empty());
    }

    #[test]
    fn test_for_loop_assignment_and_expression_updates() {
        let body = parse_body("for (i = 0; i < n; i = i + 2) { } for (i = 0; i < n; tick(i)) { }");

        let [Stmt::For(first), Stmt::For(second)] = body.as_slice() else {
            panic!("Expected two for loops");
        };
        assert!(matches!(first.init, Some(ForInit::Assignment(_))));
        assert!(matches!(first.update, Some(ForUpdate::Assignment(_))));
        assert!(matches!(second.update, Some(ForUpdate::Expr(Expr::Call(_)))));
    }

    #[test]
    fn test_while_and_return() {
        let body = parse_body("while (n > 1) { n = n / 2; } return;");

        assert!(matches!(body[0], Stmt::While(_)));
        assert_eq!(body[1], Stmt::Return(ReturnStatement { value: None }));
    }

    #[test]
    fn test_unsupported_keyword() {
        let err = parse_err("int main() { else { } }");

        assert_eq!(err.expected, "a statement");
        assert!(err.found.unwrap().is(TokenKind::Keyword, "else"));
    }

    #[test]
    fn test_nested_blocks_report_inner_line() {
        let source = "int main() {\n  while (x) {\n    if (y) {\n      z = 1\n    }\n  }\n}";
        let err = parse_err(source);

        assert_eq!(err.line(), 5);
        assert_eq!(err.expected, "';' after assignment");
    }

    #[test]
    fn test_long_else_if_chain_stops_at_nesting_limit() {
        let chain = |links: usize| {
            let mut source = String::from("if (x == 0) { }");
            for n in 1..links {
                source.push_str(&format!(" else if (x == {n}) {{ }}"));
            }
            source
        };

        let body = parse_body(&chain(100));
        assert!(matches!(body[0], Stmt::If(_)));

        let err = parse_err(&format!("void f() {{ {} }}", chain(1000)));
        assert_eq!(err.expected, "at most 128 levels of nesting");
    }

    #[test]
    fn test_deeply_nested_blocks_rejected() {
        let source = format!(
            "void f() {{ {} }}",
            "while (x) { ".repeat(500) + &"}".repeat(500)
        );
        let err = parse_err(&source);

        assert_eq!(err.expected, "at most 128 levels of nesting");
        assert!(err.found.unwrap().is(TokenKind::Keyword, "while"));
    }
}
