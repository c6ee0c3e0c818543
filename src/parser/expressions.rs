//! Expression parsing implementation
//!
//! Precedence is encoded by the call chain rather than a table; each level is
//! left-associative and calls the next tighter level for its operands:
//!
//! ```text
//! comparison ::= additive (("<" | ">" | "<=" | ">=" | "==" | "!=") additive)*
//! additive   ::= term (("+" | "-") term)*
//! term       ::= factor (("*" | "/" | "%") factor)*
//! factor     ::= NUMBER | FLOAT | STRING
//!              | identifier ("(" args ")" | "++" | "--")?
//!              | ("++" | "--") identifier
//!              | "-" factor
//!              | "(" comparison ")"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

const COMPARISON_OPS: [BinaryOperator; 6] = [
    BinaryOperator::Lt,
    BinaryOperator::Gt,
    BinaryOperator::Le,
    BinaryOperator::Ge,
    BinaryOperator::Eq,
    BinaryOperator::Ne,
];
const ADDITIVE_OPS: [BinaryOperator; 2] = [BinaryOperator::Add, BinaryOperator::Sub];
const MULTIPLICATIVE_OPS: [BinaryOperator; 3] =
    [BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod];

impl Parser {
    /// Parse a full expression (the comparison level)
    pub(crate) fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_binary_operator(&COMPARISON_OPS) {
            let right = self.parse_additive()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_binary_operator(&ADDITIVE_OPS) {
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_binary_operator(&MULTIPLICATIVE_OPS) {
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error("an expression"));
        };

        match token.kind {
            TokenKind::Number | TokenKind::Float => {
                self.advance();
                Ok(Expr::Number(token.lexeme))
            }
            TokenKind::String => {
                self.advance();
                Ok(Expr::Str(token.lexeme))
            }
            TokenKind::Identifier => {
                if self.check_ahead(1, TokenKind::Delimiter, "(") {
                    self.advance();
                    return self.nested(|p| p.parse_call(token.lexeme)).map(Expr::Call);
                }
                if self.step_operator_ahead(1).is_some() {
                    return self.parse_postfix_step().map(Expr::Unary);
                }
                self.advance();
                Ok(Expr::Identifier(token.lexeme))
            }
            TokenKind::Operator if self.step_operator_ahead(0).is_some() => {
                self.parse_prefix_step().map(Expr::Unary)
            }
            TokenKind::Operator if token.lexeme == "-" => {
                self.advance();
                let operand = self.nested(Self::parse_factor)?;
                Ok(Expr::Negate(Box::new(operand)))
            }
            TokenKind::Delimiter if token.lexeme == "(" => {
                self.advance();
                let expr = self.nested(Self::parse_comparison)?;
                self.expect_rparen("to close parenthesized expression")?;
                Ok(expr)
            }
            _ => Err(self.error("an expression")),
        }
    }

    /// Parse the argument list of a call whose name was already consumed
    pub(crate) fn parse_call(&mut self, name: String) -> Result<FunctionCall, ParseError> {
        self.expect_lparen("after function name")?;

        let mut args = Vec::new();
        if !self.check(TokenKind::Delimiter, ")") {
            loop {
                args.push(self.parse_comparison()?);
                if !self.match_token(TokenKind::Delimiter, ",") {
                    break;
                }
            }
        }

        self.expect_rparen("after arguments")?;
        Ok(FunctionCall { name, args })
    }

    /// Consume the current token if it is one of `allowed`
    fn match_binary_operator(&mut self, allowed: &[BinaryOperator]) -> Option<BinaryOperator> {
        let token = self.peek()?;
        if token.kind != TokenKind::Operator {
            return None;
        }

        let op = BinaryOperator::from_lexeme(&token.lexeme)?;
        if !allowed.contains(&op) {
            return None;
        }

        self.advance();
        Some(op)
    }
}
