//! Expression emission
//!
//! Every binary operation is wrapped in parentheses so the source grouping
//! survives regardless of Python's own precedence rules.

use crate::codegen::generator::Generator;
use crate::parser::ast::*;

impl Generator {
    pub(crate) fn expression(&self, expr: &Expr) -> String {
        match expr {
            Expr::Number(text) | Expr::Str(text) => text.clone(),
            Expr::Identifier(name) => identifier(name).to_string(),
            Expr::Binary(op) => format!(
                "({} {} {})",
                self.expression(&op.left),
                op.operator.symbol(),
                self.expression(&op.right)
            ),
            // Value of the step only; the operand is not written back
            Expr::Unary(op) => {
                let operand = self.expression(&op.operand);
                match op.operator {
                    UnaryOperator::Increment => format!("({} + 1)", operand),
                    UnaryOperator::Decrement => format!("({} - 1)", operand),
                }
            }
            Expr::Call(call) => self.call(call),
            Expr::Negate(operand) => format!("-{}", self.expression(operand)),
        }
    }

    pub(crate) fn call(&self, call: &FunctionCall) -> String {
        let args: Vec<String> = call.args.iter().map(|a| self.expression(a)).collect();
        format!("{}({})", call.name, args.join(", "))
    }
}

fn identifier(name: &str) -> &str {
    match name {
        "true" => "True",
        "false" => "False",
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(expr: &Expr) -> String {
        Generator::default().expression(expr)
    }

    #[test]
    fn test_literals_verbatim() {
        assert_eq!(emit(&Expr::number("42")), "42");
        assert_eq!(emit(&Expr::number("3.14")), "3.14");
        assert_eq!(emit(&Expr::Str("\"a\\tb\"".to_string())), "\"a\\tb\"");
    }

    #[test]
    fn test_boolean_identifiers() {
        assert_eq!(emit(&Expr::identifier("true")), "True");
        assert_eq!(emit(&Expr::identifier("false")), "False");
        assert_eq!(emit(&Expr::identifier("count")), "count");
    }

    #[test]
    fn test_nested_binary_fully_parenthesized() {
        let expr = Expr::binary(
            Expr::binary(Expr::identifier("a"), BinaryOperator::Sub, Expr::identifier("b")),
            BinaryOperator::Mul,
            Expr::binary(Expr::identifier("c"), BinaryOperator::Mod, Expr::number("2")),
        );
        assert_eq!(emit(&expr), "((a - b) * (c % 2))");
    }

    #[test]
    fn test_call_and_negation() {
        let expr = Expr::Call(FunctionCall {
            name: "max".to_string(),
            args: vec![
                Expr::Negate(Box::new(Expr::identifier("x"))),
                Expr::binary(Expr::number("1"), BinaryOperator::Ne, Expr::number("2")),
            ],
        });
        assert_eq!(emit(&expr), "max(-x, (1 != 2))");
    }
}
