//! Statement emission
//!
//! Every method takes the nesting depth of the lines it writes and hands
//! `depth + 1` to nested bodies, so the indentation after a block is the
//! caller's own by construction. The generator itself only holds options and
//! can be shared between runs and threads.

use crate::parser::ast::*;
use log::{debug, warn};

/// Text emitted in place of a for-loop that has no range equivalent
pub const UNSUPPORTED_FOR_LOOP: &str = "# Unsupported for-loop";

/// Output formatting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Append an `if __name__ == "__main__":` guard calling `main()`
    pub emit_main_guard: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            emit_main_guard: false,
        }
    }
}

/// Tree-walking Python emitter
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Generate the Python text for a whole program.
    ///
    /// Top-level items are separated by a blank line. An empty program
    /// becomes a lone `pass` so the output is always a valid module.
    pub fn generate(&self, program: &Program) -> String {
        let mut items: Vec<String> = program
            .statements
            .iter()
            .map(|stmt| {
                let mut out = String::new();
                self.statement(stmt, 0, &mut out);
                out
            })
            .collect();

        if self.options.emit_main_guard && defines_main(program) {
            let mut guard = String::new();
            self.line(&mut guard, 0, "if __name__ == \"__main__\":");
            self.line(&mut guard, 1, "main()");
            items.push(guard);
        }

        let output = if items.is_empty() {
            "pass\n".to_string()
        } else {
            items.join("\n")
        };

        debug!(
            "generated {} line(s) of output",
            output.lines().count()
        );
        output
    }

    fn statement(&self, stmt: &Stmt, depth: usize, out: &mut String) {
        match stmt {
            Stmt::FunctionDef(func) => {
                let params: Vec<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
                self.line(out, depth, &format!("def {}({}):", func.name, params.join(", ")));
                self.block(&func.body, depth + 1, out);
            }
            Stmt::VarDecl(decl) => {
                let value = match &decl.value {
                    Some(value) => self.expression(value),
                    None => "None".to_string(),
                };
                self.line(out, depth, &format!("{} = {}", decl.name, value));
            }
            Stmt::Assignment(assign) => {
                let value = self.expression(&assign.value);
                self.line(out, depth, &format!("{} = {}", assign.name, value));
            }
            Stmt::Cout(cout) => {
                // One print per endl-terminated segment; print supplies the newline
                let mut lines: Vec<Vec<String>> = Vec::new();
                let mut current = Vec::new();
                for value in &cout.values {
                    if matches!(value, Expr::Identifier(name) if name == "endl") {
                        lines.push(std::mem::take(&mut current));
                    } else {
                        current.push(self.expression(value));
                    }
                }
                if !current.is_empty() || lines.is_empty() {
                    lines.push(current);
                }
                for values in lines {
                    self.line(out, depth, &format!("print({})", values.join(", ")));
                }
            }
            Stmt::Cin(cin) => {
                for var in &cin.variables {
                    self.line(out, depth, &format!("{} = input()", var));
                }
            }
            Stmt::Step(step) => {
                let operand = self.expression(&step.operand);
                let text = match step.operator {
                    UnaryOperator::Increment => format!("{} += 1", operand),
                    UnaryOperator::Decrement => format!("{} -= 1", operand),
                };
                self.line(out, depth, &text);
            }
            Stmt::If(if_stmt) => self.if_chain(if_stmt, depth, out),
            Stmt::While(while_loop) => {
                let condition = self.expression(&while_loop.condition);
                self.line(out, depth, &format!("while {}:", condition));
                self.block(&while_loop.body, depth + 1, out);
            }
            Stmt::For(for_loop) => self.for_loop(for_loop, depth, out),
            Stmt::Return(ret) => match &ret.value {
                Some(value) => {
                    let value = self.expression(value);
                    self.line(out, depth, &format!("return {}", value));
                }
                None => self.line(out, depth, "return"),
            },
            Stmt::Call(call) => {
                let call = self.call(call);
                self.line(out, depth, &call);
            }
        }
    }

    /// Emit a body; an empty one becomes `pass`
    fn block(&self, body: &[Stmt], depth: usize, out: &mut String) {
        if body.is_empty() {
            self.line(out, depth, "pass");
            return;
        }
        for stmt in body {
            self.statement(stmt, depth, out);
        }
    }

    /// `if` followed by one `elif` per chain link and an optional final `else`
    fn if_chain(&self, if_stmt: &IfStatement, depth: usize, out: &mut String) {
        let condition = self.expression(&if_stmt.condition);
        self.line(out, depth, &format!("if {}:", condition));
        self.block(&if_stmt.body, depth + 1, out);

        let mut branch = &if_stmt.else_branch;
        while let ElseBranch::ElseIf(link) = branch {
            let condition = self.expression(&link.condition);
            self.line(out, depth, &format!("elif {}:", condition));
            self.block(&link.body, depth + 1, out);
            branch = &link.else_branch;
        }

        if let ElseBranch::Block(body) = branch {
            if !body.is_empty() {
                self.line(out, depth, "else:");
                self.block(body, depth + 1, out);
            }
        }
    }

    fn for_loop(&self, for_loop: &ForLoop, depth: usize, out: &mut String) {
        match self.range_header(for_loop) {
            Some(header) => {
                self.line(out, depth, &header);
                self.block(&for_loop.body, depth + 1, out);
            }
            None => {
                warn!(
                    "for-loop over {:?} has no range() equivalent; emitting placeholder",
                    for_loop.init.as_ref().map(|init| init.name())
                );
                self.line(out, depth, UNSUPPORTED_FOR_LOOP);
            }
        }
    }

    /// `for v in range(start, end):` for counting loops of the shape
    /// `v = start; v < end (or <=); v++ (or ++v, v = v + 1)`.
    fn range_header(&self, for_loop: &ForLoop) -> Option<String> {
        let init = for_loop.init.as_ref()?;
        let var = init.name();
        let start = self.expression(init.value()?);

        let Some(Expr::Binary(condition)) = &for_loop.condition else {
            return None;
        };
        if !is_variable(&condition.left, var) {
            return None;
        }
        let bound = self.expression(&condition.right);
        let end = match condition.operator {
            BinaryOperator::Lt => bound,
            BinaryOperator::Le => format!("{} + 1", bound),
            _ => return None,
        };

        if !is_unit_increment(for_loop.update.as_ref()?, var) {
            return None;
        }

        Some(format!("for {} in range({}, {}):", var, start, end))
    }

    fn line(&self, out: &mut String, depth: usize, text: &str) {
        out.push_str(&" ".repeat(depth * self.options.indent_width));
        out.push_str(text);
        out.push('\n');
    }
}

fn defines_main(program: &Program) -> bool {
    program
        .statements
        .iter()
        .any(|stmt| matches!(stmt, Stmt::FunctionDef(func) if func.name == "main"))
}

fn is_variable(expr: &Expr, var: &str) -> bool {
    matches!(expr, Expr::Identifier(name) if name == var)
}

fn is_unit_step(step: &UnaryOp, var: &str) -> bool {
    step.operator == UnaryOperator::Increment && is_variable(&step.operand, var)
}

fn is_unit_increment(update: &ForUpdate, var: &str) -> bool {
    match update {
        ForUpdate::Step(step) => is_unit_step(step, var),
        ForUpdate::Expr(Expr::Unary(step)) => is_unit_step(step, var),
        ForUpdate::Assignment(assign) if assign.name == var => match &assign.value {
            Expr::Binary(BinaryOp {
                left,
                operator: BinaryOperator::Add,
                right,
            }) => {
                let one = Expr::Number("1".to_string());
                (is_variable(left, var) && **right == one)
                    || (**left == one && is_variable(right, var))
            }
            _ => false,
        },
        _ => false,
    }
}
