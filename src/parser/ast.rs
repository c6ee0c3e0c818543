// AST (Abstract Syntax Tree) definitions for the C++ subset

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl BinaryOperator {
    /// Map an operator lexeme to its binary operator, if it is one.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        let op = match lexeme {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Sub,
            "*" => BinaryOperator::Mul,
            "/" => BinaryOperator::Div,
            "%" => BinaryOperator::Mod,
            "<" => BinaryOperator::Lt,
            ">" => BinaryOperator::Gt,
            "<=" => BinaryOperator::Le,
            ">=" => BinaryOperator::Ge,
            "==" => BinaryOperator::Eq,
            "!=" => BinaryOperator::Ne,
            _ => return None,
        };
        Some(op)
    }

    /// The operator as written in source (and in Python, which spells these the same).
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::Le => "<=",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
        }
    }
}

/// Increment/decrement operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Increment, // ++
    Decrement, // --
}

impl UnaryOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "++" => Some(UnaryOperator::Increment),
            "--" => Some(UnaryOperator::Decrement),
            _ => None,
        }
    }
}

/// `++`/`--` applied to an operand.
///
/// The same node means different things by position: as a statement it
/// mutates the operand in place, inside an expression it only yields the
/// adjusted value.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub operand: Box<Expr>,
    pub operator: UnaryOperator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal, kept as its source text (integer or float)
    Number(String),
    /// String literal including its quotes
    Str(String),
    Identifier(String),
    Binary(BinaryOp),
    Unary(UnaryOp),
    Call(FunctionCall),
    /// Prefix minus: -x
    Negate(Box<Expr>),
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(BinaryOp {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(text.into())
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub param_type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub var_type: String,
    pub name: String,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoutStatement {
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CinStatement {
    pub variables: Vec<String>,
}

/// What follows an `if` body
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ElseBranch {
    #[default]
    None,
    /// `else { ... }`
    Block(Vec<Stmt>),
    /// `else if (...) { ... }`, one link of a chain
    ElseIf(Box<IfStatement>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub else_branch: ElseBranch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Declaration(VarDeclaration),
    Assignment(Assignment),
}

impl ForInit {
    /// Name of the variable the initializer binds
    pub fn name(&self) -> &str {
        match self {
            ForInit::Declaration(decl) => &decl.name,
            ForInit::Assignment(assign) => &assign.name,
        }
    }

    pub fn value(&self) -> Option<&Expr> {
        match self {
            ForInit::Declaration(decl) => decl.value.as_ref(),
            ForInit::Assignment(assign) => Some(&assign.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForUpdate {
    Assignment(Assignment),
    Step(UnaryOp),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub init: Option<ForInit>,
    pub condition: Option<Expr>,
    pub update: Option<ForUpdate>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expr>,
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FunctionDef(FunctionDef),
    VarDecl(VarDeclaration),
    Assignment(Assignment),
    Cout(CoutStatement),
    Cin(CinStatement),
    /// `x++;` / `--x;` in statement position
    Step(UnaryOp),
    If(IfStatement),
    For(ForLoop),
    While(WhileLoop),
    Return(ReturnStatement),
    Call(FunctionCall),
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>, // Declaration order is significant
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
