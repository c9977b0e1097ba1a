use num_bigint::BigInt;

/// Represents a numeric literal as written in the source.
///
/// Decimals are kept as floats here; the evaluator converts them to exact
/// rationals with the session's precision.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An integer literal of any size.
    Integer(BigInt),
    /// A decimal literal such as `2.5` or `.5`.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<BigInt> for LiteralValue {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers numbers, names, the imaginary unit, operators, matrix
/// literals and single-argument calls. Every variant records the line it
/// starts on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal as written.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a name. Names are already lowercase.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// The imaginary unit `i`.
    Imaginary {
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A matrix literal; rows are guaranteed to have equal lengths.
    Matrix {
        /// Row-major cell expressions.
        rows: Vec<Vec<Self>>,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call expression (e.g. `f(2)`).
    FunctionCall {
        /// Name of the function being called.
        name:     String,
        /// The single argument.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use computor::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Identifier { line, .. }
            | Self::Imaginary { line }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Matrix { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition, `name(param) = body`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:  String,
    /// The parameter name (e.g. `x`).
    pub param: String,
    /// The body expression.
    pub body:  Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// `expr = ?`: evaluate and show.
    Query {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `left = right ?`: solve for the unknown.
    Equation {
        /// Left-hand side.
        left:  Expr,
        /// Right-hand side.
        right: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Assignment { line, .. }
            | Self::Query { line, .. }
            | Self::Equation { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`), element-wise on matrices
    Mul,
    /// Matrix multiplication (`**`)
    MatMul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`), the identity.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, MatMul, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            MatMul => "**",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
