use crate::error::MathError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Looked up a variable that is not bound in the session.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is neither built in nor user defined.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operator has no meaning for these operand types.
    TypeMismatch {
        /// The operator that was applied.
        op:    String,
        /// Type of the left (or only) operand.
        left:  String,
        /// Type of the right operand, if the operator is binary.
        right: Option<String>,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operand has an acceptable type but an unusable value.
    InvalidOperand {
        /// Details about why the operand is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to bind a reserved name such as the imaginary unit.
    ReservedNameAssignment {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to define a function under the name of a built-in.
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two non-constant polynomials over different variables were combined.
    VariableMismatch {
        /// Variable of the left operand.
        left:  String,
        /// Variable of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to invert a singular matrix.
    SingularMatrix {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An exponent was negative, fractional, complex or out of range.
    InvalidExponent {
        /// Details about the exponent.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Matrix shapes are incompatible with the operation.
    DimensionMismatch {
        /// Details about the shapes involved.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Attaches a source line to a value-level failure.
    ///
    /// # Example
    /// ```
    /// use computor::error::{MathError, RuntimeError};
    ///
    /// let e = RuntimeError::from_math(MathError::DivisionByZero, 3);
    /// assert_eq!(e, RuntimeError::DivisionByZero { line: 3 });
    /// ```
    #[must_use]
    pub fn from_math(error: MathError, line: usize) -> Self {
        match error {
            MathError::DivisionByZero => Self::DivisionByZero { line },
            MathError::SingularMatrix => Self::SingularMatrix { line },
            MathError::InvalidExponent { details } => Self::InvalidExponent { details, line },
            MathError::DimensionMismatch { details } => Self::DimensionMismatch { details, line },
            MathError::VariableMismatch { left, right } => {
                Self::VariableMismatch { left, right, line }
            },
            MathError::InvalidOperation { details } => Self::InvalidOperand { details, line },
            MathError::NotFinite => Self::InvalidOperand { details: "value is not a finite number".to_string(),
                                                           line },
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            },
            Self::TypeMismatch { op,
                                 left,
                                 right: Some(right),
                                 line, } => write!(f,
                                                   "Error on line {line}: Operator '{op}' is not supported between {left} and {right}."),
            Self::TypeMismatch { op,
                                 left,
                                 right: None,
                                 line, } => {
                write!(f, "Error on line {line}: Operator '{op}' is not supported for {left}.")
            },
            Self::InvalidOperand { details, line } => {
                write!(f, "Error on line {line}: Invalid operand: {details}.")
            },
            Self::ReservedNameAssignment { name, line } => {
                write!(f, "Error on line {line}: '{name}' is reserved and cannot be assigned.")
            },
            Self::BuiltinFunctionRedefinition { name, line } => write!(f,
                                                                       "Error on line {line}: Cannot redefine built-in function '{name}'."),
            Self::VariableMismatch { left, right, line } => write!(f,
                                                                   "Error on line {line}: Cannot combine polynomials in different variables '{left}' and '{right}'."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::SingularMatrix { line } => {
                write!(f, "Error on line {line}: Matrix is singular and cannot be inverted.")
            },
            Self::InvalidExponent { details, line } => {
                write!(f, "Error on line {line}: Invalid exponent: {details}.")
            },
            Self::DimensionMismatch { details, line } => {
                write!(f, "Error on line {line}: Dimension mismatch: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
