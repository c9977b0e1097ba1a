/// Result type returned by the numeric tower.
pub type MathResult<T> = Result<T, MathError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failures raised by arithmetic on values, before any source location is
/// known.
pub enum MathError {
    /// A division or modulo whose divisor is zero, or a zero denominator.
    DivisionByZero,
    /// A matrix without an inverse.
    SingularMatrix,
    /// An exponent that is negative, fractional, complex or too large.
    InvalidExponent {
        /// Why the exponent was rejected.
        details: String,
    },
    /// Operand shapes do not fit the operation.
    DimensionMismatch {
        /// A description of both shapes.
        details: String,
    },
    /// Two non-constant polynomials over different indeterminates met.
    VariableMismatch {
        /// Variable of the left operand.
        left:  String,
        /// Variable of the right operand.
        right: String,
    },
    /// The operation is not defined for these operands.
    InvalidOperation {
        /// What was attempted.
        details: String,
    },
    /// A floating-point value that is not finite reached the rational
    /// boundary.
    NotFinite,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::SingularMatrix => write!(f, "Matrix is singular and cannot be inverted."),
            Self::InvalidExponent { details } => write!(f, "Invalid exponent: {details}."),
            Self::DimensionMismatch { details } => write!(f, "Dimension mismatch: {details}."),
            Self::VariableMismatch { left, right } => write!(f,
                                                             "Cannot combine polynomials in different variables '{left}' and '{right}'."),
            Self::InvalidOperation { details } => write!(f, "Invalid operation: {details}."),
            Self::NotFinite => write!(f, "Value is not a finite number."),
        }
    }
}

impl std::error::Error for MathError {}
