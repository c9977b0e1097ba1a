use crate::error::MathError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while solving an equation.
pub enum SolveError {
    /// The standard form has a degree the solver does not handle.
    UnsolvableEquation {
        /// The actual degree of the standard form.
        degree: usize,
    },
    /// Arithmetic failed while computing the roots.
    Math(MathError),
}

impl From<MathError> for SolveError {
    fn from(e: MathError) -> Self {
        Self::Math(e)
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsolvableEquation { degree } => {
                write!(f, "The polynomial degree is {degree}, I can't solve it.")
            },
            Self::Math(e) => write!(f, "Cannot solve: {e}"),
        }
    }
}

impl std::error::Error for SolveError {}
