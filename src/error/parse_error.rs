#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but another one was found.
    ExpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The statement is well tokenized but has no valid form.
    InvalidSyntax {
        /// Details about the malformed statement.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The left-hand side of an assignment cannot be assigned to.
    InvalidAssignmentTarget {
        /// The rejected target.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Matrix rows with differing element counts.
    InvalidMatrixShape {
        /// Which row disagreed and how.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function definition or call whose head is malformed.
    InvalidFunctionSignature {
        /// Details about the signature.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::InvalidSyntax { details, line } => {
                write!(f, "Error on line {line}: Invalid syntax: {details}.")
            },

            Self::InvalidAssignmentTarget { name, line } => {
                write!(f, "Error on line {line}: Cannot assign to '{name}'.")
            },

            Self::InvalidMatrixShape { details, line } => {
                write!(f, "Error on line {line}: Invalid matrix: {details}.")
            },

            Self::InvalidFunctionSignature { details, line } => write!(f,
                                                                       "Error on line {line}: Invalid function signature: {details}. Example: f(x) = x * x"),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
