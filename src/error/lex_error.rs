#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character that is not part of the token table.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The 1-based column of the character.
        column:    usize,
    },
    /// A decimal point that does not start or continue a number.
    InvalidNumber {
        /// The text that failed to form a number.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based column where the number starts.
        column: usize,
    },
}

impl LexError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}, column {column}: Unexpected character '{character}'."),
            Self::InvalidNumber { text, line, column } => {
                write!(f,
                       "Error on line {line}, column {column}: Invalid number '{text}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
