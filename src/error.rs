/// Lexing errors.
///
/// Raised by the tokenizer when a character outside the token table is met,
/// or when a decimal point is not followed by a digit.
pub mod lex_error;
/// Value-level arithmetic failures.
///
/// The numeric tower reports these without any source location. The
/// evaluator attaches the line of the failing operator before the error
/// leaves the interpreter.
pub mod math_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a
/// statement: unexpected tokens, malformed statements, bad matrix literals and
/// invalid function signatures.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches between operands, division by zero, singular matrices, or
/// assignments to reserved names.
pub mod runtime_error;
/// Solver errors.
///
/// Raised when an equation cannot be brought into a solvable form, most
/// notably when its degree is above the supported maximum.
pub mod solve_error;

pub use lex_error::LexError;
pub use math_error::{MathError, MathResult};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use solve_error::SolveError;

/// Any failure a statement can produce, tagged by the stage that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The token stream is not a valid statement.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
    /// The equation could not be solved.
    Solve(SolveError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<SolveError> for Error {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Solve(e) => Some(e),
        }
    }
}
