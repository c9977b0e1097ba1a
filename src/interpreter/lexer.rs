use logos::Logos;
use num_bigint::BigInt;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Decimal literal tokens, such as `3.14` or `.5`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens of any size, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// The imaginary unit, `i` in either case.
    #[token("i", priority = 3)]
    #[token("I", priority = 3)]
    Imaginary,
    /// Identifier tokens; letters only, folded to lowercase.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_lowercase())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `?`
    #[token("?")]
    Question,
    /// Line breaks are skipped but move the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by the lexer itself; [`tokenize`]
    /// appends it.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Imaginary => write!(f, "i"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::DoubleStar => write!(f, "**"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Equals => write!(f, "="),
            Self::Question => write!(f, "?"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts, so errors can report a
/// column.
pub struct LexerExtras {
    /// The current line number, starting at 1.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses a decimal literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Turns source text into tokens paired with their line numbers.
///
/// The returned sequence always ends with [`Token::Eof`].
///
/// # Errors
/// - `LexError::InvalidNumber` for a decimal point not followed by a digit.
/// - `LexError::UnexpectedCharacter` for any symbol outside the token table.
///
/// # Example
/// ```
/// use computor::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("Ab ** 2i").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds,
///            vec![Token::Identifier("ab".to_string()),
///                 Token::DoubleStar,
///                 Token::Integer(2.into()),
///                 Token::Imaginary,
///                 Token::Eof]);
///
/// assert!(tokenize("1 $ 2").is_err());
/// assert!(tokenize("3 + .").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    tokenize_at(source, 1)
}

/// Like [`tokenize`], with line numbers counted from `first_line`.
///
/// Used when a script is run one statement at a time, so that errors carry
/// the line of the script rather than of the statement.
///
/// # Errors
/// See [`tokenize`].
///
/// # Example
/// ```
/// use computor::interpreter::lexer::{Token, tokenize_at};
///
/// let tokens = tokenize_at("x", 7).unwrap();
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 7));
/// ```
pub fn tokenize_at(source: &str, first_line: usize) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source,
                                             LexerExtras { line: first_line,
                                                           ..LexerExtras::default() });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        if let Ok(tok) = token {
            tokens.push((tok, line));
            continue;
        }

        let slice = lexer.slice();
        let column = lexer.span().start - lexer.extras.line_start + 1;
        return Err(if slice.starts_with('.') {
                       LexError::InvalidNumber { text: slice.to_string(),
                                                 line,
                                                 column }
                   } else {
                       LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('?'),
                                                       line,
                                                       column }
                   });
    }

    tokens.push((Token::Eof, lexer.extras.line));
    log::trace!("tokens: {:?}", tokens.iter().map(|(t, _)| t).collect::<Vec<_>>());

    Ok(tokens)
}
