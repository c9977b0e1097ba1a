use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, which must be `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token.
/// - `context`: What was being parsed, for the error message.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// - `ExpectedToken` if another token is found.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          context: &str)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((Token::Eof, line)) => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        Some((tok, line)) => Err(ParseError::ExpectedToken { expected: format!("'{expected}' in {context}"),
                                                             found:    format!("'{tok}'"),
                                                             line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Returns `true` and consumes the next token if it equals `token`.
pub(in crate::interpreter::parser) fn consume_if<'a, I>(tokens: &mut Peekable<I>,
                                                        token: &Token)
                                                        -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((tok, _)) = tokens.peek()
       && tok == token
    {
        tokens.next();
        return true;
    }
    false
}

/// Line of the next token, or 0 on an exhausted stream.
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, l)| *l)
}

/// Parses a non-empty list of items separated by `separator`.
///
/// Grammar (simplified): `list := item (separator item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
/// - `separator`: The token between items (e.g., `,` or `;`).
///
/// # Returns
/// A vector of parsed items. The token after the last item is not consumed.
pub(in crate::interpreter::parser) fn parse_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    separator: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = vec![parse_item(tokens)?];
    while consume_if(tokens, separator) {
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}
