use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative, so an input like `-+x` is parsed as
/// `-( +x )`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_power(tokens),
    };

    let line = tokens.next().map_or(0, |(_, l)| *l);
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a function call or falls through to a primary expression.
///
/// A call is an identifier immediately followed by `(`, with exactly one
/// argument.
///
/// # Errors
/// - `InvalidFunctionSignature` for an empty argument list `f()`.
/// - `ExpectedToken` if the closing `)` is missing.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(name), line)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::LParen, _)) = lookahead.peek() {
            let (name, line) = (name.clone(), *line);
            tokens.next();
            tokens.next();

            if let Some((Token::RParen, _)) = tokens.peek() {
                return Err(ParseError::InvalidFunctionSignature { details: format!("call to '{name}' requires an argument"),
                                                                  line });
            }

            let argument = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "function call")?;

            return Ok(Expr::FunctionCall { name,
                                           argument: Box::new(argument),
                                           line });
        }
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | "i"
///              | "(" expression ")"
///              | matrix
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;
    let line = *line;

    match token {
        Token::Integer(n) => Ok(Expr::Number { value: LiteralValue::Integer(n.clone()),
                                               line }),
        Token::Real(r) => Ok(Expr::Number { value: LiteralValue::Real(*r),
                                            line }),
        Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone(),
                                                         line }),
        Token::Imaginary => Ok(Expr::Imaginary { line }),
        Token::LParen => {
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "grouped expression")?;
            Ok(expr)
        },
        Token::LBracket => parse_matrix_literal(tokens, line),
        Token::Eof => Err(ParseError::UnexpectedEndOfInput { line }),
        tok => Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                 line }),
    }
}

/// Parses a matrix literal after its opening `[`.
///
/// Rows are bracketed, comma-separated lists of expressions; rows are
/// separated by `;`. Every row must have as many elements as the first.
///
/// Grammar: `matrix := "[" row (";" row)* "]"`, `row := "[" expression ("," expression)* "]"`
///
/// # Errors
/// - `InvalidMatrixShape` if a row length differs from the first row.
/// - `ExpectedToken` for missing brackets.
fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let rows = parse_separated(tokens, parse_matrix_row, &Token::Semicolon)?;

    let expected = rows[0].len();
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        return Err(ParseError::InvalidMatrixShape { details: format!("row {} has {} elements, expected {expected}",
                                                                     index + 1,
                                                                     row.len()),
                                                    line });
    }

    expect_token(tokens, &Token::RBracket, "matrix")?;

    Ok(Expr::Matrix { rows, line })
}

/// Parses one bracketed matrix row.
fn parse_matrix_row<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LBracket, "matrix row")?;
    let elements = parse_separated(tokens, parse_expression, &Token::Comma)?;
    expect_token(tokens, &Token::RBracket, "matrix row")?;
    Ok(elements)
}
