use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume_if, current_line},
        },
    },
    util::settings::is_reserved_name,
};

/// Parses a single statement and requires the end of input after it.
///
/// A statement may be one of:
/// - a function definition, `name(param) = expr`, which becomes an equation
///   when followed by `?`.
/// - an assignment, `name = expr`, or a query on a name, `name = ?`.
/// - a query, `expr = ?`.
/// - an equation, `expr = expr ?`.
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs, ending with
///   `Token::Eof`.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// - `InvalidSyntax` for an `=` that is neither an assignment nor followed
///   eventually by `?`.
/// - `UnexpectedToken` for trailing input after a complete statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = if let Some(statement) = parse_function_definition(tokens)? {
        statement
    } else if let Some(statement) = parse_assignment(tokens)? {
        statement
    } else {
        parse_expression_statement(tokens)?
    };

    match tokens.next() {
        Some((Token::Eof, _)) | None => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("'{tok}' after the end of the statement"),
                                                     line:  *line, });
        },
    }

    log::debug!("parsed statement: {statement:?}");
    Ok(statement)
}

/// Parses a function definition of the form `<name>(<param>) = <expression>`.
///
/// This function identifies a definition by checking the exact token shape
/// `identifier "(" identifier ")" "="`. When followed by `?`, the definition
/// is instead read as the equation `name(param) = expression`, and
/// `name(param) = ?` is a query of the call.
///
/// If the input does not match a function definition, the function returns
/// `Ok(None)` without consuming tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential function name.
///
/// # Returns
/// - `Ok(Some(Statement::Function | Statement::Equation))` if a definition is
///   parsed,
/// - `Ok(None)` if no definition is present.
///
/// # Errors
/// - `InvalidFunctionSignature` if the name or the parameter is reserved,
///   e.g. `f(i) = 2`.
/// - Propagates errors from the body expression.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (name, line) = match lookahead.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((Token::Imaginary, line)) => ("i".to_string(), *line),
        _ => return Ok(None),
    };

    let param = match (lookahead.next(), lookahead.next(), lookahead.next(), lookahead.next()) {
        (Some((Token::LParen, _)),
         Some((Token::Identifier(param), _)),
         Some((Token::RParen, _)),
         Some((Token::Equals, _))) => param.clone(),
        (Some((Token::LParen, _)),
         Some((Token::Imaginary, _)),
         Some((Token::RParen, _)),
         Some((Token::Equals, _))) => "i".to_string(),
        _ => return Ok(None),
    };

    if is_reserved_name(&name) {
        return Err(ParseError::InvalidFunctionSignature { details: format!("'{name}' is reserved"),
                                                          line });
    }
    if is_reserved_name(&param) {
        return Err(ParseError::InvalidFunctionSignature { details: format!("parameter '{param}' is reserved"),
                                                          line });
    }

    *tokens = lookahead;
    let call = |name: String, param: String| Expr::FunctionCall { name,
                                                                  argument:
                                                                      Box::new(Expr::Identifier { name: param,
                                                                                                  line }),
                                                                  line };

    if consume_if(tokens, &Token::Question) {
        return Ok(Some(Statement::Query { expr: call(name, param),
                                          line }));
    }

    let body = parse_expression(tokens)?;

    if consume_if(tokens, &Token::Question) {
        let left = call(name, param);
        return Ok(Some(Statement::Equation { left,
                                             right: body,
                                             line }));
    }

    Ok(Some(Statement::Function(FunctionDef { name,
                                              param,
                                              body,
                                              line })))
}

/// Parses an assignment or a query on a name.
///
/// Supported forms:
///
/// - `<identifier> = <expression>`
/// - `<identifier> = <expression> ?`, the same assignment
/// - `<identifier> = ?`, a query of the name
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
/// Otherwise it returns `Ok(None)` and does not consume tokens.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (name, line) = match (lookahead.next(), lookahead.next()) {
        (Some((Token::Identifier(name), line)), Some((Token::Equals, _))) => (name.clone(), *line),
        _ => return Ok(None),
    };

    if is_reserved_name(&name) {
        return Err(ParseError::InvalidAssignmentTarget { name, line });
    }

    *tokens = lookahead;

    if consume_if(tokens, &Token::Question) {
        return Ok(Some(Statement::Query { expr: Expr::Identifier { name, line },
                                          line }));
    }

    let value = parse_expression(tokens)?;
    consume_if(tokens, &Token::Question);

    Ok(Some(Statement::Assignment { name, value, line }))
}

/// Parses an expression that may be followed by `= ?` or `= expr ?`.
///
/// # Errors
/// - `InvalidSyntax` if the right-hand side is not followed by `?`.
/// - `InvalidAssignmentTarget` for `i = expr` without `?`, an attempt to
///   assign to the imaginary unit.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = current_line(tokens);
    let expr = parse_expression(tokens)?;

    if !consume_if(tokens, &Token::Equals) {
        return Ok(Statement::Expression { expr, line });
    }

    if consume_if(tokens, &Token::Question) {
        return Ok(Statement::Query { expr, line });
    }

    let right = parse_expression(tokens)?;

    if consume_if(tokens, &Token::Question) {
        return Ok(Statement::Equation { left: expr,
                                        right,
                                        line });
    }

    if let Expr::Imaginary { .. } = expr {
        return Err(ParseError::InvalidAssignmentTarget { name: "i".to_string(),
                                                         line });
    }

    let found = tokens.peek().map_or_else(|| "end of input".to_string(), |(t, _)| t.to_string());
    Err(ParseError::InvalidSyntax { details: format!("expected '?' after the equation, found {found}"),
                                    line })
}

/// Parses one statement from source text.
///
/// # Example
/// ```
/// use computor::{ast::Statement, interpreter::{lexer::tokenize, parser::statement::parse}};
///
/// let tokens = tokenize("f(x) = x^2 + 1").unwrap();
/// assert!(matches!(parse(&tokens), Ok(Statement::Function(_))));
///
/// let tokens = tokenize("x^2 = 4 ?").unwrap();
/// assert!(matches!(parse(&tokens), Ok(Statement::Equation { .. })));
///
/// let tokens = tokenize("x + 1 = 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let mut iter = tokens.iter().peekable();
    parse_statement(&mut iter)
}
