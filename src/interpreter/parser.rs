/// Parser entry points and shared result type.
///
/// Defines `ParseResult` and `parse_expression`, the start of the
/// precedence chain.
pub mod core;

/// Statement classification.
///
/// Decides whether a line is a function definition, an assignment, a query,
/// an equation or a plain expression, then parses it.
pub mod statement;

/// Binary operator levels.
///
/// Implements the left-associative additive and multiplicative levels and the
/// right-associative power level.
pub mod binary;

/// Unary operators, calls and primary expressions.
///
/// Handles prefix `+`/`-`, single-argument calls, literals, grouping and
/// matrix literals.
pub mod unary;

/// Utility functions for the parser.
///
/// Token expectation helpers and comma-separated list parsing.
pub mod utils;
