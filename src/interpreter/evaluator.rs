/// Session bindings.
///
/// Holds the variables and user-defined functions of one session.
pub mod context;

/// Core evaluation logic.
///
/// Contains the `Evaluator`, statement dispatch, function definitions and the
/// reduction of equations to polynomials.
pub mod core;

/// Operand coercion.
///
/// Brings the two operands of a binary operator to a common representation
/// along the promotion order before the operator runs.
pub mod coercion;

/// Binary operator evaluation logic.
///
/// Handles `+`, `-`, `*`, `**`, `/`, `%` and `^` on every pair of values.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus and negation.
pub mod unary;

/// Utility functions for evaluation.
///
/// Literals, name resolution, matrix literals and conversions shared by the
/// other evaluator modules.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls.
pub mod function;
