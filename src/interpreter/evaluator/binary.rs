/// Operator dispatch.
///
/// Routes each binary operator to its handler after operand coercion.
pub mod core;

/// Addition, subtraction and element-wise multiplication.
pub mod arithmetic;

/// Division and floored modulo by a constant divisor.
pub mod division;

/// Matrix multiplication with the `**` operator.
pub mod matmul;

/// Integer exponentiation with the `^` operator.
pub mod power;
