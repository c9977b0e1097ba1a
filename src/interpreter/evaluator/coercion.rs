use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::Value, function::Function, matrix::Matrix, polynomial::Polynomial,
            scalar::Scalar,
        },
    },
};

/// Two operands brought to a common representation.
///
/// Scalars are promoted as far as the other operand requires: a number next
/// to a polynomial becomes a constant polynomial in that polynomial's
/// variable, and a number or polynomial next to a function becomes a
/// polynomial in the function's parameter. Matrices never combine with
/// polynomials or functions.
#[derive(Debug, Clone)]
pub enum Coerced {
    Scalars(Scalar, Scalar),
    Matrices(Matrix, Matrix),
    MatrixScalar(Matrix, Scalar),
    ScalarMatrix(Scalar, Matrix),
    Polynomials(Polynomial, Polynomial),
    /// A function on the left and the right operand as a polynomial in its
    /// parameter.
    FunctionLeft(Function, Polynomial),
    /// A polynomial in the function's parameter on the left, the function on
    /// the right.
    FunctionRight(Polynomial, Function),
}

/// Position of a value in the promotion order
/// `Rational < Complex < Polynomial < Function`. Matrices sit outside the
/// chain.
///
/// # Example
/// ```
/// use computor::interpreter::{
///     evaluator::coercion::promotion_rank,
///     value::{complex::Complex, core::Value},
/// };
///
/// assert!(promotion_rank(&Value::from(1)) < promotion_rank(&Value::Complex(Complex::i())));
/// ```
#[must_use]
pub const fn promotion_rank(value: &Value) -> u8 {
    match value {
        Value::Rational(_) => 0,
        Value::Complex(_) => 1,
        Value::Polynomial(_) => 2,
        Value::Function(_) => 3,
        Value::Matrix(_) => 4,
    }
}

fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { op: op.to_string(),
                                 left: left.type_name().to_string(),
                                 right: Some(right.type_name().to_string()),
                                 line }
}

/// Brings two operands of `op` to a common representation.
///
/// # Errors
/// - `TypeMismatch` when a matrix meets a polynomial or a function.
/// - `VariableMismatch` when two functions have different parameters.
pub fn coerce(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Coerced> {
    use Value::{Complex, Function as Func, Matrix as Mat, Polynomial as Poly, Rational};

    log::trace!("coercing {} {op} {}", left.type_name(), right.type_name());

    match (left, right) {
        (Mat(a), Mat(b)) => Ok(Coerced::Matrices(a, b)),
        (Mat(a), b @ (Rational(_) | Complex(_))) => Ok(Coerced::MatrixScalar(a, scalar_of(&b))),
        (a @ (Rational(_) | Complex(_)), Mat(b)) => Ok(Coerced::ScalarMatrix(scalar_of(&a), b)),
        (left @ Mat(_), right) | (left, right @ Mat(_)) => {
            Err(type_mismatch(op, &left, &right, line))
        },

        (Func(f), Func(g)) => {
            let body = f.compatible_body(&g)
                        .map_err(|e| RuntimeError::from_math(e, line))?
                        .clone();
            Ok(Coerced::FunctionLeft(f, body))
        },
        (Func(f), other) => {
            let p = as_polynomial(other, f.parameter());
            Ok(Coerced::FunctionLeft(f, p))
        },
        (other, Func(f)) => {
            let p = as_polynomial(other, f.parameter());
            Ok(Coerced::FunctionRight(p, f))
        },

        (Poly(p), other) => {
            let q = as_polynomial(other, p.variable());
            Ok(Coerced::Polynomials(p, q))
        },
        (other, Poly(q)) => {
            let p = as_polynomial(other, q.variable());
            Ok(Coerced::Polynomials(p, q))
        },

        (a, b) => Ok(Coerced::Scalars(scalar_of(&a), scalar_of(&b))),
    }
}

/// Scalar view of a number. Only called on `Rational` or `Complex`.
fn scalar_of(value: &Value) -> Scalar {
    match value {
        Value::Rational(r) => Scalar::Rational(r.clone()),
        Value::Complex(c) => Scalar::Complex(c.clone()),
        _ => Scalar::zero(),
    }
}

/// Polynomial view of a number or a polynomial.
fn as_polynomial(value: Value, variable: &str) -> Polynomial {
    match value {
        Value::Polynomial(p) => p,
        other => Polynomial::from_constant(scalar_of(&other), variable),
    }
}
