use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
    util::settings::Settings,
};

fn expect_matrix<'a>(name: &str, arg: &'a Value, line: usize) -> EvalResult<&'a Matrix> {
    match arg {
        Value::Matrix(m) => Ok(m),
        other => Err(RuntimeError::InvalidOperand { details: format!("{name}() requires a Matrix, got {}",
                                                                     other.type_name()),
                                                    line }),
    }
}

/// Determinant of a square matrix.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::{
///         evaluator::function::matrix::det,
///         value::{core::Value, matrix::Matrix, scalar::Scalar},
///     },
///     util::settings::Settings,
/// };
///
/// let m = Matrix::new(vec![vec![Scalar::from(1), Scalar::from(2)],
///                          vec![Scalar::from(3), Scalar::from(4)]]).unwrap();
/// let d = det(&Value::Matrix(m), &Settings::default(), 1).unwrap();
/// assert_eq!(d, Value::from(-2));
/// ```
pub fn det(arg: &Value, _: &Settings, line: usize) -> EvalResult<Value> {
    expect_matrix("det", arg, line)?.determinant()
                                    .map(|d| Value::from(d).simplify())
                                    .map_err(|e| RuntimeError::from_math(e, line))
}

/// Inverse of a square, non-singular matrix.
pub fn inv(arg: &Value, _: &Settings, line: usize) -> EvalResult<Value> {
    expect_matrix("inv", arg, line)?.inverse()
                                    .map(Value::Matrix)
                                    .map_err(|e| RuntimeError::from_math(e, line))
}

pub fn transpose(arg: &Value, _: &Settings, line: usize) -> EvalResult<Value> {
    Ok(Value::Matrix(expect_matrix("transpose", arg, line)?.transpose()))
}
