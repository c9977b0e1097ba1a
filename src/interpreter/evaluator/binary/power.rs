use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation with an already validated exponent.
    ///
    /// Every value can be raised to a power: numbers exactly, matrices by
    /// repeated matrix multiplication (square matrices only), polynomials and
    /// functions by repeated polynomial multiplication. `x^0` is one, and
    /// `A^0` the identity, even for a zero base.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent, already checked against the configured
    ///   maximum.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let result = Evaluator::eval_pow(Value::from(2), 10, 1).unwrap();
    /// assert_eq!(result, Value::from(1024));
    /// ```
    pub fn eval_pow(base: Value, exponent: u32, line: usize) -> EvalResult<Value> {
        match base {
            Value::Rational(r) => Ok(Value::Rational(r.pow(exponent))),
            Value::Complex(c) => Ok(Value::Complex(c.pow(exponent))),
            Value::Matrix(m) => m.pow(exponent)
                                 .map(Value::Matrix)
                                 .map_err(|e| RuntimeError::from_math(e, line)),
            Value::Polynomial(p) => Ok(Value::Polynomial(p.pow(exponent))),
            Value::Function(f) => Ok(Value::Function(f.pow(exponent))),
        }
    }
}
