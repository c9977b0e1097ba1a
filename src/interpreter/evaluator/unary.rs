use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity.
    /// - `Negate`: negation, defined for every value. Matrices are negated
    ///   element-wise and polynomials and functions coefficient-wise.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use computor::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, Value::from(5), 1).unwrap();
    /// assert_eq!(v, Value::from(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, Value::from(5), 1).unwrap();
    /// assert_eq!(v, Value::from(5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, line: usize) -> EvalResult<Value> {
        log::trace!("line {line}: {op}{value}");
        Ok(match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => match value {
                Value::Rational(r) => Value::Rational(-r),
                Value::Complex(c) => Value::Complex(-c),
                Value::Matrix(m) => Value::Matrix(-&m),
                Value::Polynomial(p) => Value::Polynomial(-&p),
                Value::Function(f) => Value::Function(-&f),
            },
        })
    }
}
