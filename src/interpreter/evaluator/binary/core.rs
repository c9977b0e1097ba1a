use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            coercion::coerce,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. `+`, `-`, `*`, `/` and `%` coerce their operands to a
    /// common representation first. `**` is reserved for matrices. `^` reads
    /// its right operand as an integer exponent.
    ///
    /// Scalar results are simplified, so a complex result with a zero
    /// imaginary part comes back as a rational.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use computor::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::{context::Context, core::Evaluator},
    ///         value::{core::Value, rational::Rational},
    ///     },
    ///     util::settings::Settings,
    /// };
    ///
    /// let mut context = Context::new();
    /// let settings = Settings::default();
    /// let evaluator = Evaluator::new(&mut context, &settings);
    ///
    /// let result = evaluator.eval_binary(BinaryOperator::Div, Value::from(1), Value::from(3), 1);
    /// assert_eq!(result.unwrap(), Value::Rational(Rational::new(1, 3).unwrap()));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, MatMul, Mod, Mul, Pow, Sub};

        let result = match op {
            Add | Sub | Mul => Self::eval_arithmetic(op, coerce(op, left, right, line)?, line),
            Div | Mod => Self::eval_division(op, coerce(op, left, right, line)?, line),
            MatMul => Self::eval_matmul(left, right, line),
            Pow => {
                let exponent = self.exponent_of(&right, line)?;
                Self::eval_pow(left, exponent, line)
            },
        }?;

        Ok(result.simplify())
    }
}
