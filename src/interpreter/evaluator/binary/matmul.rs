use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates matrix multiplication using the `**` operator.
    ///
    /// Both operands must be matrices, and the column count of the left one
    /// must equal the row count of the right one.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the product.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     value::{core::Value, matrix::Matrix, scalar::Scalar},
    /// };
    ///
    /// let a = Matrix::new(vec![vec![Scalar::from(1), Scalar::from(2)],
    ///                          vec![Scalar::from(3), Scalar::from(4)]]).unwrap();
    /// let v = Matrix::new(vec![vec![Scalar::from(1)], vec![Scalar::from(2)]]).unwrap();
    ///
    /// // [[1,2];[3,4]] ** [[1];[2]] = [[5];[11]]
    /// let result = Evaluator::eval_matmul(Value::Matrix(a), Value::Matrix(v), 1).unwrap();
    /// let expected = Matrix::new(vec![vec![Scalar::from(5)], vec![Scalar::from(11)]]).unwrap();
    /// assert_eq!(result, Value::Matrix(expected));
    /// ```
    pub fn eval_matmul(left: Value, right: Value, line: usize) -> EvalResult<Value> {
        match (&left, &right) {
            (Value::Matrix(a), Value::Matrix(b)) => {
                a.matmul(b)
                 .map(Value::Matrix)
                 .map_err(|e| RuntimeError::from_math(e, line))
            },
            _ => Err(RuntimeError::TypeMismatch { op: BinaryOperator::MatMul.to_string(),
                                                  left: left.type_name().to_string(),
                                                  right: Some(right.type_name().to_string()),
                                                  line }),
        }
    }
}
