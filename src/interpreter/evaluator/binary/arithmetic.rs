use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            coercion::Coerced,
            core::{EvalResult, Evaluator},
        },
        value::{core::Value, scalar::Scalar},
    },
};

impl Evaluator<'_> {
    /// Evaluates `+`, `-` or `*` on coerced operands.
    ///
    /// - Numbers use exact rational or complex arithmetic.
    /// - Matrices add and subtract element-wise and require equal shapes.
    ///   `*` between two matrices is also element-wise; `**` is the matrix
    ///   product.
    /// - A matrix and a number only combine with `*`, which scales the
    ///   matrix.
    /// - Polynomials and functions combine term by term. The result of an
    ///   operation involving a function is again a function with the same
    ///   name and parameter.
    ///
    /// # Errors
    /// - `TypeMismatch` for `matrix + number` and similar.
    /// - `DimensionMismatch` for matrices of different shapes.
    /// - `VariableMismatch` for polynomials over different variables.
    pub(crate) fn eval_arithmetic(op: BinaryOperator,
                                  operands: Coerced,
                                  line: usize)
                                  -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};
        let math = |e| RuntimeError::from_math(e, line);

        match (op, operands) {
            (Add, Coerced::Scalars(a, b)) => Ok(Value::from(&a + &b)),
            (Sub, Coerced::Scalars(a, b)) => Ok(Value::from(&a - &b)),
            (Mul, Coerced::Scalars(a, b)) => Ok(Value::from(&a * &b)),

            (Add, Coerced::Matrices(a, b)) => a.add(&b).map(Value::Matrix).map_err(math),
            (Sub, Coerced::Matrices(a, b)) => a.sub(&b).map(Value::Matrix).map_err(math),
            (Mul, Coerced::Matrices(a, b)) => {
                a.mul_elementwise(&b).map(Value::Matrix).map_err(math)
            },

            (Mul, Coerced::MatrixScalar(m, s) | Coerced::ScalarMatrix(s, m)) => {
                Ok(Value::Matrix(m.scale(&s)))
            },
            (_, Coerced::MatrixScalar(_, s)) => Err(mismatch(op, "Matrix", scalar_type(&s), line)),
            (_, Coerced::ScalarMatrix(s, _)) => Err(mismatch(op, scalar_type(&s), "Matrix", line)),

            (Add, Coerced::Polynomials(p, q)) => p.add(&q).map(Value::Polynomial).map_err(math),
            (Sub, Coerced::Polynomials(p, q)) => p.sub(&q).map(Value::Polynomial).map_err(math),
            (Mul, Coerced::Polynomials(p, q)) => p.mul(&q).map(Value::Polynomial).map_err(math),

            (Add, Coerced::FunctionLeft(f, p) | Coerced::FunctionRight(p, f)) => {
                f.add(&p).map(Value::Function).map_err(math)
            },
            (Mul, Coerced::FunctionLeft(f, p) | Coerced::FunctionRight(p, f)) => {
                f.mul(&p).map(Value::Function).map_err(math)
            },
            (Sub, Coerced::FunctionLeft(f, p)) => f.sub(&p).map(Value::Function).map_err(math),
            (Sub, Coerced::FunctionRight(p, f)) => f.rsub(&p).map(Value::Function).map_err(math),

            (op, _) => Err(RuntimeError::InvalidOperand { details: format!("{op} is not an additive operator"),
                                                          line }),
        }
    }
}

pub(crate) fn mismatch(op: BinaryOperator, left: &str, right: &str, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { op: op.to_string(),
                                 left: left.to_string(),
                                 right: Some(right.to_string()),
                                 line }
}

pub(crate) const fn scalar_type(scalar: &Scalar) -> &'static str {
    match scalar {
        Scalar::Rational(_) => "Rational",
        Scalar::Complex(_) => "Complex",
    }
}
