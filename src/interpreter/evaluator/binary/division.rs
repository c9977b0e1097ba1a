use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::arithmetic::{mismatch, scalar_type},
            coercion::Coerced,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `/` or `%` on coerced operands.
    ///
    /// The divisor must be a number, or reduce to one. Polynomials and
    /// functions are divided coefficient by coefficient, and so are
    /// matrices. `%` is the floored modulo and is only defined on real
    /// operands.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor.
    /// - `TypeMismatch` when dividing by a matrix, a non-constant polynomial
    ///   or a function.
    /// - `InvalidOperand` for `%` on complex numbers.
    pub(crate) fn eval_division(op: BinaryOperator,
                                operands: Coerced,
                                line: usize)
                                -> EvalResult<Value> {
        let math = |e| RuntimeError::from_math(e, line);
        let is_mod = op == BinaryOperator::Mod;

        match operands {
            Coerced::Scalars(a, b) => {
                let result = if is_mod { a.checked_rem(&b) } else { a.checked_div(&b) };
                result.map(Value::from).map_err(math)
            },
            Coerced::MatrixScalar(m, s) => {
                let result = if is_mod { m.rem_scalar(&s) } else { m.div_scalar(&s) };
                result.map(Value::Matrix).map_err(math)
            },
            Coerced::ScalarMatrix(s, _) => Err(mismatch(op, scalar_type(&s), "Matrix", line)),
            Coerced::Matrices(..) => Err(mismatch(op, "Matrix", "Matrix", line)),

            Coerced::Polynomials(_, q) if !q.is_constant() => {
                Err(mismatch(op, "Polynomial", "Polynomial", line))
            },
            Coerced::Polynomials(p, q) => {
                let result = if is_mod { p.rem(&q) } else { p.div(&q) };
                result.map(Value::Polynomial).map_err(math)
            },

            Coerced::FunctionLeft(_, q) if !q.is_constant() => {
                Err(mismatch(op, "Function", "Polynomial", line))
            },
            Coerced::FunctionLeft(f, q) => {
                let result = if is_mod { f.rem(&q) } else { f.div(&q) };
                result.map(Value::Function).map_err(math)
            },
            Coerced::FunctionRight(..) => Err(mismatch(op, "Polynomial", "Function", line)),
        }
    }
}
