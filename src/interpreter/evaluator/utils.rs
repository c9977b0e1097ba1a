use crate::{
    ast::{Expr, LiteralValue},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{
            complex::Complex, core::Value, matrix::Matrix, polynomial::Polynomial,
            rational::Rational,
        },
    },
};

impl Evaluator<'_> {
    /// Evaluates a numeric literal.
    ///
    /// Integers are exact. Decimals cross the float boundary with the
    /// session's precision; a literal that does not survive the round trip is
    /// logged.
    ///
    /// # Parameters
    /// - `value`: Literal to convert.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// A `Value::Rational`.
    pub(crate) fn eval_literal(&self, value: &LiteralValue, line: usize) -> EvalResult<Value> {
        match value {
            LiteralValue::Integer(n) => Ok(Value::Rational(Rational::from_integer(n.clone()))),
            LiteralValue::Real(r) => {
                let exact = Rational::from_f64(*r, self.settings.precision, self.settings.epsilon)
                    .map_err(|e| RuntimeError::from_math(e, line))?;
                if (exact.to_f64() - r).abs() > f64::EPSILON * r.abs() {
                    log::warn!("line {line}: {r} rounded to {exact} ({} digits)",
                               self.settings.precision);
                }
                Ok(Value::Rational(exact))
            },
        }
    }

    /// Resolves a name.
    ///
    /// Lookup order:
    /// 1. the parameter of the function being defined, as an indeterminate;
    /// 2. a bound variable;
    /// 3. a defined function;
    /// 4. otherwise the name is an unbound indeterminate.
    ///
    /// Resolution never fails: unknown names are what equations solve for.
    pub(crate) fn eval_identifier(&self, name: &str) -> Value {
        if self.parameter.as_deref() == Some(name) {
            return Value::Polynomial(Polynomial::x(name));
        }
        if let Some(value) = self.context.variable(name) {
            return value.clone();
        }
        if let Some(function) = self.context.function(name) {
            return Value::Function(function.clone());
        }

        log::trace!("'{name}' is unbound, using it as an indeterminate");
        Value::Polynomial(Polynomial::x(name))
    }

    pub(crate) fn eval_imaginary() -> Value {
        Value::Complex(Complex::i())
    }

    /// Evaluates a matrix literal.
    ///
    /// Every cell must reduce to a scalar; constant polynomials are
    /// collapsed.
    ///
    /// # Errors
    /// - `InvalidOperand` for a cell that is a matrix, a function or a
    ///   non-constant polynomial.
    /// - `DimensionMismatch` if the literal exceeds the configured bounds.
    pub(crate) fn eval_matrix_literal(&self, rows: &[Vec<Expr>], line: usize) -> EvalResult<Value> {
        let mut data = Vec::with_capacity(rows.len());
        for row in rows {
            let mut cells = Vec::with_capacity(row.len());
            for cell in row {
                let value = self.eval(cell)?;
                let Some(scalar) = value.as_scalar() else {
                    return Err(RuntimeError::InvalidOperand { details: format!("matrix elements must be numbers, got {}",
                                                                               value.type_name()),
                                                              line });
                };
                cells.push(scalar.simplify());
            }
            data.push(cells);
        }

        Matrix::with_limits(data, self.settings.max_matrix_rows, self.settings.max_matrix_cols)
            .map(Value::Matrix)
            .map_err(|e| RuntimeError::from_math(e, line))
    }

    /// Converts a value to a polynomial.
    ///
    /// - Polynomials are returned as is.
    /// - Functions contribute their body.
    /// - Numbers become constants in `variable`.
    ///
    /// # Errors
    /// Returns `InvalidOperand` for matrices, naming `what` needed the
    /// polynomial.
    pub(crate) fn to_polynomial(value: Value,
                                variable: &str,
                                what: &str,
                                line: usize)
                                -> EvalResult<Polynomial> {
        match value {
            Value::Polynomial(p) => Ok(p),
            Value::Function(f) => Ok(f.body().clone()),
            Value::Rational(r) => Ok(Polynomial::from_constant(r, variable)),
            Value::Complex(c) => Ok(Polynomial::from_constant(c, variable)),
            Value::Matrix(_) => {
                Err(RuntimeError::InvalidOperand { details: format!("{what} cannot be a matrix"),
                                                   line })
            },
        }
    }

    /// Reads a value as a power exponent.
    ///
    /// The exponent must be a real integer in `0..=max_power_exponent`.
    /// Complex numbers with a zero imaginary part and constant polynomials
    /// are accepted.
    ///
    /// # Errors
    /// Returns `InvalidExponent` otherwise.
    pub(crate) fn exponent_of(&self, value: &Value, line: usize) -> EvalResult<u32> {
        let invalid = |details: String| RuntimeError::InvalidExponent { details, line };

        let scalar = value.as_scalar()
                          .ok_or_else(|| invalid(format!("exponent cannot be a {}", value.type_name())))?;
        let real = scalar.to_rational()
                         .ok_or_else(|| invalid(format!("exponent must be real, got {scalar}")))?;

        if !real.is_integer() {
            return Err(invalid(format!("exponent must be an integer, got {real}")));
        }
        if real.is_negative() {
            return Err(invalid(format!("exponent must be non-negative, got {real}")));
        }

        real.to_u32()
            .filter(|n| *n <= self.settings.max_power_exponent)
            .ok_or_else(|| {
                invalid(format!("exponent {real} exceeds the maximum of {}",
                                self.settings.max_power_exponent))
            })
    }
}
