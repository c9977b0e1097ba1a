use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            complex::Complex, function::Function, matrix::Matrix, polynomial::Polynomial,
            rational::Rational, scalar::Scalar,
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can evaluate to. Each variant
/// supports the same operator set; the evaluator promotes mismatched operands
/// before dispatching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// An exact fraction.
    Rational(Rational),
    /// A complex number with rational parts.
    Complex(Complex),
    /// A rectangular grid of scalars.
    Matrix(Matrix),
    /// A polynomial in one indeterminate. Unbound identifiers evaluate to
    /// one of these.
    Polynomial(Polynomial),
    /// A user function, produced by a definition or by naming a defined
    /// function in an expression.
    Function(Function),
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Self::Complex(c)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Rational(r) => Self::Rational(r),
            Scalar::Complex(c) => Self::Complex(c),
        }
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<Polynomial> for Value {
    fn from(p: Polynomial) -> Self {
        Self::Polynomial(p)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Rational(Rational::from_integer(v))
    }
}

impl Value {
    /// The user-facing name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Rational(_) => "Rational",
            Self::Complex(_) => "Complex",
            Self::Matrix(_) => "Matrix",
            Self::Polynomial(_) => "Polynomial",
            Self::Function(_) => "Function",
        }
    }

    /// Returns the value as a scalar, if it is one.
    ///
    /// Constant polynomials count as scalars.
    #[must_use]
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Rational(r) => Some(Scalar::Rational(r.clone())),
            Self::Complex(c) => Some(Scalar::Complex(c.clone())),
            Self::Polynomial(p) => p.to_constant(),
            Self::Matrix(_) | Self::Function(_) => None,
        }
    }

    /// Converts the value to a scalar, or returns an error naming `what`
    /// needed it.
    ///
    /// # Parameters
    /// - `what`: Short description of the consumer, for the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(Scalar)`: If the value is a rational, a complex or a constant
    ///   polynomial.
    /// - `Err(RuntimeError::InvalidOperand)`: Otherwise.
    pub fn expect_scalar(&self, what: &str, line: usize) -> EvalResult<Scalar> {
        self.as_scalar()
            .ok_or_else(|| RuntimeError::InvalidOperand { details: format!("{what} expects a number, got {}",
                                                                          self.type_name()),
                                                          line })
    }

    /// Folds the value down to the simplest variant with the same meaning.
    ///
    /// - A complex number with a zero imaginary part becomes a rational.
    /// - A constant polynomial becomes its constant, itself simplified.
    /// - Other values are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{core::Value, polynomial::Polynomial, scalar::Scalar};
    ///
    /// let constant = Value::Polynomial(Polynomial::from_constant(Scalar::from(3), "x"));
    /// assert_eq!(constant.simplify(), Value::from(3));
    /// ```
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Self::Complex(c) if c.is_real() => Self::Rational(c.real),
            Self::Polynomial(p) if p.is_constant() => Self::from(p.coefficient(0).simplify()),
            other => other,
        }
    }

    /// Returns `true` if the value is the additive identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(r) => r.is_zero(),
            Self::Complex(c) => c.is_zero(),
            Self::Matrix(m) => m.is_zero(),
            Self::Polynomial(p) => p.is_zero(),
            Self::Function(f) => f.is_zero(),
        }
    }

    /// Returns `true` if the value is the multiplicative identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Rational(r) => r.is_one(),
            Self::Complex(c) => c.is_one(),
            Self::Matrix(m) => m.is_identity(),
            Self::Polynomial(p) => p.is_one(),
            Self::Function(f) => f.body().is_one(),
        }
    }

    /// Returns `true` for rationals and complex numbers.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Rational(_) | Self::Complex(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Matrix(m) => write!(f, "{m}"),
            Self::Polynomial(p) => write!(f, "{p}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}
