use std::{fmt::Display, ops};

use crate::{
    error::MathResult,
    interpreter::value::{complex::Complex, rational::Rational},
};

/// A matrix entry or polynomial coefficient.
///
/// Arithmetic between two rationals stays rational; as soon as one side is
/// complex the result is complex, even if its imaginary part cancels. Use
/// [`Scalar::simplify`] to fold a real complex back to a rational.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// An exact fraction.
    Rational(Rational),
    /// A complex number with rational parts.
    Complex(Complex),
}

impl Scalar {
    #[must_use]
    pub fn zero() -> Self {
        Self::Rational(Rational::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self::Rational(Rational::one())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(r) => r.is_zero(),
            Self::Complex(c) => c.is_zero(),
        }
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Rational(r) => r.is_one(),
            Self::Complex(c) => c.is_one(),
        }
    }

    /// Returns `true` for rationals and for complex numbers on the real axis.
    #[must_use]
    pub fn is_real(&self) -> bool {
        match self {
            Self::Rational(_) => true,
            Self::Complex(c) => c.is_real(),
        }
    }

    /// The real part, whatever the variant.
    #[must_use]
    pub fn real_part(&self) -> Rational {
        match self {
            Self::Rational(r) => r.clone(),
            Self::Complex(c) => c.real.clone(),
        }
    }

    /// The imaginary part, zero for rationals.
    #[must_use]
    pub fn imaginary_part(&self) -> Rational {
        match self {
            Self::Rational(_) => Rational::zero(),
            Self::Complex(c) => c.imaginary.clone(),
        }
    }

    /// Returns the value as a rational if it is real.
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::Rational(r) => Some(r.clone()),
            Self::Complex(c) => c.to_rational(),
        }
    }

    /// Promotes to complex.
    #[must_use]
    pub fn to_complex(&self) -> Complex {
        match self {
            Self::Rational(r) => Complex::from_rational(r.clone()),
            Self::Complex(c) => c.clone(),
        }
    }

    /// Folds a real complex number back to a rational.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{complex::Complex, rational::Rational, scalar::Scalar};
    ///
    /// let s = Scalar::Complex(Complex::from_rational(Rational::from_integer(2)));
    /// assert_eq!(s.simplify(), Scalar::Rational(Rational::from_integer(2)));
    /// ```
    #[must_use]
    pub fn simplify(self) -> Self {
        match self {
            Self::Complex(c) if c.is_real() => Self::Rational(c.real),
            other => other,
        }
    }

    /// Squared magnitude, used to rank pivot candidates.
    #[must_use]
    pub fn magnitude_squared(&self) -> Rational {
        match self {
            Self::Rational(r) => r * r,
            Self::Complex(c) => c.modulus_squared(),
        }
    }

    /// Exact division, complex-aware.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> MathResult<Self> {
        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => a.checked_div(b).map(Self::Rational),
            _ => self.to_complex()
                     .checked_div(&rhs.to_complex())
                     .map(Self::Complex),
        }
    }

    /// Floored modulo; both sides must be real.
    ///
    /// # Errors
    /// - `MathError::DivisionByZero` if `rhs` is zero.
    /// - `MathError::InvalidOperation` if either side is not real.
    pub fn checked_rem(&self, rhs: &Self) -> MathResult<Self> {
        match (self, rhs) {
            (Self::Rational(a), Self::Rational(b)) => a.checked_rem(b).map(Self::Rational),
            _ => self.to_complex()
                     .checked_rem(&rhs.to_complex())
                     .map(Self::Complex),
        }
    }

    /// Raises to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        match self {
            Self::Rational(r) => Self::Rational(r.pow(exponent)),
            Self::Complex(c) => Self::Complex(c.pow(exponent)),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl From<Rational> for Scalar {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<Complex> for Scalar {
    fn from(value: Complex) -> Self {
        Self::Complex(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Rational(Rational::from_integer(value))
    }
}

impl ops::Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        match self {
            Scalar::Rational(r) => Scalar::Rational(-r),
            Scalar::Complex(c) => Scalar::Complex(-c),
        }
    }
}

impl ops::Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl ops::Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Scalar::Rational(a), Scalar::Rational(b)) => Scalar::Rational(a + b),
            _ => Scalar::Complex(&self.to_complex() + &rhs.to_complex()),
        }
    }
}

impl ops::Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Scalar::Rational(a), Scalar::Rational(b)) => Scalar::Rational(a - b),
            _ => Scalar::Complex(&self.to_complex() - &rhs.to_complex()),
        }
    }
}

impl ops::Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Scalar::Rational(a), Scalar::Rational(b)) => Scalar::Rational(a * b),
            _ => Scalar::Complex(&self.to_complex() * &rhs.to_complex()),
        }
    }
}
