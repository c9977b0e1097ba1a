use std::{cmp::Ordering, fmt::Display, ops};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    error::{MathError, MathResult},
    util::{
        num::{f64_to_ratio, ratio_to_decimal_string, ratio_to_f64},
        settings::DECIMAL_PRECISION,
    },
};

/// An exact fraction of arbitrary-precision integers.
///
/// The value is always stored in lowest terms with a strictly positive
/// denominator, so structural equality is numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Builds `numerator / denominator`, reduced.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` if `denominator` is zero.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::rational::Rational;
    ///
    /// let r = Rational::new(6, -4).unwrap();
    /// assert_eq!(r.numerator().to_string(), "-3");
    /// assert_eq!(r.denominator().to_string(), "2");
    ///
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> MathResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }

        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// Builds a whole number.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Converts a float through the fixed-precision decimal boundary.
    ///
    /// The float is rounded to `precision` decimal digits first, so `0.1`
    /// becomes exactly `1/10` and `1/3` as a float becomes
    /// `3333333333/10000000000`. Magnitudes below `epsilon` become zero.
    ///
    /// # Errors
    /// Returns `MathError::NotFinite` for NaN and infinities.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::rational::Rational;
    ///
    /// let r = Rational::from_f64(2.5, 10, 1e-10).unwrap();
    /// assert_eq!(r, Rational::new(5, 2).unwrap());
    /// ```
    pub fn from_f64(value: f64, precision: u32, epsilon: f64) -> MathResult<Self> {
        f64_to_ratio(value, precision, epsilon).map(Self)
    }

    /// Returns `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// Returns `1`.
    #[must_use]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// The reduced numerator, carrying the sign.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// The reduced denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Returns `true` if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Returns -1, 0 or 1 following the sign of the value.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.0.cmp(&BigRational::zero()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the value as an integer if it has no fractional part.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.0.to_integer())
    }

    /// Returns the value as a `u32` if it is a non-negative integer that
    /// fits.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        self.to_integer().and_then(|n| n.to_u32())
    }

    /// Approximates the value as a float.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        ratio_to_f64(&self.0)
    }

    /// Returns the largest integer not greater than the value.
    #[must_use]
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` for zero.
    pub fn recip(&self) -> MathResult<Self> {
        if self.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Exact division.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::rational::Rational;
    ///
    /// let a = Rational::from_integer(3);
    /// let b = Rational::from_integer(4);
    /// assert_eq!(a.checked_div(&b).unwrap(), Rational::new(3, 4).unwrap());
    /// assert!(a.checked_div(&Rational::zero()).is_err());
    /// ```
    pub fn checked_div(&self, rhs: &Self) -> MathResult<Self> {
        if rhs.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Floored modulo: `a - b * floor(a / b)`.
    ///
    /// The result has the sign of the divisor, so `-7 % 3` is `2`.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::rational::Rational;
    ///
    /// let r = Rational::from_integer(-7).checked_rem(&Rational::from_integer(3))
    ///                                   .unwrap();
    /// assert_eq!(r, Rational::from_integer(2));
    /// ```
    pub fn checked_rem(&self, rhs: &Self) -> MathResult<Self> {
        let quotient = self.checked_div(rhs)?.floor();
        Ok(self - &(rhs * &quotient))
    }

    /// Raises the value to a non-negative integer power.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::rational::Rational;
    ///
    /// let r = Rational::new(2, 3).unwrap().pow(3);
    /// assert_eq!(r, Rational::new(8, 27).unwrap());
    /// assert!(Rational::zero().pow(0).is_one());
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        Self(num_traits::pow(self.0.clone(), exponent as usize))
    }

    /// The greatest common divisor of two integers, as used when reducing
    /// integer-coefficient polynomials.
    #[must_use]
    pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        a.gcd(b)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ratio_to_decimal_string(&self.0, DECIMAL_PRECISION))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl ops::Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl ops::Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl ops::Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl ops::Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl ops::Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl ops::Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}
