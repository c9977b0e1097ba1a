use std::{fmt::Display, ops};

use crate::{
    error::{MathError, MathResult},
    interpreter::value::rational::Rational,
};

/// Represents a complex number with exact rational parts.
///
/// A complex value whose imaginary part is zero stays complex until a caller
/// explicitly asks for [`Complex::to_rational`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Complex {
    /// The real part of the number.
    pub real:      Rational,
    /// The imaginary part of the number.
    pub imaginary: Rational,
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let minus_one = -Rational::one();
        match (self.real.is_zero(), &self.imaginary) {
            (true, im) if im.is_zero() => write!(f, "0"),
            (false, im) if im.is_zero() => write!(f, "{}", self.real),
            (true, im) if im.is_one() => write!(f, "i"),
            (true, im) if *im == minus_one => write!(f, "-i"),
            (true, im) => write!(f, "{im}i"),
            (false, im) if im.is_one() => write!(f, "{} + i", self.real),
            (false, im) if *im == minus_one => write!(f, "{} - i", self.real),
            (false, im) if im.is_negative() => write!(f, "{} - {}i", self.real, -im),
            (false, im) => write!(f, "{} + {im}i", self.real),
        }
    }
}

impl Complex {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{complex::Complex, rational::Rational};
    ///
    /// let c = Complex::new(Rational::from_integer(5), Rational::from_integer(-1));
    /// assert_eq!(c.to_string(), "5 - i");
    /// ```
    #[must_use]
    pub const fn new(real: Rational, imaginary: Rational) -> Self {
        Self { real, imaginary }
    }

    /// Lifts a rational onto the real axis.
    #[must_use]
    pub fn from_rational(real: Rational) -> Self {
        Self { real,
               imaginary: Rational::zero(), }
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self { real:      Rational::zero(),
               imaginary: Rational::one(), }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::from_rational(Rational::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Self::from_rational(Rational::one())
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.real.is_one() && self.imaginary.is_zero()
    }

    /// Returns `true` if the imaginary part is zero.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.imaginary.is_zero()
    }

    /// Returns the real part if the number lies on the real axis.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{complex::Complex, rational::Rational};
    ///
    /// let real = Complex::from_rational(Rational::from_integer(3));
    /// assert_eq!(real.to_rational(), Some(Rational::from_integer(3)));
    /// assert_eq!(Complex::i().to_rational(), None);
    /// ```
    #[must_use]
    pub fn to_rational(&self) -> Option<Rational> {
        self.is_real().then(|| self.real.clone())
    }

    /// Returns the complex conjugate of the number.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self { real:      self.real.clone(),
               imaginary: -&self.imaginary, }
    }

    /// Returns `a² + b²`, the squared magnitude.
    #[must_use]
    pub fn modulus_squared(&self) -> Rational {
        &(&self.real * &self.real) + &(&self.imaginary * &self.imaginary)
    }

    /// Returns the reciprocal `1/z`, computed as the conjugate over the
    /// squared magnitude.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` for zero.
    pub fn inverse(&self) -> MathResult<Self> {
        let norm = self.modulus_squared();
        if norm.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self { real:      self.real.checked_div(&norm)?,
                  imaginary: (-&self.imaginary).checked_div(&norm)?, })
    }

    /// Divides by multiplying with the conjugate of `rhs` over its squared
    /// magnitude.
    ///
    /// # Errors
    /// Returns `MathError::DivisionByZero` if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{complex::Complex, rational::Rational};
    ///
    /// let one_plus_i = Complex::new(Rational::one(), Rational::one());
    /// let q = Complex::one().checked_div(&one_plus_i).unwrap();
    /// assert_eq!(q, Complex::new(Rational::new(1, 2).unwrap(), Rational::new(-1, 2).unwrap()));
    /// ```
    pub fn checked_div(&self, rhs: &Self) -> MathResult<Self> {
        let norm = rhs.modulus_squared();
        if norm.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        let numerator = self * &rhs.conjugate();
        Ok(Self { real:      numerator.real.checked_div(&norm)?,
                  imaginary: numerator.imaginary.checked_div(&norm)?, })
    }

    /// Modulo, defined only when both operands are real.
    ///
    /// # Errors
    /// - `MathError::InvalidOperation` if either side has an imaginary part.
    /// - `MathError::DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> MathResult<Self> {
        match (self.to_rational(), rhs.to_rational()) {
            (Some(a), Some(b)) => Ok(Self::from_rational(a.checked_rem(&b)?)),
            _ => Err(MathError::InvalidOperation { details: "modulo is only defined for real numbers".to_string(), }),
        }
    }

    /// Raises the number to a non-negative integer power by binary
    /// exponentiation.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::complex::Complex;
    ///
    /// assert_eq!(Complex::i().pow(2), -Complex::one());
    /// assert_eq!(Complex::i().pow(4), Complex::one());
    /// assert_eq!(Complex::i().pow(0), Complex::one());
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();
        let mut n = exponent;

        while n > 0 {
            if n % 2 == 1 {
                result = &result * &base;
            }
            n /= 2;
            if n > 0 {
                base = &base * &base;
            }
        }

        result
    }
}

impl From<Rational> for Complex {
    fn from(value: Rational) -> Self {
        Self::from_rational(value)
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Complex { real:      -&self.real,
                  imaginary: -&self.imaginary, }
    }
}

impl ops::Add for &Complex {
    type Output = Complex;

    fn add(self, rhs: Self) -> Self::Output {
        Complex { real:      &self.real + &rhs.real,
                  imaginary: &self.imaginary + &rhs.imaginary, }
    }
}

impl ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl ops::Sub for &Complex {
    type Output = Complex;

    fn sub(self, rhs: Self) -> Self::Output {
        Complex { real:      &self.real - &rhs.real,
                  imaginary: &self.imaginary - &rhs.imaginary, }
    }
}

impl ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl ops::Mul for &Complex {
    type Output = Complex;

    fn mul(self, rhs: Self) -> Self::Output {
        Complex { real:      &(&self.real * &rhs.real) - &(&self.imaginary * &rhs.imaginary),
                  imaginary: &(&self.real * &rhs.imaginary) + &(&self.imaginary * &rhs.real), }
    }
}

impl ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
