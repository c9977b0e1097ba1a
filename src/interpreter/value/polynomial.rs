use std::{collections::BTreeMap, fmt::Display};

use crate::{
    error::{MathError, MathResult},
    interpreter::value::{complex::Complex, rational::Rational, scalar::Scalar},
};

/// Default indeterminate name.
pub const DEFAULT_VARIABLE: &str = "x";

/// A polynomial in one indeterminate.
///
/// Stored as a sparse map from degree to coefficient. Zero coefficients are
/// never stored, so the zero polynomial is the empty map. The variable name is
/// always lowercase.
///
/// Two polynomials with different variables can only be combined when one of
/// them is constant; the result takes the non-constant side's variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coefficients: BTreeMap<usize, Scalar>,
    variable:     String,
}

impl Polynomial {
    /// Builds a polynomial from `(degree, coefficient)` pairs.
    ///
    /// Zero coefficients are dropped; repeated degrees are summed.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{polynomial::Polynomial, scalar::Scalar};
    ///
    /// let p = Polynomial::new([(2, Scalar::from(1)), (0, Scalar::from(-4)), (1, Scalar::from(0))],
    ///                         "X");
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.variable(), "x");
    /// assert_eq!(p.to_string(), "x^2 - 4");
    /// ```
    pub fn new(terms: impl IntoIterator<Item = (usize, Scalar)>, variable: &str) -> Self {
        let mut coefficients: BTreeMap<usize, Scalar> = BTreeMap::new();
        for (degree, coefficient) in terms {
            let sum = match coefficients.get(&degree) {
                Some(existing) => existing + &coefficient,
                None => coefficient,
            };
            coefficients.insert(degree, sum);
        }
        coefficients.retain(|_, c| !c.is_zero());

        Self { coefficients,
               variable: variable.to_lowercase() }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero(variable: &str) -> Self {
        Self::new([], variable)
    }

    /// The constant polynomial `1`.
    #[must_use]
    pub fn one(variable: &str) -> Self {
        Self::from_constant(Scalar::one(), variable)
    }

    /// The indeterminate itself: `1 * variable^1`.
    ///
    /// This is what an unbound identifier evaluates to.
    #[must_use]
    pub fn x(variable: &str) -> Self {
        Self::new([(1, Scalar::one())], variable)
    }

    /// A degree-0 polynomial.
    #[must_use]
    pub fn from_constant(value: impl Into<Scalar>, variable: &str) -> Self {
        Self::new([(0, value.into())], variable)
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The highest stored degree, or 0 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.keys().next_back().copied().unwrap_or(0)
    }

    /// The coefficient of `variable^degree`, zero when absent.
    #[must_use]
    pub fn coefficient(&self, degree: usize) -> Scalar {
        self.coefficients.get(&degree).cloned().unwrap_or_else(Scalar::zero)
    }

    #[must_use]
    pub fn leading_coefficient(&self) -> Scalar {
        self.coefficient(self.degree())
    }

    /// Iterates over the stored terms in ascending degree.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (usize, &Scalar)> {
        self.coefficients.iter().map(|(d, c)| (*d, c))
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.coefficient(0).is_one()
    }

    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.degree() == 0
    }

    /// Returns the constant term of a degree-0 polynomial.
    #[must_use]
    pub fn to_constant(&self) -> Option<Scalar> {
        self.is_constant().then(|| self.coefficient(0).simplify())
    }

    /// Returns a copy tagged with another variable name.
    #[must_use]
    pub fn relabel(&self, variable: &str) -> Self {
        Self { coefficients: self.coefficients.clone(),
               variable:     variable.to_lowercase(), }
    }

    /// Applies `f` to every coefficient, keeping the variable.
    #[must_use]
    pub fn map_coefficients(&self, f: impl Fn(&Scalar) -> Scalar) -> Self {
        Self::new(self.terms().map(|(d, c)| (d, f(c))), &self.variable)
    }

    fn try_map_coefficients(&self,
                            f: impl Fn(&Scalar) -> MathResult<Scalar>)
                            -> MathResult<Self> {
        let terms = self.terms()
                        .map(|(d, c)| f(c).map(|v| (d, v)))
                        .collect::<MathResult<Vec<_>>>()?;
        Ok(Self::new(terms, &self.variable))
    }

    /// Picks the variable of a combination, or fails if both sides are
    /// non-constant polynomials in different variables.
    fn combined_variable(&self, other: &Self) -> MathResult<String> {
        if self.variable == other.variable || other.is_constant() {
            Ok(self.variable.clone())
        } else if self.is_constant() {
            Ok(other.variable.clone())
        } else {
            Err(MathError::VariableMismatch { left:  self.variable.clone(),
                                              right: other.variable.clone(), })
        }
    }

    /// Sum of two polynomials.
    ///
    /// # Errors
    /// Returns `MathError::VariableMismatch` if both sides are non-constant
    /// in different variables.
    pub fn add(&self, other: &Self) -> MathResult<Self> {
        let variable = self.combined_variable(other)?;
        Ok(Self::new(self.terms()
                         .chain(other.terms())
                         .map(|(d, c)| (d, c.clone())),
                     &variable))
    }

    /// Difference of two polynomials.
    ///
    /// # Errors
    /// Same as [`Polynomial::add`].
    pub fn sub(&self, other: &Self) -> MathResult<Self> {
        let variable = self.combined_variable(other)?;
        Ok(Self::new(self.terms()
                         .map(|(d, c)| (d, c.clone()))
                         .chain(other.terms().map(|(d, c)| (d, -c))),
                     &variable))
    }

    /// Product of two polynomials by convolution of their terms.
    ///
    /// # Errors
    /// Same as [`Polynomial::add`].
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{polynomial::Polynomial, scalar::Scalar};
    ///
    /// let x = Polynomial::x("x");
    /// let p = x.add(&Polynomial::from_constant(Scalar::from(1), "x")).unwrap();
    /// assert_eq!(p.mul(&p).unwrap().to_string(), "x^2 + 2 * x + 1");
    ///
    /// assert!(x.mul(&Polynomial::x("y")).is_err());
    /// ```
    pub fn mul(&self, other: &Self) -> MathResult<Self> {
        let variable = self.combined_variable(other)?;
        let terms = self.terms().flat_map(|(d1, c1)| {
                                    other.terms().map(move |(d2, c2)| (d1 + d2, c1 * c2))
                                });
        Ok(Self::new(terms, &variable))
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, factor: &Scalar) -> Self {
        self.map_coefficients(|c| c * factor)
    }

    fn constant_divisor(divisor: &Self) -> MathResult<Scalar> {
        if !divisor.is_constant() {
            return Err(MathError::InvalidOperation { details: "polynomial division is only supported by a constant".to_string(), });
        }
        let value = divisor.coefficient(0);
        if value.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(value)
    }

    /// Divides by a constant polynomial.
    ///
    /// # Errors
    /// - `MathError::InvalidOperation` if `divisor` is not constant.
    /// - `MathError::DivisionByZero` if it is zero.
    pub fn div(&self, divisor: &Self) -> MathResult<Self> {
        let value = Self::constant_divisor(divisor)?;
        self.try_map_coefficients(|c| c.checked_div(&value))
    }

    /// Takes every coefficient modulo a constant polynomial.
    ///
    /// # Errors
    /// Same as [`Polynomial::div`], plus `MathError::InvalidOperation` for
    /// complex operands.
    pub fn rem(&self, divisor: &Self) -> MathResult<Self> {
        let value = Self::constant_divisor(divisor)?;
        self.try_map_coefficients(|c| c.checked_rem(&value))
    }

    /// Raises to a non-negative integer power by repeated squaring.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one(&self.variable);
        let mut base = self.clone();
        let mut n = exponent;

        while n > 0 {
            if n % 2 == 1 {
                result = result.mul_same_variable(&base);
            }
            n /= 2;
            if n > 0 {
                base = base.mul_same_variable(&base);
            }
        }

        result
    }

    fn mul_same_variable(&self, other: &Self) -> Self {
        let terms = self.terms().flat_map(|(d1, c1)| {
                                    other.terms().map(move |(d2, c2)| (d1 + d2, c1 * c2))
                                });
        Self::new(terms, &self.variable)
    }

    /// Substitutes a scalar for the indeterminate.
    ///
    /// Powers are built by repeated multiplication. A complex result with a
    /// zero imaginary part collapses to a rational.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{polynomial::Polynomial, scalar::Scalar};
    ///
    /// let p = Polynomial::new([(2, Scalar::from(1)), (0, Scalar::from(1))], "x");
    /// assert_eq!(p.evaluate(&Scalar::from(2)), Scalar::from(5));
    /// ```
    #[must_use]
    pub fn evaluate(&self, at: &Scalar) -> Scalar {
        let mut result = Scalar::zero();
        for (degree, coefficient) in self.terms() {
            let mut power = Scalar::one();
            for _ in 0..degree {
                power = &power * at;
            }
            result = &result + &(coefficient * &power);
        }
        result.simplify()
    }

    /// Replaces the indeterminate with another polynomial: `self(other)`.
    ///
    /// Folds `coefficient * other^degree` over every term of `self`. The
    /// result takes `other`'s variable.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        self.terms()
            .fold(Self::zero(&other.variable), |acc, (degree, coefficient)| {
                let term = other.pow(u32::try_from(degree).unwrap_or(u32::MAX))
                                .scale(coefficient);
                Self::new(acc.terms()
                             .chain(term.terms())
                             .map(|(d, c)| (d, c.clone())),
                          &other.variable)
            })
    }

    /// The formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(self.terms()
                      .filter(|(d, _)| *d > 0)
                      .map(|(d, c)| {
                          let factor = Scalar::Rational(Rational::from_integer(d));
                          (d - 1, c * &factor)
                      }),
                  &self.variable)
    }

    /// Flips the sign of every coefficient when the leading coefficient is
    /// "negative": a negative real part, or a zero real part and a negative
    /// imaginary part.
    #[must_use]
    pub fn normalize_sign(&self) -> Self {
        let lead = self.leading_coefficient();
        let real = lead.real_part();
        let negative = real.is_negative() || (real.is_zero() && lead.imaginary_part().is_negative());
        if negative { -self } else { self.clone() }
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self.map_coefficients(|c| -c)
    }
}

/// Splits a coefficient into its sign and the text of its magnitude.
///
/// Coefficients with both a real and an imaginary part are parenthesized and
/// always count as positive.
fn signed_coefficient_text(coefficient: &Scalar) -> (bool, String) {
    match coefficient.clone().simplify() {
        Scalar::Rational(r) => (r.is_negative(), r.abs().to_string()),
        Scalar::Complex(c) if c.real.is_zero() => {
            let magnitude = Complex::new(Rational::zero(), c.imaginary.abs());
            (c.imaginary.is_negative(), magnitude.to_string())
        },
        Scalar::Complex(c) => (false, format!("({c})")),
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (degree, coefficient)) in self.terms().rev().enumerate() {
            let (negative, magnitude) = signed_coefficient_text(coefficient);
            let unit = magnitude == "1";

            let term = match (degree, unit) {
                (0, _) => magnitude,
                (1, true) => self.variable.clone(),
                (1, false) => format!("{magnitude} * {}", self.variable),
                (_, true) => format!("{}^{degree}", self.variable),
                (_, false) => format!("{magnitude} * {}^{degree}", self.variable),
            };

            match (i, negative) {
                (0, true) => write!(f, "-{term}")?,
                (0, false) => write!(f, "{term}")?,
                (_, true) => write!(f, " - {term}")?,
                (_, false) => write!(f, " + {term}")?,
            }
        }

        Ok(())
    }
}
