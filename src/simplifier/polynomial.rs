use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    error::MathResult,
    interpreter::value::{polynomial::Polynomial, rational::Rational, scalar::Scalar},
};

/// Brings `left = right` to the standard form `left - right = 0`.
///
/// The result is sign-normalized: its leading coefficient has a positive real
/// part, or a zero real part and a positive imaginary part. Zero
/// coefficients are never stored.
///
/// # Errors
/// Returns `MathError::VariableMismatch` if both sides are non-constant
/// polynomials over different variables.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{polynomial::Polynomial, scalar::Scalar},
///     simplifier::polynomial::standard_form,
/// };
///
/// // 4 = x^2  becomes  x^2 - 4 = 0
/// let left = Polynomial::from_constant(Scalar::from(4), "x");
/// let right = Polynomial::x("x").pow(2);
/// assert_eq!(standard_form(&left, &right).unwrap().to_string(), "x^2 - 4");
/// ```
pub fn standard_form(left: &Polynomial, right: &Polynomial) -> MathResult<Polynomial> {
    Ok(left.sub(right)?.normalize_sign())
}

/// Divides every coefficient by the greatest common divisor of the
/// coefficient numerators, so `2x^2 + 4x + 2` becomes `x^2 + 2x + 1`.
///
/// Polynomials with a complex coefficient are returned unchanged.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{polynomial::Polynomial, scalar::Scalar},
///     simplifier::polynomial::reduce_polynomial,
/// };
///
/// let p = Polynomial::new([(2, Scalar::from(2)), (1, Scalar::from(4)), (0, Scalar::from(2))], "x");
/// assert_eq!(reduce_polynomial(&p).to_string(), "x^2 + 2 * x + 1");
/// ```
#[must_use]
pub fn reduce_polynomial(polynomial: &Polynomial) -> Polynomial {
    let numerators = polynomial.terms()
                               .map(|(_, c)| match c {
                                   Scalar::Rational(r) => Some(r.numerator().clone()),
                                   Scalar::Complex(_) => None,
                               })
                               .collect::<Option<Vec<BigInt>>>();

    let Some(numerators) = numerators else {
        return polynomial.clone();
    };

    let divisor = numerators.iter()
                            .fold(BigInt::zero(), |acc, n| Rational::gcd(&acc, n));
    if divisor.is_zero() {
        return polynomial.clone();
    }

    match Rational::from_integer(divisor).recip() {
        Ok(factor) => polynomial.scale(&Scalar::Rational(factor)),
        Err(_) => polynomial.clone(),
    }
}

/// Divides by the leading coefficient.
///
/// Returns the monic polynomial and the coefficient it was divided by. The
/// zero polynomial is returned as is, with a factor of one.
///
/// # Errors
/// Never fails in practice: the leading coefficient of a non-zero polynomial
/// is non-zero. The division is still checked.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{polynomial::Polynomial, scalar::Scalar},
///     simplifier::polynomial::make_monic,
/// };
///
/// let p = Polynomial::new([(1, Scalar::from(2)), (0, Scalar::from(3))], "x");
/// let (monic, leading) = make_monic(&p).unwrap();
/// assert_eq!(monic.to_string(), "x + 1.5");
/// assert_eq!(leading, Scalar::from(2));
/// ```
pub fn make_monic(polynomial: &Polynomial) -> MathResult<(Polynomial, Scalar)> {
    if polynomial.is_zero() {
        return Ok((polynomial.clone(), Scalar::one()));
    }

    let leading = polynomial.leading_coefficient();
    if leading.is_one() {
        return Ok((polynomial.clone(), leading));
    }

    let divisor = Polynomial::from_constant(leading.clone(), polynomial.variable());
    Ok((polynomial.div(&divisor)?, leading))
}

/// Lists the coefficients from degree 0 up to the degree, filling gaps with
/// zeros. The zero polynomial yields `[0]`.
#[must_use]
pub fn extract_coefficients(polynomial: &Polynomial) -> Vec<Scalar> {
    (0..=polynomial.degree()).map(|d| polynomial.coefficient(d))
                             .collect()
}
