use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero, pow};

use crate::error::{MathError, MathResult};

/// Returns `10^digits` as a big integer.
///
/// # Example
/// ```
/// use computor::util::num::pow10;
/// use num_bigint::BigInt;
///
/// assert_eq!(pow10(3), BigInt::from(1000));
/// ```
#[must_use]
pub fn pow10(digits: u32) -> BigInt {
    pow(BigInt::from(10), digits as usize)
}

/// Rounds a float to `precision` decimal digits and returns it as an exact
/// fraction.
///
/// The value is scaled by `10^precision`, rounded half away from zero and
/// divided back down, so the result is a snapshot of the float at that
/// precision rather than its exact binary value. Values whose magnitude is
/// below `epsilon` become zero.
///
/// ## Errors
/// Returns `MathError::NotFinite` for NaN and infinities.
///
/// ## Example
/// ```
/// use computor::util::num::f64_to_ratio;
/// use num_rational::BigRational;
///
/// let r = f64_to_ratio(0.1, 10, 1e-10).unwrap();
/// assert_eq!(r, BigRational::new(1.into(), 10.into()));
///
/// let tiny = f64_to_ratio(1e-12, 10, 1e-10).unwrap();
/// assert_eq!(tiny, BigRational::from_integer(0.into()));
/// ```
pub fn f64_to_ratio(value: f64, precision: u32, epsilon: f64) -> MathResult<BigRational> {
    if !value.is_finite() {
        return Err(MathError::NotFinite);
    }
    if value.abs() < epsilon {
        return Ok(BigRational::zero());
    }

    let scale = pow10(precision);
    let scaled = BigRational::from_float(value.abs()).ok_or(MathError::NotFinite)?
                 * BigRational::from_integer(scale.clone());
    let mut rounded = scaled.round().to_integer();
    if value.is_sign_negative() {
        rounded = -rounded;
    }

    Ok(BigRational::new(rounded, scale))
}

/// Approximates an exact fraction as a float.
///
/// Very large or very small fractions saturate to infinity or zero rather
/// than failing.
///
/// ## Example
/// ```
/// use computor::util::num::ratio_to_f64;
/// use num_rational::BigRational;
///
/// let half = BigRational::new(1.into(), 2.into());
/// assert_eq!(ratio_to_f64(&half), 0.5);
/// ```
#[must_use]
pub fn ratio_to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or_else(|| {
                       if value.is_negative() {
                           f64::NEG_INFINITY
                       } else {
                           f64::INFINITY
                       }
                   })
}

/// Returns `true` if the fraction's denominator divides `10^digits`, which
/// means it prints as a terminating decimal with at most `digits` places.
///
/// ## Example
/// ```
/// use computor::util::num::is_short_decimal;
/// use num_rational::BigRational;
///
/// assert!(is_short_decimal(&BigRational::new(5.into(), 4.into()), 10));
/// assert!(!is_short_decimal(&BigRational::new(1.into(), 3.into()), 10));
/// ```
#[must_use]
pub fn is_short_decimal(value: &BigRational, digits: u32) -> bool {
    (pow10(digits) % value.denom()).is_zero()
}

/// Writes a fraction whose denominator divides a power of ten as a decimal
/// string with trailing zeros removed.
///
/// Callers check [`is_short_decimal`] first; other fractions are written in
/// `n/d` form.
///
/// ## Example
/// ```
/// use computor::util::num::ratio_to_decimal_string;
/// use num_rational::BigRational;
///
/// let v = BigRational::new((-5).into(), 4.into());
/// assert_eq!(ratio_to_decimal_string(&v, 10), "-1.25");
/// ```
#[must_use]
pub fn ratio_to_decimal_string(value: &BigRational, digits: u32) -> String {
    if value.denom().is_one() {
        return value.numer().to_string();
    }
    if !is_short_decimal(value, digits) {
        return format!("{}/{}", value.numer(), value.denom());
    }

    let scale = pow10(digits);
    let scaled = (value.abs() * BigRational::from_integer(scale)).to_integer();
    let text = format!("{:0>width$}", scaled.to_string(), width = digits as usize + 1);
    let (int_part, frac_part) = text.split_at(text.len() - digits as usize);
    let frac_part = frac_part.trim_end_matches('0');
    let sign = if value.is_negative() { "-" } else { "" };

    format!("{sign}{int_part}.{frac_part}")
}
