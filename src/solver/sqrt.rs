use num_traits::Signed;

use crate::{
    error::{MathError, MathResult},
    interpreter::value::{complex::Complex, rational::Rational, scalar::Scalar},
    util::settings::Settings,
};

/// Newton–Raphson square root of a positive float.
///
/// The first guess is the power of two nearest to the root, read off the
/// binary exponent of `x`, so the iteration starts within a factor of `√2`
/// whatever the magnitude. It then iterates `g = (g + x / g) / 2` until two
/// guesses differ by at most `settings.epsilon` relative to the guess, or
/// `settings.newton_iterations` is reached.
///
/// # Example
/// ```
/// use computor::{solver::sqrt::newton_sqrt, util::settings::Settings};
///
/// let root = newton_sqrt(2.0, &Settings::default());
/// assert!((root * root - 2.0).abs() < 1e-9);
///
/// let big = newton_sqrt(2e80, &Settings::default());
/// assert!((big * big / 2e80 - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn newton_sqrt(x: f64, settings: &Settings) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return x;
    }
    if x <= 0.0 {
        return 0.0;
    }

    let mut guess = (x.log2() / 2.0).round().exp2();
    for iteration in 0..settings.newton_iterations {
        let next = (guess + x / guess) / 2.0;
        if (next - guess).abs() <= settings.epsilon * next {
            log::trace!("sqrt({x}) converged after {iteration} iterations");
            return next;
        }
        guess = next;
    }

    log::trace!("sqrt({x}) stopped after {} iterations", settings.newton_iterations);
    guess
}

/// Exact square root of a rational whose numerator and denominator are both
/// perfect squares.
fn exact_sqrt(value: &Rational) -> Option<Rational> {
    let (n, d) = (value.numerator(), value.denominator());
    if n.is_negative() {
        return None;
    }
    let (rn, rd) = (n.sqrt(), d.sqrt());
    if &(&rn * &rn) != n || &(&rd * &rd) != d {
        return None;
    }
    Rational::new(rn, rd).ok()
}

/// Square root of a non-negative rational.
///
/// # Errors
/// - `MathError::InvalidOperation` for a negative value.
/// - `MathError::NotFinite` if the value is too large for a float.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::rational::Rational, solver::sqrt::sqrt_non_negative,
///     util::settings::Settings,
/// };
///
/// let settings = Settings::default();
/// let quarter = Rational::new(1, 4).unwrap();
/// assert_eq!(sqrt_non_negative(&quarter, &settings).unwrap(), Rational::new(1, 2).unwrap());
///
/// let two = sqrt_non_negative(&Rational::from_integer(2), &settings).unwrap();
/// assert_eq!(two.to_string(), "1.4142135624");
/// ```
pub fn sqrt_non_negative(value: &Rational, settings: &Settings) -> MathResult<Rational> {
    if value.is_negative() {
        return Err(MathError::InvalidOperation { details: format!("square root of the negative number {value}"), });
    }
    if let Some(root) = exact_sqrt(value) {
        return Ok(root);
    }

    let root = newton_sqrt(value.to_f64(), settings);
    let approx = Rational::from_f64(root, settings.precision, settings.epsilon)?;
    log::warn!("sqrt({value}) is irrational, rounded to {approx}");
    Ok(approx)
}

/// Square root of a rational. Negative values give a pure imaginary root.
///
/// # Errors
/// See [`sqrt_non_negative`].
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{complex::Complex, rational::Rational, scalar::Scalar},
///     solver::sqrt::sqrt_rational,
///     util::settings::Settings,
/// };
///
/// let root = sqrt_rational(&Rational::from_integer(-9), &Settings::default()).unwrap();
/// assert_eq!(root, Scalar::Complex(Complex::new(Rational::zero(), Rational::from_integer(3))));
/// ```
pub fn sqrt_rational(value: &Rational, settings: &Settings) -> MathResult<Scalar> {
    if value.is_negative() {
        let root = sqrt_non_negative(&value.abs(), settings)?;
        return Ok(Scalar::Complex(Complex::new(Rational::zero(), root)));
    }
    sqrt_non_negative(value, settings).map(Scalar::Rational)
}

/// Principal square root of a complex number.
///
/// For `z = a + bi`:
/// `sqrt(z) = sqrt((|z| + a) / 2) + sign(b) * sqrt((|z| - a) / 2) i`.
///
/// # Errors
/// See [`sqrt_non_negative`].
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{complex::Complex, rational::Rational},
///     solver::sqrt::sqrt_complex,
///     util::settings::Settings,
/// };
///
/// // sqrt(2i) = 1 + i
/// let z = Complex::new(Rational::zero(), Rational::from_integer(2));
/// let root = sqrt_complex(&z, &Settings::default()).unwrap();
/// assert_eq!(root, Complex::new(Rational::one(), Rational::one()));
/// ```
pub fn sqrt_complex(value: &Complex, settings: &Settings) -> MathResult<Complex> {
    if value.imaginary.is_zero() {
        return sqrt_rational(&value.real, settings).map(|root| root.to_complex());
    }

    let two = Rational::from_integer(2);
    let modulus = sqrt_non_negative(&value.modulus_squared(), settings)?;
    // |z| >= |a|, but rounding in the modulus can push these just below zero
    let real = sqrt_non_negative(&clamp_non_negative((&modulus + &value.real).checked_div(&two)?),
                                 settings)?;
    let imaginary = sqrt_non_negative(&clamp_non_negative((&modulus - &value.real).checked_div(&two)?),
                                      settings)?;

    let imaginary = if value.imaginary.is_negative() { -imaginary } else { imaginary };
    Ok(Complex::new(real, imaginary))
}

fn clamp_non_negative(value: Rational) -> Rational {
    if value.is_negative() { Rational::zero() } else { value }
}

/// Square root of any scalar, simplified: a complex root with a zero
/// imaginary part comes back as a rational.
///
/// # Errors
/// See [`sqrt_non_negative`].
pub fn sqrt_scalar(value: &Scalar, settings: &Settings) -> MathResult<Scalar> {
    let root = match value {
        Scalar::Rational(r) => sqrt_rational(r, settings)?,
        Scalar::Complex(c) => Scalar::Complex(sqrt_complex(c, settings)?),
    };
    Ok(root.simplify())
}
