use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::Complex, core::Value, rational::Rational, scalar::Scalar},
    },
    solver::sqrt::{sqrt_non_negative, sqrt_scalar},
    util::settings::Settings,
};

/// Brings a float result back into exact arithmetic.
fn exact(value: f64, settings: &Settings, line: usize) -> EvalResult<Rational> {
    Rational::from_f64(value, settings.precision, settings.epsilon)
        .map_err(|e| RuntimeError::from_math(e, line))
}

fn real(value: f64, settings: &Settings, line: usize) -> EvalResult<Value> {
    exact(value, settings, line).map(Value::Rational)
}

fn complex(real: f64, imaginary: f64, settings: &Settings, line: usize) -> EvalResult<Value> {
    let z = Complex::new(exact(real, settings, line)?, exact(imaginary, settings, line)?);
    Ok(Value::from(Scalar::Complex(z).simplify()))
}

fn parts(z: &Complex) -> (f64, f64) {
    (z.real.to_f64(), z.imaginary.to_f64())
}

/// `e^(a + bi) = e^a (cos b + i sin b)`
fn exp_complex(z: &Complex, settings: &Settings, line: usize) -> EvalResult<Value> {
    let (a, b) = parts(z);
    complex(a.exp() * b.cos(), a.exp() * b.sin(), settings, line)
}

/// `sin(a + bi) = sin a cosh b + i cos a sinh b`
fn sin_complex(z: &Complex, settings: &Settings, line: usize) -> EvalResult<Value> {
    let (a, b) = parts(z);
    complex(a.sin() * b.cosh(), a.cos() * b.sinh(), settings, line)
}

/// `cos(a + bi) = cos a cosh b - i sin a sinh b`
fn cos_complex(z: &Complex, settings: &Settings, line: usize) -> EvalResult<Value> {
    let (a, b) = parts(z);
    complex(a.cos() * b.cosh(), -(a.sin() * b.sinh()), settings, line)
}

fn unsupported(name: &str, z: &Complex, line: usize) -> EvalResult<Value> {
    Err(RuntimeError::InvalidOperand { details: format!("{name}() is not defined for the complex number {z}"),
                                       line })
}

fn tan_complex(z: &Complex, _: &Settings, line: usize) -> EvalResult<Value> {
    unsupported("tan", z, line)
}

fn ln_complex(z: &Complex, _: &Settings, line: usize) -> EvalResult<Value> {
    unsupported("log", z, line)
}

/// Natural logarithm of a positive rational.
fn ln_real(x: &Rational, settings: &Settings, line: usize) -> EvalResult<Value> {
    if !x.is_positive() {
        return Err(RuntimeError::InvalidOperand { details: format!("log() is only defined for positive numbers, got {x}"),
                                                  line });
    }
    real(x.to_f64().ln(), settings, line)
}

/// Applies a unary builtin function to a numeric value.
///
/// The generated functions accept one number.
/// - Rationals are converted to floats, the real function is applied and the
///   result is converted back with the session's precision.
/// - Complex values use the complex variant. A complex value with a zero
///   imaginary part is treated as real.
///
/// Non-numeric arguments produce an `InvalidOperand` error.
///
/// # Parameters
/// - `arg`: The argument.
/// - `settings`: Session settings, for the float boundary.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::{evaluator::function::builtin::sin, value::core::Value},
///     util::settings::Settings,
/// };
///
/// let r = sin(&Value::from(0), &Settings::default(), 1).unwrap();
/// assert_eq!(r, Value::from(0));
/// ```
macro_rules! real_complex_builtin {
    ($fname:ident, $real_fn:expr, $complex_fn:ident) => {
        pub fn $fname(arg: &Value, settings: &Settings, line: usize) -> EvalResult<Value> {
            match arg.expect_scalar(concat!(stringify!($fname), "()"), line)?.simplify() {
                Scalar::Rational(r) => $real_fn(&r, settings, line),
                Scalar::Complex(c) => $complex_fn(&c, settings, line),
            }
        }
    };
}

real_complex_builtin!(exp, |x: &Rational, s, l| real(x.to_f64().exp(), s, l), exp_complex);
real_complex_builtin!(sin, |x: &Rational, s, l| real(x.to_f64().sin(), s, l), sin_complex);
real_complex_builtin!(cos, |x: &Rational, s, l| real(x.to_f64().cos(), s, l), cos_complex);
real_complex_builtin!(tan, |x: &Rational, s, l| real(x.to_f64().tan(), s, l), tan_complex);
real_complex_builtin!(ln, ln_real, ln_complex);

/// Absolute value, or modulus for complex numbers.
///
/// Exact for rationals, and for complex numbers whose squared modulus is a
/// perfect square.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::{
///         evaluator::function::builtin::abs,
///         value::{complex::Complex, core::Value, rational::Rational},
///     },
///     util::settings::Settings,
/// };
///
/// let z = Value::Complex(Complex::new(Rational::from_integer(3), Rational::from_integer(-4)));
/// assert_eq!(abs(&z, &Settings::default(), 1).unwrap(), Value::from(5));
/// ```
pub fn abs(arg: &Value, settings: &Settings, line: usize) -> EvalResult<Value> {
    match arg.expect_scalar("abs()", line)? {
        Scalar::Rational(r) => Ok(Value::Rational(r.abs())),
        Scalar::Complex(c) => sqrt_non_negative(&c.modulus_squared(), settings)
            .map(Value::Rational)
            .map_err(|e| RuntimeError::from_math(e, line)),
    }
}

/// Square root. Negative numbers have an imaginary root.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::{
///         evaluator::function::builtin::sqrt,
///         value::{complex::Complex, core::Value, rational::Rational},
///     },
///     util::settings::Settings,
/// };
///
/// let settings = Settings::default();
/// assert_eq!(sqrt(&Value::from(9), &settings, 1).unwrap(), Value::from(3));
///
/// let root = sqrt(&Value::from(-4), &settings, 1).unwrap();
/// assert_eq!(root, Value::Complex(Complex::new(Rational::zero(), Rational::from_integer(2))));
/// ```
pub fn sqrt(arg: &Value, settings: &Settings, line: usize) -> EvalResult<Value> {
    let x = arg.expect_scalar("sqrt()", line)?;
    sqrt_scalar(&x, settings).map(Value::from)
                             .map_err(|e| RuntimeError::from_math(e, line))
}
