/// Exact fractions.
///
/// Defines `Rational`, an arbitrary-precision fraction kept in lowest terms
/// with a positive denominator. Every other numeric type is built from it.
pub mod rational;
/// Complex number support.
///
/// Defines the `Complex` type whose real and imaginary parts are both
/// `Rational`. Arithmetic is exact; a complex value is never collapsed to a
/// rational implicitly.
pub mod complex;
/// Scalars: the union of rationals and complex numbers.
///
/// Matrix entries and polynomial coefficients are scalars. Mixed arithmetic
/// promotes to complex only when one side already is complex.
pub mod scalar;
/// Dense matrices of scalars.
///
/// Provides element-wise and true matrix products, determinants by cofactor
/// expansion, inverses by Gauss–Jordan elimination and integer powers.
pub mod matrix;
/// Single-variable polynomials.
///
/// Polynomials are sparse maps from degree to non-zero coefficient, tagged
/// with the name of their indeterminate. They are what unbound identifiers
/// evaluate to.
pub mod polynomial;
/// Named single-parameter functions.
///
/// A `Function` wraps a polynomial body whose indeterminate is the
/// function's parameter. Calling it with a number evaluates the body; calling
/// it with a polynomial composes.
pub mod function;

pub mod core;
