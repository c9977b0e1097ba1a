/// Numeric conversion helpers.
///
/// This module provides the conversions used at the boundary between
/// floating-point and exact arithmetic: rounding a float to a fixed number of
/// decimal digits, deciding whether a fraction prints as a decimal, and
/// approximating exact fractions as `f64`.
///
/// Conversions that can fail return an `Option` or a `MathResult`, never a
/// wrapped-around value.
pub mod num;
/// Tunable limits and precision.
///
/// Collects the constants that bound the work the interpreter may do (matrix
/// dimensions, exponents, solvable degree) together with the precision used
/// whenever a float has to become a rational.
pub mod settings;
