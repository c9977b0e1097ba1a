/// Function call dispatch.
///
/// Looks up built-ins by name, then user-defined functions, and applies them
/// to a number, a polynomial or another function.
pub mod core;

/// Scalar built-in functions.
///
/// `abs`, `sqrt`, `exp`, `log`/`ln`, `sin`, `cos` and `tan`.
pub mod builtin;

/// Matrix built-in functions.
///
/// `det`, `inv` and `transpose`.
pub mod matrix;
