/// Root finding for equations of degree 0, 1 and 2.
///
/// # Responsibilities
/// - Classifies constant equations as having no or infinitely many solutions.
/// - Solves linear equations exactly.
/// - Solves quadratics through the discriminant, real or complex.
pub mod core;
/// Solution values and their report text.
pub mod solution;
/// Square roots of rationals and complex numbers.
///
/// Perfect squares are rooted exactly; everything else goes through a
/// Newton–Raphson iteration in floating point and is converted back with the
/// session's precision.
pub mod sqrt;
