/// Equation preparation.
///
/// Turns the two sides of an equation into a [`SimplifiedEquation`]: the
/// standard form `p = 0`, its degree, its variable and its coefficients,
/// flagged invalid when the degree is above what the solver handles.
///
/// [`SimplifiedEquation`]: equation::SimplifiedEquation
pub mod equation;
/// Polynomial helpers used to reach and present the standard form.
///
/// # Responsibilities
/// - Moves every term to the left side and normalizes the sign.
/// - Extracts common integer factors and leading coefficients.
/// - Lists coefficients densely by degree.
pub mod polynomial;
