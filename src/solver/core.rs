use std::cmp::Ordering;

use crate::{
    error::{MathResult, SolveError},
    interpreter::value::{complex::Complex, rational::Rational, scalar::Scalar},
    simplifier::equation::SimplifiedEquation,
    solver::{
        solution::{Solution, SolutionKind},
        sqrt::{sqrt_complex, sqrt_non_negative},
    },
    util::settings::Settings,
};

/// Solves a simplified equation.
///
/// # Parameters
/// - `equation`: The equation in standard form.
/// - `settings`: Highest solvable degree and square root precision.
///
/// # Returns
/// A [`Solution`] whose kind follows the degree:
/// - degree 0: [`SolutionKind::Infinite`] for `0 = 0`, otherwise
///   [`SolutionKind::NoSolution`];
/// - degree 1: [`SolutionKind::Single`];
/// - degree 2: decided by the discriminant.
///
/// # Errors
/// - `SolveError::UnsolvableEquation` if the degree is above the maximum.
/// - `SolveError::Math` if a square root cannot be taken.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{polynomial::Polynomial, scalar::Scalar},
///     simplifier::equation::simplify_equation,
///     solver::{core::solve, solution::SolutionKind},
///     util::settings::Settings,
/// };
///
/// let settings = Settings::default();
/// let left = Polynomial::x("x").pow(2);
/// let right = Polynomial::from_constant(Scalar::from(4), "x");
/// let equation = simplify_equation(&left, &right, &settings).unwrap();
///
/// let solution = solve(&equation, &settings).unwrap();
/// assert_eq!(solution.kind, SolutionKind::TwoReal);
/// assert_eq!(solution.roots, vec![Scalar::from(2), Scalar::from(-2)]);
/// ```
pub fn solve(equation: &SimplifiedEquation, settings: &Settings) -> Result<Solution, SolveError> {
    equation.validate()?;
    if equation.degree > settings.max_solvable_degree {
        return Err(SolveError::UnsolvableEquation { degree: equation.degree });
    }

    let mut solution = Solution { kind:         SolutionKind::NoSolution,
                                  roots:        Vec::new(),
                                  discriminant: None,
                                  degree:       equation.degree,
                                  variable:     equation.variable.clone(),
                                  reduced_form: equation.reduced_form(), };

    match equation.degree {
        0 => {
            solution.kind = if equation.c().is_zero() {
                SolutionKind::Infinite
            } else {
                SolutionKind::NoSolution
            };
        },
        1 => {
            solution.kind = SolutionKind::Single;
            solution.roots = vec![solve_linear(&equation.b(), &equation.c())?];
        },
        2 => solve_quadratic(equation, settings, &mut solution)?,
        degree => return Err(SolveError::UnsolvableEquation { degree }),
    }

    log::debug!("solution: {:?} with roots {:?}", solution.kind, solution.roots);
    Ok(solution)
}

/// `b * x + c = 0` gives `x = -c / b`.
fn solve_linear(b: &Scalar, c: &Scalar) -> MathResult<Scalar> {
    Ok((-c).checked_div(b)?.simplify())
}

/// `a * x^2 + b * x + c = 0` through `Δ = b^2 - 4ac`.
///
/// A real discriminant is branched on its sign. A non-real one, which only
/// complex coefficients produce, is rooted with the complex square root.
/// Two distinct roots are reported as real only when both are; with complex
/// coefficients a positive discriminant can still give complex roots.
fn solve_quadratic(equation: &SimplifiedEquation,
                   settings: &Settings,
                   solution: &mut Solution)
                   -> MathResult<()> {
    let (a, b, c) = (equation.a(), equation.b(), equation.c());
    let discriminant = (&(&b * &b) - &(&(&Scalar::from(4) * &a) * &c)).simplify();
    let two_a = &Scalar::from(2) * &a;
    let minus_b = -&b;

    log::debug!("discriminant of {}: {discriminant}", equation.reduced_form());

    let root = match &discriminant {
        Scalar::Rational(d) => match d.signum().cmp(&0) {
            Ordering::Equal => {
                solution.kind = SolutionKind::Double;
                solution.roots = vec![minus_b.checked_div(&two_a)?.simplify()];
                solution.discriminant = Some(discriminant);
                return Ok(());
            },
            Ordering::Greater => Scalar::Rational(sqrt_non_negative(d, settings)?),
            // sqrt(Δ) = i * sqrt(-Δ)
            Ordering::Less => {
                let magnitude = sqrt_non_negative(&d.abs(), settings)?;
                Scalar::Complex(Complex::new(Rational::zero(), magnitude))
            },
        },
        Scalar::Complex(d) => Scalar::Complex(sqrt_complex(d, settings)?),
    };

    let first = (&minus_b + &root).checked_div(&two_a)?.simplify();
    let second = (&minus_b - &root).checked_div(&two_a)?.simplify();

    solution.kind = if first.is_real() && second.is_real() {
        SolutionKind::TwoReal
    } else {
        SolutionKind::TwoComplex
    };
    solution.roots = vec![first, second];
    solution.discriminant = Some(discriminant);
    Ok(())
}
