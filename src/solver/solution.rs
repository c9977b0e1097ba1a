use std::fmt::Display;

use crate::interpreter::value::scalar::Scalar;

/// How many roots an equation has, and of which kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    /// A non-zero constant equals zero.
    NoSolution,
    /// `0 = 0`: every value is a solution.
    Infinite,
    /// The one root of a linear equation.
    Single,
    /// A quadratic with a zero discriminant. The root is stored once.
    Double,
    /// Two distinct real roots.
    TwoReal,
    /// Two distinct roots, at least one of them not real.
    TwoComplex,
}

/// The result of solving an equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub kind:         SolutionKind,
    /// Roots in the order `(-b + sqrt(Δ)) / 2a`, `(-b - sqrt(Δ)) / 2a`.
    pub roots:        Vec<Scalar>,
    /// Set for quadratics only.
    pub discriminant: Option<Scalar>,
    pub degree:       usize,
    pub variable:     String,
    /// `<standard form> = 0`
    pub reduced_form: String,
}

impl Solution {
    #[must_use]
    pub const fn has_solution(&self) -> bool {
        !matches!(self.kind, SolutionKind::NoSolution)
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self.kind, SolutionKind::Infinite)
    }

    #[must_use]
    pub const fn num_roots(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if any root has a non-zero imaginary part.
    #[must_use]
    pub fn has_complex_roots(&self) -> bool {
        self.roots.iter().any(|r| !r.is_real())
    }

    fn discriminant_sentence(&self) -> String {
        let sign = match &self.discriminant {
            Some(Scalar::Rational(d)) if d.is_positive() => "strictly positive",
            Some(Scalar::Rational(_)) => "strictly negative",
            _ => "not real",
        };
        match self.kind {
            SolutionKind::NoSolution => "The equation has no solution.".to_string(),
            SolutionKind::Infinite => "All real numbers are solutions.".to_string(),
            SolutionKind::Single => "The solution is:".to_string(),
            SolutionKind::Double => "Discriminant is zero, the solution is:".to_string(),
            SolutionKind::TwoReal => format!("Discriminant is {sign}, the two solutions are:"),
            SolutionKind::TwoComplex => {
                format!("Discriminant is {sign}, the two complex solutions are:")
            },
        }
    }
}

/// The solution report.
///
/// ```text
/// Reduced form: x^2 - 4 = 0
/// Polynomial degree: 2
/// Discriminant is strictly positive, the two solutions are:
/// x = 2
/// x = -2
/// ```
impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reduced form: {}", self.reduced_form)?;
        writeln!(f, "Polynomial degree: {}", self.degree)?;
        write!(f, "{}", self.discriminant_sentence())?;
        for root in &self.roots {
            write!(f, "\n{} = {root}", self.variable)?;
        }
        Ok(())
    }
}
