use crate::{
    error::{MathResult, SolveError},
    interpreter::value::{polynomial::Polynomial, scalar::Scalar},
    simplifier::polynomial::{extract_coefficients, standard_form},
    util::settings::Settings,
};

/// An equation in standard form `polynomial = 0`, ready for the solver.
///
/// Equations above the solvable degree are still built, with `is_valid`
/// cleared and a diagnostic in `message`; the solver refuses them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedEquation {
    /// The left side of the standard form.
    pub polynomial:   Polynomial,
    pub degree:       usize,
    pub variable:     String,
    /// Coefficients indexed by degree, zeros included.
    pub coefficients: Vec<Scalar>,
    pub is_valid:     bool,
    pub message:      Option<String>,
}

impl SimplifiedEquation {
    fn coefficient(&self, degree: usize) -> Scalar {
        self.coefficients
            .get(degree)
            .cloned()
            .unwrap_or_else(Scalar::zero)
    }

    /// Coefficient of the square term.
    #[must_use]
    pub fn a(&self) -> Scalar {
        self.coefficient(2)
    }

    /// Coefficient of the linear term.
    #[must_use]
    pub fn b(&self) -> Scalar {
        self.coefficient(1)
    }

    /// The constant term.
    #[must_use]
    pub fn c(&self) -> Scalar {
        self.coefficient(0)
    }

    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.degree == 0
    }

    #[must_use]
    pub const fn is_linear(&self) -> bool {
        self.degree == 1
    }

    #[must_use]
    pub const fn is_quadratic(&self) -> bool {
        self.degree == 2
    }

    #[must_use]
    pub fn has_complex_coefficients(&self) -> bool {
        self.coefficients.iter().any(|c| !c.is_real())
    }

    /// The reduced form as printed in solution reports: `x^2 - 4 = 0`.
    #[must_use]
    pub fn reduced_form(&self) -> String {
        format!("{} = 0", self.polynomial)
    }

    /// Checks that the equation can be handed to the solver.
    ///
    /// # Errors
    /// Returns `SolveError::UnsolvableEquation` carrying the degree of an
    /// invalid equation.
    pub const fn validate(&self) -> Result<(), SolveError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(SolveError::UnsolvableEquation { degree: self.degree })
        }
    }
}

/// Simplifies `left = right` for solving.
///
/// # Parameters
/// - `left`, `right`: The two sides, as polynomials.
/// - `settings`: Provides the highest solvable degree.
///
/// # Returns
/// The [`SimplifiedEquation`]. Its variable is the variable of the standard
/// form, which for a constant equation is the variable of the left side.
///
/// # Errors
/// Returns `MathError::VariableMismatch` if the sides are polynomials over
/// different variables.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{polynomial::Polynomial, scalar::Scalar},
///     simplifier::equation::simplify_equation,
///     util::settings::Settings,
/// };
///
/// let cubic = Polynomial::x("y").pow(3);
/// let zero = Polynomial::zero("y");
/// let eq = simplify_equation(&cubic, &zero, &Settings::default()).unwrap();
/// assert_eq!(eq.degree, 3);
/// assert!(!eq.is_valid);
/// assert_eq!(eq.reduced_form(), "y^3 = 0");
/// ```
pub fn simplify_equation(left: &Polynomial,
                         right: &Polynomial,
                         settings: &Settings)
                         -> MathResult<SimplifiedEquation> {
    let polynomial = standard_form(left, right)?;
    let degree = polynomial.degree();
    let valid = degree <= settings.max_solvable_degree;

    log::debug!("standard form: {polynomial} = 0 (degree {degree})");

    Ok(SimplifiedEquation { variable: polynomial.variable().to_string(),
                            coefficients: extract_coefficients(&polynomial),
                            polynomial,
                            degree,
                            is_valid: valid,
                            message: (!valid).then(|| {
                                                 format!("Polynomial degree {degree} is too high. Only degrees up to {} are supported.",
                                                         settings.max_solvable_degree)
                                             }) })
}

/// Describes an equation in a few lines of text: its form, variable, degree
/// and kind, plus the discriminant of a real quadratic.
///
/// # Example
/// ```
/// use computor::{
///     interpreter::value::{polynomial::Polynomial, scalar::Scalar},
///     simplifier::equation::{analyze_equation, simplify_equation},
///     util::settings::Settings,
/// };
///
/// let square = Polynomial::x("x").pow(2);
/// let four = Polynomial::from_constant(Scalar::from(4), "x");
/// let eq = simplify_equation(&square, &four, &Settings::default()).unwrap();
///
/// let text = analyze_equation(&eq);
/// assert!(text.contains("Type: Quadratic equation"));
/// assert!(text.contains("Discriminant: 16"));
/// ```
#[must_use]
pub fn analyze_equation(equation: &SimplifiedEquation) -> String {
    let x = &equation.variable;
    let mut lines = vec![format!("Equation: {}", equation.reduced_form()),
                         format!("Variable: {x}"),
                         format!("Degree: {}", equation.degree)];

    match equation.degree {
        0 => {
            lines.push("Type: Constant equation".to_string());
            lines.push(if equation.c().is_zero() {
                           "Solution: All values are solutions (0 = 0)".to_string()
                       } else {
                           format!("Solution: No solution ({} ≠ 0)", equation.c())
                       });
        },
        1 => {
            lines.push("Type: Linear equation".to_string());
            lines.push(format!("Form: {} * {x} + {} = 0", equation.b(), equation.c()));
        },
        2 => {
            let (a, b, c) = (equation.a(), equation.b(), equation.c());
            lines.push("Type: Quadratic equation".to_string());
            lines.push(format!("Form: {a} * {x}^2 + {b} * {x} + {c} = 0"));
            if !equation.has_complex_coefficients() {
                let four_ac = &(&Scalar::from(4) * &a) * &c;
                lines.push(format!("Discriminant: {}", &(&b * &b) - &four_ac));
            }
        },
        n => {
            lines.push(format!("Type: Polynomial of degree {n}"));
            if let Some(message) = &equation.message {
                lines.push(format!("Note: {message}"));
            }
        },
    }

    lines.join("\n")
}
