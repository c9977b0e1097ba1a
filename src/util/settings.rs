/// Decimal digits kept when a float is converted to a rational.
pub const DECIMAL_PRECISION: u32 = 10;
/// Magnitude under which a float is treated as zero, and the default
/// Newton–Raphson tolerance.
pub const EPSILON: f64 = 1e-10;
/// Iteration cap for the Newton–Raphson square root.
pub const NEWTON_ITERATIONS: usize = 100;
/// Largest number of matrix rows.
pub const MAX_MATRIX_ROWS: usize = 100;
/// Largest number of matrix columns.
pub const MAX_MATRIX_COLS: usize = 100;
/// Largest exponent accepted by `^`.
pub const MAX_POWER_EXPONENT: u32 = 1000;
/// Highest polynomial degree the solver handles.
pub const MAX_SOLVABLE_DEGREE: usize = 2;
/// Names that can never be bound in a session.
pub const RESERVED_NAMES: &[&str] = &["i"];

/// Runtime configuration shared by the evaluator and the solver.
///
/// Every field has a default matching the constants above; the command-line
/// driver overrides some of them.
///
/// # Example
/// ```
/// use computor::util::settings::Settings;
///
/// let settings = Settings { precision: 4,
///                           ..Settings::default() };
/// assert_eq!(settings.precision, 4);
/// assert_eq!(settings.max_solvable_degree, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Decimal digits kept by float to rational conversion. Printing always
    /// uses [`DECIMAL_PRECISION`], so larger values show up as fractions.
    pub precision:           u32,
    /// Floats below this magnitude snap to zero; also the Newton tolerance.
    pub epsilon:             f64,
    /// Newton–Raphson iteration cap.
    pub newton_iterations:   usize,
    /// Largest number of matrix rows.
    pub max_matrix_rows:     usize,
    /// Largest number of matrix columns.
    pub max_matrix_cols:     usize,
    /// Largest exponent accepted by `^`.
    pub max_power_exponent:  u32,
    /// Highest degree the solver accepts.
    pub max_solvable_degree: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { precision:           DECIMAL_PRECISION,
               epsilon:             EPSILON,
               newton_iterations:   NEWTON_ITERATIONS,
               max_matrix_rows:     MAX_MATRIX_ROWS,
               max_matrix_cols:     MAX_MATRIX_COLS,
               max_power_exponent:  MAX_POWER_EXPONENT,
               max_solvable_degree: MAX_SOLVABLE_DEGREE, }
    }
}

/// Returns `true` if `name` can never be bound, ignoring case.
///
/// # Example
/// ```
/// use computor::util::settings::is_reserved_name;
///
/// assert!(is_reserved_name("i"));
/// assert!(is_reserved_name("I"));
/// assert!(!is_reserved_name("x"));
/// ```
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.iter()
                  .any(|reserved| reserved.eq_ignore_ascii_case(name))
}
