//! # computor
//!
//! computor is an interpreter for exact arithmetic written in Rust.
//! It evaluates expressions over rationals, complex numbers, matrices,
//! polynomials and functions, and solves polynomial equations up to degree 2.
//! Names that are not bound are indeterminates, so `x^2 - 4 = 0 ?` can be
//! solved without declaring `x`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt::Display;

use crate::{
    error::{Error, SolveError},
    interpreter::{
        evaluator::{
            context::Context,
            core::{EvalOutcome, Evaluator},
        },
        lexer::tokenize_at,
        parser::statement::parse,
        value::core::Value,
    },
    simplifier::equation::simplify_equation,
    solver::{core::solve, solution::Solution},
    util::settings::Settings,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent one
/// line of source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// evaluating or solving. Each carries the source line it refers to, and the
/// umbrella `Error` tags it with its stage.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   solver).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of statements.
///
/// This module ties together lexing, parsing, evaluation and the value types.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Reduces equations to standard form.
pub mod simplifier;
/// Solves equations in standard form up to degree 2.
pub mod solver;
/// Settings and numeric conversion helpers.
///
/// # Responsibilities
/// - Hold the tunable limits and precision of a session.
/// - Convert between floats and exact fractions at one precision boundary.
pub mod util;

/// What a successfully executed statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value of an expression, query, assignment or definition.
    Value(Value),
    /// The solution of an equation.
    Solved(Solution),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Solved(s) => write!(f, "{s}"),
        }
    }
}

/// One interactive session: its bindings and its settings.
///
/// Every statement runs to completion before the next one starts. A failing
/// statement leaves the bindings as they were.
///
/// # Example
/// ```
/// use computor::{Outcome, Session};
///
/// let mut session = Session::new();
/// session.execute("f(x) = x^2 + 1").unwrap();
///
/// let Outcome::Value(v) = session.execute("f(2) = ?").unwrap() else { panic!() };
/// assert_eq!(v.to_string(), "5");
///
/// let Outcome::Solved(s) = session.execute("f(y) = 0 ?").unwrap() else { panic!() };
/// assert!(s.has_complex_roots());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    context:  Context,
    settings: Settings,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self { context: Context::new(),
               settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    pub const fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Executes one statement.
    ///
    /// # Errors
    /// Returns the error of the first stage that failed.
    pub fn execute(&mut self, source: &str) -> Result<Outcome, Error> {
        self.execute_line(source, 1)
    }

    /// Executes one statement that sits on line `line` of a script.
    ///
    /// # Errors
    /// Returns the error of the first stage that failed, carrying `line`.
    pub fn execute_line(&mut self, source: &str, line: usize) -> Result<Outcome, Error> {
        let tokens = tokenize_at(source, line)?;
        let statement = parse(&tokens)?;

        let outcome = Evaluator::new(&mut self.context, &self.settings).eval_statement(&statement)?;
        match outcome {
            EvalOutcome::Value(value) => Ok(Outcome::Value(value)),
            EvalOutcome::Equation(left, right) => {
                let equation = simplify_equation(&left, &right, &self.settings).map_err(SolveError::from)?;
                Ok(Outcome::Solved(solve(&equation, &self.settings)?))
            },
        }
    }

    /// Executes a script, one statement per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Execution stops
    /// at the first failure.
    ///
    /// # Errors
    /// Returns the first error, carrying the line of the script it occurred
    /// on.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<Outcome>, Error> {
        let mut outcomes = Vec::new();

        for (index, line) in script.lines().enumerate() {
            let statement = line.trim();
            if statement.is_empty() || statement.starts_with('#') {
                continue;
            }
            outcomes.push(self.execute_line(statement, index + 1)?);
        }

        Ok(outcomes)
    }
}

/// Runs a script in a fresh session and returns the last outcome.
///
/// # Errors
/// Returns an error if lexing, parsing, evaluation or solving fails on any
/// line.
///
/// # Examples
/// ```
/// use computor::{Outcome, get_result};
///
/// let result = get_result("a = 2\nb = a * 3 + 1").unwrap();
/// assert_eq!(result.map(|o| o.to_string()), Some("7".to_string()));
///
/// // Unbound names are indeterminates, not errors.
/// let result = get_result("y = x + 1").unwrap();
/// assert_eq!(result.map(|o| o.to_string()), Some("x + 1".to_string()));
///
/// // Division by zero is.
/// assert!(get_result("y = 1 / 0").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<Outcome>, Error> {
    let mut session = Session::new();
    Ok(session.run_script(source)?.pop())
}
