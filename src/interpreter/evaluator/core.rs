use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{context::Context, function::core::is_builtin_function},
        value::{core::Value, function::Function, polynomial::Polynomial},
    },
    util::settings::Settings,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a statement evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    /// A computed value: the result of an expression, a query, an assignment
    /// or a definition.
    Value(Value),
    /// An equation still to be solved, as its two sides.
    Equation(Polynomial, Polynomial),
}

/// Walks the syntax tree of one statement.
///
/// An `Evaluator` borrows the session's [`Context`] and [`Settings`] for the
/// duration of a statement. While a function body is being evaluated it also
/// records the parameter name, which then always evaluates to the symbolic
/// indeterminate, even if a variable of the same name is bound.
///
/// ## Usage
///
/// ```
/// use computor::{
///     interpreter::{
///         evaluator::{context::Context, core::{EvalOutcome, Evaluator}},
///         lexer::tokenize,
///         parser::statement::parse,
///         value::core::Value,
///     },
///     util::settings::Settings,
/// };
///
/// let mut context = Context::new();
/// let settings = Settings::default();
/// let statement = parse(&tokenize("a = 2 * 3").unwrap()).unwrap();
///
/// let outcome = Evaluator::new(&mut context, &settings).eval_statement(&statement)
///                                                      .unwrap();
/// assert_eq!(outcome, EvalOutcome::Value(Value::from(6)));
/// assert!(context.has_variable("a"));
/// ```
pub struct Evaluator<'a> {
    pub(crate) context:   &'a mut Context,
    pub(crate) settings:  &'a Settings,
    pub(crate) parameter: Option<String>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over a session's bindings and settings.
    pub const fn new(context: &'a mut Context, settings: &'a Settings) -> Self {
        Self { context,
               settings,
               parameter: None }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant. Binary operands
    /// are evaluated left first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, line } => self.eval_literal(value, *line),
            Expr::Identifier { name, .. } => Ok(self.eval_identifier(name)),
            Expr::Imaginary { .. } => Ok(Self::eval_imaginary()),
            Expr::UnaryOp { op, expr, line } => {
                let operand = self.eval(expr)?;
                Self::eval_unary(*op, operand, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, left, right, *line)
            },
            Expr::Matrix { rows, line } => self.eval_matrix_literal(rows, *line),
            Expr::FunctionCall { name,
                                 argument,
                                 line, } => self.eval_function_call(name, argument, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and definitions only touch the context once their
    /// right-hand side evaluated successfully. Equations are not solved here:
    /// both sides are reduced to polynomials and returned.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// An [`EvalOutcome`].
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<EvalOutcome> {
        match statement {
            Statement::Expression { expr, .. } | Statement::Query { expr, .. } => {
                let value = self.eval(expr)?.simplify();
                log::debug!("value: {value}");
                Ok(EvalOutcome::Value(value))
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?.simplify();
                self.context.set_variable(name, value.clone(), *line)?;
                Ok(EvalOutcome::Value(value))
            },
            Statement::Function(def) => self.eval_function_definition(def)
                                            .map(|f| EvalOutcome::Value(Value::Function(f))),
            Statement::Equation { left, right, line } => {
                let (left, right) = self.eval_equation(left, right, *line)?;
                log::debug!("equation: {left} = {right}");
                Ok(EvalOutcome::Equation(left, right))
            },
        }
    }

    /// Evaluates `expr` with `parameter` installed as the active
    /// indeterminate, restoring the previous state afterwards.
    fn eval_with_parameter(&mut self, parameter: &str, expr: &Expr) -> EvalResult<Value> {
        let previous = self.parameter.replace(parameter.to_string());
        let result = self.eval(expr);
        self.parameter = previous;
        result
    }

    /// Evaluates a function definition and binds it.
    ///
    /// The body must reduce to a polynomial; a bare number becomes a constant
    /// polynomial and a function contributes its body. The result is tagged
    /// with the declared parameter.
    ///
    /// # Errors
    /// - `BuiltinFunctionRedefinition` or `ReservedNameAssignment` for the
    ///   name.
    /// - `InvalidOperand` if the body is a matrix.
    /// - Any error from evaluating the body.
    fn eval_function_definition(&mut self, def: &FunctionDef) -> EvalResult<Function> {
        if is_builtin_function(&def.name) {
            return Err(RuntimeError::BuiltinFunctionRedefinition { name: def.name.clone(),
                                                                   line: def.line, });
        }

        let body = self.eval_with_parameter(&def.param, &def.body)?;
        let body = Self::to_polynomial(body, &def.param, "a function body", def.line)?;

        let function = Function::new(&def.name, &def.param, body);
        self.context.set_function(function.clone(), def.line)?;
        Ok(function)
    }

    /// Reduces both sides of an equation to polynomials.
    ///
    /// `f(x) = rhs` where `f` is defined and `x` is literally its parameter
    /// uses the stored body of `f` as the left side, and evaluates `rhs` with
    /// `x` as the indeterminate. Otherwise both sides are evaluated and
    /// converted independently.
    fn eval_equation(&mut self,
                     left: &Expr,
                     right: &Expr,
                     line: usize)
                     -> EvalResult<(Polynomial, Polynomial)> {
        if let Expr::FunctionCall { name, argument, .. } = left
           && let Expr::Identifier { name: argument, .. } = argument.as_ref()
           && let Some(function) = self.context.function(name)
           && function.parameter() == argument
        {
            let function = function.clone();
            let parameter = function.parameter();
            let right = self.eval_with_parameter(parameter, right)?;
            let right = Self::to_polynomial(right, parameter, "an equation side", line)?;
            return Ok((function.body().clone(), right));
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Ok((Self::to_polynomial(left, DEFAULT_EQUATION_VARIABLE, "an equation side", line)?,
            Self::to_polynomial(right, DEFAULT_EQUATION_VARIABLE, "an equation side", line)?))
    }
}

/// Variable given to a side of an equation that is a plain number.
const DEFAULT_EQUATION_VARIABLE: &str = crate::interpreter::value::polynomial::DEFAULT_VARIABLE;
