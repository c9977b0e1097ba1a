use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, matrix},
        },
        value::core::Value,
    },
    util::settings::Settings,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated argument, the session settings and the
/// line number. It returns the computed value wrapped in `EvalResult`.
type BuiltinFn = fn(&Value, &Settings, usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - whether the builtin consumes a matrix instead of a number,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                matrix: $matrix:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:   &'static str,
            matrix: bool,
            func:   BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, matrix: $matrix, func: $func },
            )*
        ];
        /// Names of all built-in functions, in declaration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"       => { matrix: false, func: builtin::abs },
    "sqrt"      => { matrix: false, func: builtin::sqrt },
    "exp"       => { matrix: false, func: builtin::exp },
    "log"       => { matrix: false, func: builtin::ln },
    "ln"        => { matrix: false, func: builtin::ln },
    "sin"       => { matrix: false, func: builtin::sin },
    "cos"       => { matrix: false, func: builtin::cos },
    "tan"       => { matrix: false, func: builtin::tan },
    "det"       => { matrix: true,  func: matrix::det },
    "inv"       => { matrix: true,  func: matrix::inv },
    "transpose" => { matrix: true,  func: matrix::transpose },
}

/// Tests whether `name` is a built-in function.
///
/// # Example
/// ```
/// use computor::interpreter::evaluator::function::core::is_builtin_function;
///
/// assert!(is_builtin_function("sqrt"));
/// assert!(!is_builtin_function("f"));
/// ```
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin.
    /// If so, it evaluates the argument and executes the builtin.
    /// Otherwise it delegates to user-defined function handling.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `argument`: Unevaluated argument expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or application fails.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     argument: &Expr,
                                     line: usize)
                                     -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            let argument = self.eval(argument)?;
            return self.call_builtin(builtin, &argument, line);
        }

        self.call_user_defined_function(name, argument, line)
    }

    /// Applies a builtin to an evaluated argument.
    ///
    /// Matrix builtins receive the argument as is. Scalar builtins reject
    /// anything that does not reduce to a number, so `sqrt(x)` with `x`
    /// unbound is an error rather than a symbolic result.
    fn call_builtin(&self, builtin: &BuiltinDef, argument: &Value, line: usize) -> EvalResult<Value> {
        log::trace!("calling builtin {}({argument})", builtin.name);

        if builtin.matrix {
            return (builtin.func)(argument, self.settings, line);
        }

        let scalar = match argument {
            Value::Polynomial(p) if !p.is_constant() => {
                return Err(RuntimeError::InvalidOperand { details: format!("cannot apply {}() to the polynomial {p}",
                                                                           builtin.name),
                                                          line });
            },
            other => other.expect_scalar(&format!("{}()", builtin.name), line)?,
        };

        (builtin.func)(&Value::from(scalar), self.settings, line).map(Value::simplify)
    }

    /// Executes a user-defined function.
    ///
    /// The function is retrieved from the context by name and applied to its
    /// argument:
    /// - a number evaluates the body;
    /// - a non-constant polynomial is substituted for the parameter, giving a
    ///   polynomial in the argument's variable;
    /// - another function is composed, giving a new function `f_g`.
    ///
    /// # Errors
    /// - `UndefinedFunction` for an unknown name.
    /// - `TypeMismatch` for a matrix argument.
    fn call_user_defined_function(&self,
                                  name: &str,
                                  argument: &Expr,
                                  line: usize)
                                  -> EvalResult<Value> {
        let function = self.context.get_function(name, line)?.clone();
        let argument = self.eval(argument)?;

        match argument {
            Value::Polynomial(p) if !p.is_constant() => Ok(Value::Polynomial(function.apply(&p))),
            Value::Function(g) => Ok(Value::Function(function.compose(&g))),
            Value::Matrix(_) => Err(RuntimeError::TypeMismatch { op: format!("{name}()"),
                                                                 left: "Matrix".to_string(),
                                                                 right: None,
                                                                 line }),
            other => {
                let at = other.expect_scalar(&format!("{name}()"), line)?;
                Ok(Value::from(function.evaluate(&at)).simplify())
            },
        }
    }
}
