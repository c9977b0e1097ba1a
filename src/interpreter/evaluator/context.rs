use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::is_builtin_function},
        value::{core::Value, function::Function},
    },
    util::settings::is_reserved_name,
};

/// Stores the session's bindings.
///
/// This struct holds the interpreter state: variables bound by assignment and
/// functions bound by definition. All names are case-insensitive and stored
/// lowercase. Reserved names can never be keys.
///
/// ## Usage
///
/// A `Context` is created once per session and handed to every
/// [`Evaluator`](crate::interpreter::evaluator::core::Evaluator). It is only
/// mutated after a right-hand side has been fully evaluated, so a failed
/// statement leaves it untouched.
///
/// # Example
/// ```
/// use computor::interpreter::{evaluator::context::Context, value::core::Value};
///
/// let mut context = Context::new();
/// context.set_variable("X", Value::from(5), 1).unwrap();
///
/// assert!(context.has_variable("x"));
/// assert_eq!(context.get_variable("x", 1).unwrap(), &Value::from(5));
/// assert!(context.set_variable("i", Value::from(1), 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Function>,
}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    fn check_reserved(name: &str, line: usize) -> EvalResult<()> {
        if is_reserved_name(name) {
            return Err(RuntimeError::ReservedNameAssignment { name: name.to_string(),
                                                              line });
        }
        Ok(())
    }

    /// Binds a variable, replacing any previous value.
    ///
    /// # Errors
    /// Returns `RuntimeError::ReservedNameAssignment` for reserved names.
    pub fn set_variable(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        Self::check_reserved(name, line)?;
        log::debug!("bind {name} = {value}");
        self.variables.insert(Self::key(name), value);
        Ok(())
    }

    /// Looks up a variable without failing.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(&Self::key(name))
    }

    /// Looks up a variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if it is not bound.
    pub fn get_variable(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: Self::key(name),
                                                             line })
    }

    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(&Self::key(name))
    }

    /// Removes a variable, returning `true` if it existed.
    pub fn delete_variable(&mut self, name: &str) -> bool {
        self.variables.remove(&Self::key(name)).is_some()
    }

    /// Binds a function under its own name.
    ///
    /// # Errors
    /// - `RuntimeError::ReservedNameAssignment` for reserved names.
    /// - `RuntimeError::BuiltinFunctionRedefinition` for built-in names.
    pub fn set_function(&mut self, function: Function, line: usize) -> EvalResult<()> {
        let name = function.name().to_string();
        Self::check_reserved(&name, line)?;
        if is_builtin_function(&name) {
            return Err(RuntimeError::BuiltinFunctionRedefinition { name, line });
        }
        log::debug!("define {function}");
        self.functions.insert(name, function);
        Ok(())
    }

    /// Looks up a function without failing.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(&Self::key(name))
    }

    /// Looks up a function.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedFunction` if it is not defined.
    pub fn get_function(&self, name: &str, line: usize) -> EvalResult<&Function> {
        self.function(name)
            .ok_or_else(|| RuntimeError::UndefinedFunction { name: Self::key(name),
                                                             line })
    }

    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(&Self::key(name))
    }

    /// Removes a function, returning `true` if it existed.
    pub fn delete_function(&mut self, name: &str) -> bool {
        self.functions.remove(&Self::key(name)).is_some()
    }

    /// Returns `true` if `name` is bound as a variable or a function.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.has_variable(name) || self.has_function(name)
    }

    /// Looks up a name as a variable first, then as a function.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if neither exists.
    pub fn get_any(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.variable(name) {
            return Ok(value.clone());
        }
        self.function(name)
            .map(|f| Value::Function(f.clone()))
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: Self::key(name),
                                                             line })
    }

    /// All variables, sorted by name.
    #[must_use]
    pub fn list_variables(&self) -> Vec<(&str, &Value)> {
        let mut list: Vec<_> = self.variables.iter().map(|(k, v)| (k.as_str(), v)).collect();
        list.sort_by(|a, b| a.0.cmp(b.0));
        list
    }

    /// All functions, sorted by name.
    #[must_use]
    pub fn list_functions(&self) -> Vec<&Function> {
        let mut list: Vec<_> = self.functions.values().collect();
        list.sort_by(|a, b| a.name().cmp(b.name()));
        list
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
        self.functions.clear();
    }
}
