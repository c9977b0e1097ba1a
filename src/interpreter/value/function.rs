use std::fmt::Display;

use crate::{
    error::{MathError, MathResult},
    interpreter::value::{polynomial::Polynomial, scalar::Scalar},
};

/// A named function of one parameter with a polynomial body.
///
/// The body's variable is always the parameter name. Arithmetic on a
/// function produces a new function with the same name and parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function {
    name:      String,
    parameter: String,
    body:      Polynomial,
}

impl Function {
    /// Builds a function, relabelling `body` to `parameter`.
    ///
    /// Names are case-folded.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{function::Function, polynomial::Polynomial};
    ///
    /// let f = Function::new("F", "t", Polynomial::x("x"));
    /// assert_eq!(f.to_string(), "f(t) = t");
    /// ```
    #[must_use]
    pub fn new(name: &str, parameter: &str, body: Polynomial) -> Self {
        let parameter = parameter.to_lowercase();
        Self { name: name.to_lowercase(),
               body: body.relabel(&parameter),
               parameter }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    #[must_use]
    pub const fn body(&self) -> &Polynomial {
        &self.body
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.body.degree()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.body.is_zero()
    }

    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.body.is_constant()
    }

    /// Evaluates the body at a scalar.
    #[must_use]
    pub fn evaluate(&self, at: &Scalar) -> Scalar {
        self.body.evaluate(at)
    }

    /// Substitutes a polynomial for the parameter, keeping the result
    /// symbolic. The result's variable is `argument`'s.
    #[must_use]
    pub fn apply(&self, argument: &Polynomial) -> Polynomial {
        self.body.compose(argument)
    }

    /// `self ∘ inner`, named `"{self}_{inner}"` and taking `inner`'s
    /// parameter.
    ///
    /// # Example
    /// ```
    /// use computor::interpreter::value::{function::Function, polynomial::Polynomial,
    ///                                    scalar::Scalar};
    ///
    /// let square = Function::new("f", "x", Polynomial::new([(2, Scalar::from(1))], "x"));
    /// let shift = Function::new("g", "y", Polynomial::new([(1, Scalar::from(1)),
    ///                                                      (0, Scalar::from(1))], "y"));
    /// assert_eq!(square.compose(&shift).to_string(), "f_g(y) = y^2 + 2 * y + 1");
    /// ```
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        Self::new(&format!("{}_{}", self.name, inner.name),
                  &inner.parameter,
                  self.body.compose(&inner.body))
    }

    /// Returns another function's body if it shares this parameter.
    ///
    /// # Errors
    /// Returns `MathError::VariableMismatch` otherwise.
    pub fn compatible_body<'a>(&self, other: &'a Self) -> MathResult<&'a Polynomial> {
        if other.parameter == self.parameter {
            Ok(&other.body)
        } else {
            Err(MathError::VariableMismatch { left:  self.parameter.clone(),
                                              right: other.parameter.clone(), })
        }
    }

    fn with_body(&self, body: Polynomial) -> Self {
        Self::new(&self.name, &self.parameter, body)
    }

    /// `self + other`.
    ///
    /// # Errors
    /// Propagates the polynomial's variable check.
    pub fn add(&self, other: &Polynomial) -> MathResult<Self> {
        Ok(self.with_body(self.body.add(other)?))
    }

    /// `self - other`.
    ///
    /// # Errors
    /// Propagates the polynomial's variable check.
    pub fn sub(&self, other: &Polynomial) -> MathResult<Self> {
        Ok(self.with_body(self.body.sub(other)?))
    }

    /// `other - self`.
    ///
    /// # Errors
    /// Propagates the polynomial's variable check.
    pub fn rsub(&self, other: &Polynomial) -> MathResult<Self> {
        Ok(self.with_body(other.sub(&self.body)?))
    }

    /// `self * other`.
    ///
    /// # Errors
    /// Propagates the polynomial's variable check.
    pub fn mul(&self, other: &Polynomial) -> MathResult<Self> {
        Ok(self.with_body(self.body.mul(other)?))
    }

    /// `self / other` for a constant `other`.
    ///
    /// # Errors
    /// See [`Polynomial::div`].
    pub fn div(&self, other: &Polynomial) -> MathResult<Self> {
        Ok(self.with_body(self.body.div(other)?))
    }

    /// `self % other` for a constant `other`.
    ///
    /// # Errors
    /// See [`Polynomial::rem`].
    pub fn rem(&self, other: &Polynomial) -> MathResult<Self> {
        Ok(self.with_body(self.body.rem(other)?))
    }

    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        self.with_body(self.body.pow(exponent))
    }
}

impl std::ops::Neg for &Function {
    type Output = Function;

    fn neg(self) -> Self::Output {
        self.with_body(-&self.body)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) = {}", self.name, self.parameter, self.body)
    }
}
