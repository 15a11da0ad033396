//! AND combinator - logical conjunction of validators.
//!
//! [`And`] combines two statically-typed validators; [`AndAll`] combines a
//! runtime collection (used by the rule-compiling backend, which builds a
//! chain of boxed validators per field). Both short-circuit on the first
//! failure.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// Errors are returned from the first failing validator.
///
/// # Examples
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let validator = min_length(5).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// assert!(validator.validate("verylongstring").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Combines a collection of validators with logical AND.
///
/// All validators must pass; validation stops at the first failure.
/// An empty collection passes vacuously.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Returns true if the chain carries no validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

/// Creates an `AndAll` combinator from a vector of validators.
///
/// Useful when the number of validators is only known at runtime.
///
/// # Examples
///
/// ```rust
/// use rulecheck::combinators::and_all;
/// use rulecheck::prelude::*;
///
/// let validator = and_all(vec![min_length(3), min_length(5)]);
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hey").is_err());
/// ```
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, min_length};

    #[test]
    fn and_both_pass() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn and_left_fails() {
        let validator = And::new(min_length(5), max_length(10));
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn and_chain() {
        let validator = min_length(3).and(max_length(10)).and(min_length(5));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
    }

    #[test]
    fn and_all_short_circuits_on_failure() {
        let combined = and_all(vec![min_length(3), min_length(5), min_length(7)]);
        assert!(combined.validate("helloworld").is_ok());
        let err = combined.validate("hello").unwrap_err();
        assert_eq!(err.param("min"), Some("7"));
    }

    #[test]
    fn and_all_empty_passes() {
        let combined: AndAll<crate::validators::MinLength> = and_all(vec![]);
        assert!(combined.is_empty());
        assert!(combined.validate("anything").is_ok());
    }

    #[test]
    fn and_all_boxed() {
        use crate::foundation::Validate as _;
        let steps: Vec<Box<dyn crate::foundation::Validate<Input = str>>> =
            vec![Box::new(min_length(2)), Box::new(max_length(4))];
        let combined = and_all(steps);
        assert!(combined.validate("abc").is_ok());
        assert!(combined.validate("a").is_err());
        assert!(combined.validate("abcde").is_err());
    }
}
