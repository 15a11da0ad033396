//! NOT combinator - logical negation of a validator.

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds when the inner validator fails and vice versa.
///
/// # Examples
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let validator = min_length(5).not();
/// assert!(validator.validate("hi").is_ok());
/// assert!(validator.validate("hello").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation must not pass, but it did",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V>(validator: V) -> Not<V>
where
    V: Validate,
{
    Not::new(validator)
}
