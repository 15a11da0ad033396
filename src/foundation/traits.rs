//! Core traits for the validation system.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are generic over the input type, allowing compile-time type
/// safety while keeping a single consistent `Result<(), ValidationError>`
/// signature.
///
/// # Examples
///
/// ```rust
/// use rulecheck::foundation::{Validate, ValidationError};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
/// }
///
/// let validator = MinLength { min: 3 };
/// assert!(validator.validate("abc").is_ok());
/// assert!(validator.validate("ab").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` implementations to validate unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success, `Err(ValidationError)` on failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// Boxed validators forward to the inner implementation. Orchestration code
// builds heterogeneous chains of `Box<dyn Validate<Input = _>>`.
impl<I: ?Sized> Validate for Box<dyn Validate<Input = I>> {
    type Input = I;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type, providing a fluent
/// API for composing validators.
///
/// # Examples
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass; evaluation short-circuits on the first
    /// failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass; evaluation short-circuits on the
    /// first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn validator_trait() {
        let validator = AlwaysValid;
        assert!(validator.validate("test").is_ok());
    }

    #[test]
    fn boxed_validator_forwards() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("test").is_ok());
    }
}
