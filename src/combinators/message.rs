//! MESSAGE combinator - custom error messages.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// The original error code and parameters are preserved; only the message is
/// substituted. Used for caller-supplied per-field message overrides.
///
/// # Examples
///
/// ```rust
/// use rulecheck::combinators::with_message;
/// use rulecheck::prelude::*;
///
/// let validator = with_message(min_length(8), "Password is too short");
/// let err = validator.validate("short").unwrap_err();
/// assert_eq!(err.message, "Password is too short");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let mut substituted = ValidationError::new(original.code, self.message.clone());
            substituted.params = original.params;
            substituted
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min_length;

    #[test]
    fn passes_through_success() {
        let validator = WithMessage::new(min_length(3), "Custom message");
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn replaces_message_keeps_code() {
        let validator = WithMessage::new(min_length(10), "Password too short");
        let err = validator.validate("short").unwrap_err();
        assert_eq!(err.message, "Password too short");
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn params_preserved() {
        let validator = with_message(min_length(10), "too short");
        let err = validator.validate("short").unwrap_err();
        assert_eq!(err.param("min"), Some("10"));
        assert_eq!(err.param("actual"), Some("5"));
    }
}
