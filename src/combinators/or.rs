//! OR combinator - logical disjunction of validators.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass; evaluation short-circuits on the first
/// success. When both fail, the error reports both alternatives.
///
/// # Examples
///
/// ```rust
/// use rulecheck::prelude::*;
///
/// let validator = max_length(3).or(min_length(8));
/// assert!(validator.validate("abc").is_ok());
/// assert!(validator.validate("longenough").is_ok());
/// assert!(validator.validate("middle").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_err = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        let right_err = match self.right.validate(input) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        Err(
            ValidationError::new("or_failed", "No alternative matched")
                .with_param("left", left_err.code)
                .with_param("right", right_err.code),
        )
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length};

    #[test]
    fn left_passes() {
        let validator = Or::new(max_length(3), min_length(8));
        assert!(validator.validate("abc").is_ok());
    }

    #[test]
    fn right_passes() {
        let validator = Or::new(max_length(3), min_length(8));
        assert!(validator.validate("longenough").is_ok());
    }

    #[test]
    fn both_fail() {
        let validator = or(max_length(3), min_length(8));
        let err = validator.validate("middle").unwrap_err();
        assert_eq!(err.code, "or_failed");
        assert_eq!(err.param("left"), Some("max_length"));
        assert_eq!(err.param("right"), Some("min_length"));
    }
}
