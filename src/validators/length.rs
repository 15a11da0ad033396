//! String length validators.
//!
//! Length is measured in Unicode scalar values (chars), not bytes.

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Equivalent to `MinLength::new(1)` but more semantic.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
