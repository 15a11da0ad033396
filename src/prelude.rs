//! Convenience re-exports for the common use cases.
//!
//! ```rust
//! use rulecheck::prelude::*;
//! ```

pub use crate::combinators::{AndAll, and, and_all, or, with_message};
pub use crate::engine::{
    CombinatorEngine, CustomMessages, FieldError, Record, RuleEngine, RuleSpec, SpecError,
    ValidationEngine, ValidationResponse, validate, validate_json, validate_single,
    validate_with_messages,
};
pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::rules::{RuleSet, RuleToken, parse_rule_string};
pub use crate::validators::{email, max_length, min_length, mobile_cn, not_empty};
