//! Core validation types and traits.
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and compose through logical
//! combinators:
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let validator = min_length(3).and(max_length(20));
//! assert!(validator.validate("alice").is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
