//! Built-in validators.
//!
//! The concrete predicates the rule grammar names, exposed as composable
//! validators over `str`:
//!
//! - **Length**: [`MinLength`], [`MaxLength`], [`NotEmpty`]
//! - **Content**: [`Email`], [`CnMobile`]
//!
//! # Examples
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let username = min_length(3).and(max_length(20));
//! assert!(username.validate("alice").is_ok());
//!
//! let contact = email();
//! assert!(contact.validate("a@b.com").is_ok());
//! ```

pub mod content;
pub mod length;

pub use content::{CnMobile, Email, email, mobile_cn};
pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};

pub(crate) use content::{cn_mobile_pattern, email_pattern};
