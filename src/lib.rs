//! # rulecheck
//!
//! A declarative, string-rule-driven validation engine for JSON records.
//!
//! Rules are compact pipe-delimited strings (`"required|email"`,
//! `"min-length[3]"`), declared per field and evaluated against a record of
//! [`serde_json::Value`]s. The result is an aggregate
//! [`ValidationResponse`](engine::ValidationResponse) listing every failing
//! field with the rule it failed.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulecheck::prelude::*;
//! use serde_json::json;
//!
//! let record = Record::from([
//!     ("email".to_string(), json!("user@example.com")),
//!     ("nickname".to_string(), json!("al")),
//! ]);
//! let spec = RuleSpec::from([
//!     ("email".to_string(), RuleSet::from("required|email")),
//!     ("nickname".to_string(), RuleSet::from("min-length[3]")),
//! ]);
//!
//! let response = validate(&record, &spec);
//! assert!(!response.is_pass());
//! assert_eq!(response.error_count(), 1);
//! assert!(response.error("nickname").is_some());
//! ```
//!
//! ## Rule Grammar
//!
//! A rule string splits on `|` into tokens, each evaluated independently:
//!
//! - `required` — the value must be non-empty. Fields without this token are
//!   optional: an empty value passes the whole rule set.
//! - `email` — RFC-style email address.
//! - `mobile` — mainland-China mobile number (`1` followed by ten digits).
//! - `min-length[N]` / `max-length[N]` — character-count bounds.
//!
//! Unrecognized tokens pass; a recognizable length token with malformed
//! bracket syntax fails the field (fail closed, never panic).
//!
//! ## Backends
//!
//! Two interchangeable [`ValidationEngine`](engine::ValidationEngine)
//! backends produce the same verdicts: the native
//! [`RuleEngine`](engine::RuleEngine) and the
//! [`CombinatorEngine`](engine::CombinatorEngine) adapter, which compiles
//! rule strings into the composable [`Validate`](foundation::Validate)
//! combinators also exported by this crate.
//!
//! ## Building Blocks
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or
//! implement [`Validate`](foundation::Validate) manually, and compose with
//! `.and()` / `.or()` / `.not()`:
//!
//! ```rust
//! use rulecheck::prelude::*;
//!
//! let nickname = not_empty().and(min_length(3)).and(max_length(20));
//! assert!(nickname.validate("alice").is_ok());
//! assert!(nickname.validate("al").is_err());
//! ```

// ValidationError is the fundamental error type for all validators — boxing
// it would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex
// types that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use engine::{
    CombinatorEngine, CustomMessages, FieldError, Record, RuleEngine, RuleSpec, SpecError,
    ValidationEngine, ValidationResponse, validate, validate_async, validate_json, validate_single,
    validate_with_messages,
};
pub use foundation::{Validate, ValidateExt, ValidationError};
pub use rules::RuleSet;
