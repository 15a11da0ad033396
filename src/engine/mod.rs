//! The validation orchestrator.
//!
//! Iterates every field declared in the rule spec, evaluates it through one
//! of two interchangeable backends, and aggregates the results into a
//! [`ValidationResponse`]:
//!
//! - [`RuleEngine`] — the native engine: direct match dispatch over parsed
//!   tokens, boolean verdicts, no default messages.
//! - [`CombinatorEngine`] — the adapter: compiles tokens into
//!   combinator-library validators and reshapes their errors, messages
//!   always populated.
//!
//! A single pass is fully synchronous, reads only its inputs, and allocates
//! a fresh response; concurrent calls need no coordination.
//!
//! # Examples
//!
//! ```rust
//! use rulecheck::prelude::*;
//! use serde_json::json;
//!
//! let record = Record::from([
//!     ("email".to_string(), json!("user@example.com")),
//!     ("phone".to_string(), json!("12345678901")),
//! ]);
//! let spec = RuleSpec::from([
//!     ("email".to_string(), RuleSet::from("required|email")),
//!     ("phone".to_string(), RuleSet::from("mobile")),
//! ]);
//!
//! let response = validate(&record, &spec);
//! assert!(response.is_pass());
//! assert_eq!(response.error_count(), 0);
//! ```

pub mod adapter;
pub mod native;
pub mod response;

pub use adapter::CombinatorEngine;
pub use native::{RuleEngine, validate_single};
pub use response::{FieldError, ValidationResponse};

use indexmap::IndexMap;
use serde_json::Value;

use crate::rules::RuleSet;
use crate::rules::value::json_type;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The record under validation: field name to value, declaration order
/// preserved. Caller-owned and read-only to the engine.
pub type Record = IndexMap<String, Value>;

/// The per-field rule declarations, evaluated in declaration order.
pub type RuleSpec = IndexMap<String, RuleSet>;

/// Per-field message overrides. An entry replaces the message of that
/// field's error entry only; it never suppresses the entry.
pub type CustomMessages = IndexMap<String, String>;

// ============================================================================
// ENGINE TRAIT
// ============================================================================

/// A rule-evaluation backend.
///
/// Both built-in backends satisfy the same contract and must agree on
/// `is_pass` and `error_count` for any record/spec pair; callers select one
/// by value (dependency injection), not by import substitution.
pub trait ValidationEngine {
    /// Validates every field declared in `spec` against `record`.
    ///
    /// Fields present in the record but absent from the spec are never
    /// evaluated and never reported; fields absent from the record evaluate
    /// as null.
    fn validate(
        &self,
        record: &Record,
        spec: &RuleSpec,
        messages: Option<&CustomMessages>,
    ) -> ValidationResponse;
}

// ============================================================================
// FREE FUNCTIONS (native backend)
// ============================================================================

/// Validates a record with the native engine.
#[must_use]
pub fn validate(record: &Record, spec: &RuleSpec) -> ValidationResponse {
    RuleEngine.validate(record, spec, None)
}

/// Validates a record with the native engine and per-field message
/// overrides.
#[must_use]
pub fn validate_with_messages(
    record: &Record,
    spec: &RuleSpec,
    messages: Option<&CustomMessages>,
) -> ValidationResponse {
    RuleEngine.validate(record, spec, messages)
}

/// Reserved entry point for future remote/asynchronous validation rules.
///
/// Resolves immediately and performs no validation; it exists to keep the
/// interface stable ahead of that capability and implies no concurrency
/// guarantee beyond "resolves, does nothing".
pub async fn validate_async() {}

// ============================================================================
// DYNAMIC (JSON) ENTRY POINT
// ============================================================================

/// Call-level input errors for the dynamic entry point.
///
/// This is the only fatal error category: constraint violations and
/// malformed rule grammar are folded into the response instead.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// The rule spec was not a JSON object.
    #[error("rule spec must be a JSON object, got {0}")]
    RuleSpecNotObject(&'static str),
    /// A field's rule descriptor was neither a string nor an array of
    /// strings.
    #[error("rule descriptor for field `{field}` must be a string or an array of strings")]
    BadRuleDescriptor {
        /// The offending field name.
        field: String,
    },
}

/// Validates untyped JSON input with the native engine.
///
/// `rules` must be a JSON object mapping field names to rule descriptors
/// (a string or an array of strings); anything else aborts the call with a
/// [`SpecError`]. A non-object `data` value is treated as an empty record,
/// so every declared field evaluates as absent.
///
/// # Errors
///
/// Returns [`SpecError`] when `rules` is not an object or a descriptor has
/// the wrong shape.
///
/// # Examples
///
/// ```rust
/// use rulecheck::validate_json;
/// use serde_json::json;
///
/// let response = validate_json(
///     &json!({ "email": "a@b.com" }),
///     &json!({ "email": "required|email" }),
/// )
/// .unwrap();
/// assert!(response.is_pass());
///
/// assert!(validate_json(&json!({}), &json!("not a mapping")).is_err());
/// ```
pub fn validate_json(data: &Value, rules: &Value) -> Result<ValidationResponse, SpecError> {
    let Some(rules_obj) = rules.as_object() else {
        return Err(SpecError::RuleSpecNotObject(json_type(rules)));
    };

    let mut spec = RuleSpec::new();
    for (field, descriptor) in rules_obj {
        let rule_set = match descriptor {
            Value::String(rule) => RuleSet::One(rule.clone()),
            Value::Array(items) => {
                let mut rules = Vec::with_capacity(items.len());
                for item in items {
                    let Value::String(rule) = item else {
                        return Err(SpecError::BadRuleDescriptor {
                            field: field.clone(),
                        });
                    };
                    rules.push(rule.clone());
                }
                RuleSet::Many(rules)
            }
            _ => {
                return Err(SpecError::BadRuleDescriptor {
                    field: field.clone(),
                });
            }
        };
        spec.insert(field.clone(), rule_set);
    }

    let record: Record = data
        .as_object()
        .map(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    Ok(validate(&record, &spec))
}

// ============================================================================
// TESTS
// ============================================================================
