//! The native rule engine.
//!
//! Evaluates parsed rule tokens directly through a single match dispatch,
//! producing boolean verdicts only — no default messages. This is the
//! reference semantics for the rule grammar; the adapter backend in
//! [`adapter`](crate::engine::adapter) must agree with it on pass/fail.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::engine::response::{FieldError, ValidationResponse};
use crate::engine::{CustomMessages, Record, RuleSpec, ValidationEngine};
use crate::rules::value::NULL_VALUE;
use crate::rules::{RuleToken, is_empty, text};
use crate::validators::{cn_mobile_pattern, email_pattern};

// ============================================================================
// RULE ENGINE
// ============================================================================

/// The native, match-dispatched evaluation backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Evaluates a token sequence against a value.
    ///
    /// Applies the optional-field short circuit: an empty value with no
    /// `required` token passes regardless of the other declared tokens.
    /// Otherwise every token must pass; evaluation stops at the first
    /// failure.
    #[must_use]
    pub fn field_passes(tokens: &[RuleToken], value: &Value) -> bool {
        let required = tokens.iter().any(RuleToken::is_required);
        if is_empty(value) && !required {
            return true;
        }
        tokens.iter().all(|token| Self::token_passes(token, value))
    }

    fn token_passes(token: &RuleToken, value: &Value) -> bool {
        match token {
            RuleToken::Required => !is_empty(value),
            RuleToken::Email => {
                text(value).is_some_and(|t| email_pattern().is_match(&t))
            }
            RuleToken::Mobile => {
                text(value).is_some_and(|t| cn_mobile_pattern().is_match(&t))
            }
            RuleToken::Length { min, max, bound } => text(value).is_some_and(|t| {
                let len = t.chars().count();
                !(*min && len < *bound) && !(*max && len > *bound)
            }),
            // Unrecognized tokens express no opinion.
            RuleToken::Other(_) => true,
            // A broken length grammar fails closed instead of panicking.
            RuleToken::Malformed(_) => false,
        }
    }
}

impl ValidationEngine for RuleEngine {
    fn validate(
        &self,
        record: &Record,
        spec: &RuleSpec,
        messages: Option<&CustomMessages>,
    ) -> ValidationResponse {
        let mut errors = IndexMap::new();

        for (field, rule_set) in spec {
            let value = record.get(field).unwrap_or(&NULL_VALUE);
            let passed = Self::field_passes(&rule_set.tokens(), value);
            trace!(field = %field, passed, "field evaluated");

            if !passed {
                let message = messages.and_then(|m| m.get(field)).cloned();
                errors.insert(
                    field.clone(),
                    FieldError {
                        rule: rule_set.clone(),
                        message,
                    },
                );
            }
        }

        ValidationResponse::from_errors(errors)
    }
}

/// Evaluates one rule string against one value.
///
/// The single-field form of the native engine: `true` when every token in
/// the pipe-delimited rule string passes (subject to the optional-field
/// short circuit).
///
/// # Examples
///
/// ```rust
/// use rulecheck::validate_single;
/// use serde_json::json;
///
/// assert!(validate_single("required", &json!("x")));
/// assert!(!validate_single("required", &json!("")));
/// assert!(validate_single("required", &json!(0)));
/// assert!(!validate_single("required|min-length[3]", &json!("ab")));
/// ```
#[must_use]
pub fn validate_single(rule: &str, value: &Value) -> bool {
    trace!(rule, ?value, "validate_single");
    RuleEngine::field_passes(&crate::rules::parse_rule_string(rule), value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("hello"), true)]
    #[case(json!(""), false)]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(0), true)]
    #[case(json!("0"), true)]
    fn required_cases(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(validate_single("required", &value), expected);
    }

    #[rstest]
    #[case("min-length[3]", json!("ab"), false)]
    #[case("min-length[3]", json!("abc"), true)]
    #[case("min-length[3]", json!("abcd"), true)]
    #[case("max-length[5]", json!("abcde"), true)]
    #[case("max-length[5]", json!("abcdef"), false)]
    fn length_bounds(#[case] rule: &str, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(validate_single(rule, &value), expected);
    }

    #[test]
    fn malformed_length_fails_not_panics() {
        assert!(!validate_single("required|min-length[]", &json!("abc")));
        assert!(!validate_single("required|min-length", &json!("abc")));
    }

    #[test]
    fn optional_short_circuit() {
        // Empty value, no `required` token: other tokens are skipped.
        assert!(validate_single("email", &json!("")));
        assert!(validate_single("email|min-length[5]", &json!(null)));
        // Non-empty value still runs the chain.
        assert!(!validate_single("email", &json!("not-an-email")));
    }

    #[test]
    fn required_overrides_short_circuit() {
        assert!(!validate_single("required|email", &json!("")));
    }

    #[test]
    fn mobile_matches_numeric_value() {
        // A numeric record value validates its display form.
        assert!(validate_single("mobile", &json!(12345678901_u64)));
        assert!(!validate_single("mobile", &json!(2345678901_u64)));
    }

    #[test]
    fn unrecognized_token_passes() {
        assert!(validate_single("required|alpha", &json!("abc123")));
    }

    #[test]
    fn containers_fail_text_predicates() {
        assert!(!validate_single("required|min-length[1]", &json!([1, 2])));
        assert!(!validate_single("required|email", &json!({"a": 1})));
    }
}
