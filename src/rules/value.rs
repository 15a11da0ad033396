//! Value-level policies shared by both validation backends.
//!
//! Emptiness decides whether a field counts as "absent/blank"; the text form
//! is what the string predicates (email, mobile, length) inspect.

use std::borrow::Cow;

use serde_json::Value;

/// The value an absent record field evaluates as.
pub(crate) static NULL_VALUE: Value = Value::Null;

/// Whether a value counts as empty.
///
/// Empty: `null` (and absent fields), the empty string, and `false`.
/// Never empty: any number — the zero exemption means `0` counts as a real
/// value — as well as the string `"0"`, arrays, and objects.
///
/// # Examples
///
/// ```rust
/// use rulecheck::rules::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!(null)));
/// assert!(is_empty(&json!("")));
/// assert!(is_empty(&json!(false)));
/// assert!(!is_empty(&json!(0)));
/// assert!(!is_empty(&json!("0")));
/// assert!(!is_empty(&json!("x")));
/// ```
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

/// The text form of a scalar value.
///
/// Strings are borrowed as-is; numbers and booleans use their display form;
/// `null` reads as the empty string. Arrays and objects have no text form,
/// so text predicates fail on them.
#[must_use]
pub fn text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Null => Some(Cow::Borrowed("")),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// The JSON type name of a value, for error reporting.
#[must_use]
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
