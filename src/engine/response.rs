//! The shared response contract both validation backends emit.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rules::RuleSet;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// One failing field's error entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The original rule descriptor the field was declared with.
    pub rule: RuleSet,
    /// Human-readable message. Populated by the adapter backend and by
    /// custom message overrides; the native backend leaves it unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============================================================================
// VALIDATION RESPONSE
// ============================================================================

/// The aggregated result of validating a record.
///
/// Constructed only through [`ValidationResponse::from_errors`], which pins
/// the two contract invariants: `error_count == errors.len()` and
/// `is_pass == (error_count == 0)`.
///
/// Serializes as `{"isPass": …, "errorCount": …, "errors": {…}}`, with each
/// error entry carrying the field's original rule descriptor and, when
/// available, a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    is_pass: bool,
    error_count: usize,
    errors: IndexMap<String, FieldError>,
}

impl ValidationResponse {
    /// Builds a response from the per-field error map, deriving the pass
    /// flag and error count.
    #[must_use]
    pub fn from_errors(errors: IndexMap<String, FieldError>) -> Self {
        let error_count = errors.len();
        Self {
            is_pass: error_count == 0,
            error_count,
            errors,
        }
    }

    /// A response with no errors.
    #[must_use]
    pub fn passing() -> Self {
        Self::from_errors(IndexMap::new())
    }

    /// Whether every declared field passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    /// The number of failing fields.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// The failing fields, in rule-spec declaration order.
    #[must_use]
    pub fn errors(&self) -> &IndexMap<String, FieldError> {
        &self.errors
    }

    /// Looks up the error entry for a field, if it failed.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }
}

// ============================================================================
// TESTS
// ============================================================================
