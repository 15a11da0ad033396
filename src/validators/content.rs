//! String content validators.
//!
//! Format validators backed by compiled regular expressions. The patterns
//! are process-wide constants, compiled once on first use and never mutated.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// Domestic mobile numbers: 11 digits, leading 1.
static CN_MOBILE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^1\d{10}$").unwrap());

/// The compiled email pattern shared by [`Email`] and the rule engine.
pub(crate) fn email_pattern() -> &'static regex::Regex {
    &EMAIL_REGEX
}

/// The compiled mobile-number pattern shared by [`CnMobile`] and the rule engine.
pub(crate) fn cn_mobile_pattern() -> &'static regex::Regex {
    &CN_MOBILE_REGEX
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email address syntax.
    ///
    /// Uses an HTML5-style pattern: permissive local part, label-length
    /// limits on the domain.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// MOBILE NUMBER VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates a fixed-length domestic mobile number: 11 digits starting
    /// with `1`.
    pub CnMobile { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("mobile") }
    new() {
        Self {
            pattern: CN_MOBILE_REGEX.clone(),
        }
    }
    fn mobile_cn();
}

// ============================================================================
// TESTS
// ============================================================================
