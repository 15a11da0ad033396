//! Rule descriptors and the rule-string grammar.
//!
//! A field's constraints arrive as a [`RuleSet`]: either one pipe-delimited
//! rule string or a sequence of them. `RuleSet::tokens` resolves the
//! descriptor into ordered [`RuleToken`]s exactly once per validation pass.

pub mod token;
pub mod value;

pub use token::{RuleToken, parse_rule_string};
pub use value::{is_empty, text};

use serde::{Deserialize, Serialize};

// ============================================================================
// RULE SET
// ============================================================================

/// The rule descriptor attached to one field.
///
/// Serializes untagged, so `"required|email"` and `["required", "email"]`
/// both deserialize naturally. The default descriptor is `"required"`.
///
/// # Examples
///
/// ```rust
/// use rulecheck::rules::{RuleSet, RuleToken};
///
/// let set = RuleSet::from("required|min-length[3]");
/// assert_eq!(set.tokens().len(), 2);
///
/// let many = RuleSet::Many(vec!["required".into(), "email".into()]);
/// assert_eq!(many.tokens(), vec![RuleToken::Required, RuleToken::Email]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSet {
    /// A single pipe-delimited rule string.
    One(String),
    /// A sequence of rule strings, applied in order.
    Many(Vec<String>),
}

impl RuleSet {
    /// Resolves the descriptor into its ordered token sequence.
    #[must_use]
    pub fn tokens(&self) -> Vec<RuleToken> {
        match self {
            RuleSet::One(rule) => parse_rule_string(rule),
            RuleSet::Many(rules) => rules
                .iter()
                .flat_map(|rule| parse_rule_string(rule))
                .collect(),
        }
    }
}

impl Default for RuleSet {
    /// The rule applied when none is declared: `"required"`.
    fn default() -> Self {
        RuleSet::One("required".to_string())
    }
}

impl From<&str> for RuleSet {
    fn from(rule: &str) -> Self {
        RuleSet::One(rule.to_string())
    }
}

impl From<String> for RuleSet {
    fn from(rule: String) -> Self {
        RuleSet::One(rule)
    }
}

impl From<Vec<String>> for RuleSet {
    fn from(rules: Vec<String>) -> Self {
        RuleSet::Many(rules)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_required() {
        assert_eq!(RuleSet::default().tokens(), vec![RuleToken::Required]);
    }

    #[test]
    fn many_flattens_in_order() {
        let set = RuleSet::Many(vec!["required|email".into(), "max-length[30]".into()]);
        assert_eq!(
            set.tokens(),
            vec![
                RuleToken::Required,
                RuleToken::Email,
                RuleToken::Length {
                    min: false,
                    max: true,
                    bound: 30
                },
            ]
        );
    }

    #[test]
    fn serde_untagged_roundtrip() {
        let one: RuleSet = serde_json::from_str(r#""required|email""#).unwrap();
        assert_eq!(one, RuleSet::from("required|email"));

        let many: RuleSet = serde_json::from_str(r#"["required", "email"]"#).unwrap();
        assert_eq!(
            many,
            RuleSet::Many(vec!["required".into(), "email".into()])
        );

        assert_eq!(
            serde_json::to_string(&one).unwrap(),
            r#""required|email""#
        );
    }
}
