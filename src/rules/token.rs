//! The rule-string grammar.
//!
//! A rule string is a pipe-delimited sequence of atomic rule tokens, e.g.
//! `"required|min-length[3]|max-length[20]"`. Each token is parsed exactly
//! once into a [`RuleToken`] variant; evaluation then dispatches through a
//! single `match` instead of chaining self-guarding predicates.

// ============================================================================
// RULE TOKEN
// ============================================================================

/// One atomic constraint, parsed from its textual token form.
///
/// Tokens are AND-combined within a rule string. Parsing never fails at the
/// call level: a length token that violates the bracket grammar becomes
/// [`RuleToken::Malformed`], which fails evaluation for its field, and an
/// unrecognized name becomes [`RuleToken::Other`], which expresses no
/// opinion (passes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleToken {
    /// `required` — the value must not be empty.
    Required,
    /// `email` — the value must be a syntactically valid email address.
    Email,
    /// `mobile` — the value must be an 11-digit mobile number starting with `1`.
    Mobile,
    /// Any token whose name contains `length`, e.g. `min-length[3]`.
    ///
    /// The bracketed bound is mandatory; `min`/`max` in the name select the
    /// comparison. A name with neither qualifier degenerates to the grammar
    /// check alone.
    Length {
        /// Fail when the measured length is below the bound.
        min: bool,
        /// Fail when the measured length is above the bound.
        max: bool,
        /// The bracketed integer bound.
        bound: usize,
    },
    /// A recognized-shape token this engine has no predicate for; passes.
    Other(String),
    /// A length token whose bracket grammar is invalid; always fails.
    Malformed(String),
}

impl RuleToken {
    /// Parses a single rule token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rulecheck::rules::RuleToken;
    ///
    /// assert_eq!(RuleToken::parse("required"), RuleToken::Required);
    /// assert_eq!(
    ///     RuleToken::parse("min-length[3]"),
    ///     RuleToken::Length { min: true, max: false, bound: 3 },
    /// );
    /// assert_eq!(
    ///     RuleToken::parse("min-length"),
    ///     RuleToken::Malformed("min-length".to_string()),
    /// );
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "required" => RuleToken::Required,
            "email" => RuleToken::Email,
            "mobile" => RuleToken::Mobile,
            _ if raw.contains("length") => Self::parse_length(raw),
            _ => RuleToken::Other(raw.to_string()),
        }
    }

    // Grammar: `<name>[<digits>]` — a non-empty bare name, an opening
    // bracket, one or more digits, a closing bracket ending the token.
    fn parse_length(raw: &str) -> Self {
        let malformed = || RuleToken::Malformed(raw.to_string());

        let Some(open) = raw.find('[') else {
            return malformed();
        };
        if open == 0 {
            return malformed();
        }
        let Some(bound_text) = raw[open + 1..].strip_suffix(']') else {
            return malformed();
        };
        if bound_text.is_empty() || !bound_text.bytes().all(|b| b.is_ascii_digit()) {
            return malformed();
        }
        let Ok(bound) = bound_text.parse::<usize>() else {
            // All-digit but overflows usize.
            return malformed();
        };

        let name = &raw[..open];
        RuleToken::Length {
            min: name.contains("min"),
            max: name.contains("max"),
            bound,
        }
    }

    /// Returns true for the `required` token.
    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, RuleToken::Required)
    }
}

/// Parses a full pipe-delimited rule string into its ordered token sequence.
#[must_use]
pub fn parse_rule_string(rule: &str) -> Vec<RuleToken> {
    rule.split('|').map(RuleToken::parse).collect()
}

// ============================================================================
// TESTS
// ============================================================================
