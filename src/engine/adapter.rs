//! The combinator-library adapter backend.
//!
//! Instead of interpreting rule tokens itself, this backend compiles each
//! field's tokens into a chain of combinator-library validators
//! ([`Email`](crate::validators::Email), [`MinLength`](crate::validators::MinLength),
//! …) and then only reshapes that chain's outcome into the shared
//! [`ValidationResponse`] contract. The verdict and the error message come
//! from the library, never from re-derived rule logic; this is what keeps
//! the backend swappable behind [`ValidationEngine`].

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::combinators::{AndAll, and_all, with_message};
use crate::engine::response::{FieldError, ValidationResponse};
use crate::engine::{CustomMessages, Record, RuleSpec, ValidationEngine};
use crate::foundation::{Validate, ValidationError};
use crate::rules::value::{NULL_VALUE, json_type};
use crate::rules::{RuleToken, is_empty, text};
use crate::validators::{email, max_length, min_length, mobile_cn};

// ============================================================================
// VALUE-LEVEL STAGES
// ============================================================================

// Presence check over the raw value, ahead of any text predicate.
crate::validator! {
    RequiredValue for Value;
    rule(input) { !is_empty(input) }
    error(input) { ValidationError::required() }
}

crate::validator! {
    /// Fails unconditionally; compiled from a token whose grammar is invalid.
    MalformedRule { token: String } for str;
    rule(self, input) { false }
    error(self, input) {
        ValidationError::new(
            "malformed_rule",
            format!("Rule token `{}` is not valid", self.token),
        )
    }
}

/// Runs a chain of `str` validators against a value's text form.
struct TextRules {
    chain: AndAll<Box<dyn Validate<Input = str>>>,
}

impl Validate for TextRules {
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match text(input) {
            Some(t) => self.chain.validate(t.as_ref()),
            None => Err(ValidationError::type_mismatch("string", json_type(input))),
        }
    }
}

// ============================================================================
// COMBINATOR ENGINE
// ============================================================================

/// Backend that delegates evaluation to the combinator library.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinatorEngine;

impl CombinatorEngine {
    // One boxed library validator per text predicate the tokens name.
    fn text_steps(tokens: &[RuleToken]) -> Vec<Box<dyn Validate<Input = str>>> {
        let mut steps: Vec<Box<dyn Validate<Input = str>>> = Vec::new();
        for token in tokens {
            match token {
                RuleToken::Email => steps.push(Box::new(email())),
                RuleToken::Mobile => steps.push(Box::new(mobile_cn())),
                RuleToken::Length { min, max, bound } => {
                    if *min {
                        steps.push(Box::new(min_length(*bound)));
                    }
                    if *max {
                        steps.push(Box::new(max_length(*bound)));
                    }
                }
                RuleToken::Malformed(raw) => {
                    steps.push(Box::new(MalformedRule::new(raw.clone())));
                }
                // Presence is a value-level stage; unknown tokens have no
                // library counterpart and no opinion.
                RuleToken::Required | RuleToken::Other(_) => {}
            }
        }
        steps
    }

    fn compile(tokens: &[RuleToken]) -> AndAll<Box<dyn Validate<Input = Value>>> {
        let required = tokens.iter().any(RuleToken::is_required);
        let text_steps = Self::text_steps(tokens);

        let mut stages: Vec<Box<dyn Validate<Input = Value>>> = Vec::new();
        if required {
            stages.push(Box::new(RequiredValue));
        }
        if !text_steps.is_empty() {
            stages.push(Box::new(TextRules {
                chain: and_all(text_steps),
            }));
        }
        and_all(stages)
    }

    fn field_outcome(
        tokens: &[RuleToken],
        value: &Value,
        custom: Option<&String>,
    ) -> Result<(), ValidationError> {
        let required = tokens.iter().any(RuleToken::is_required);
        if is_empty(value) && !required {
            return Ok(());
        }

        let chain = Self::compile(tokens);
        match custom {
            Some(message) => with_message(chain, message.clone()).validate(value),
            None => chain.validate(value),
        }
    }
}

impl ValidationEngine for CombinatorEngine {
    fn validate(
        &self,
        record: &Record,
        spec: &RuleSpec,
        messages: Option<&CustomMessages>,
    ) -> ValidationResponse {
        let mut errors = IndexMap::new();

        for (field, rule_set) in spec {
            let value = record.get(field).unwrap_or(&NULL_VALUE);
            let custom = messages.and_then(|m| m.get(field));
            let outcome = Self::field_outcome(&rule_set.tokens(), value, custom);
            trace!(field = %field, passed = outcome.is_ok(), "field evaluated");

            if let Err(err) = outcome {
                errors.insert(
                    field.clone(),
                    FieldError {
                        rule: rule_set.clone(),
                        message: Some(err.message.into_owned()),
                    },
                );
            }
        }

        ValidationResponse::from_errors(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
