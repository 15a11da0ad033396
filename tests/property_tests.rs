//! Property-based tests for rulecheck.

use proptest::prelude::*;
use rulecheck::prelude::*;
use serde_json::{Value, json};

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,20}".prop_map(Value::from),
        prop::collection::vec(any::<i64>(), 0..4).prop_map(Value::from),
    ]
}

fn arb_rule() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("required".to_string()),
        Just("email".to_string()),
        Just("mobile".to_string()),
        (0usize..20).prop_map(|n| format!("min-length[{n}]")),
        (0usize..20).prop_map(|n| format!("max-length[{n}]")),
        Just("custom-thing".to_string()),
        Just("min-length[]".to_string()),
    ];
    prop::collection::vec(token, 1..4).prop_map(|tokens| tokens.join("|"))
}

// ============================================================================
// RESPONSE INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn response_invariants_hold(
        rule in arb_rule(),
        value in arb_value(),
    ) {
        let record = Record::from([("f".to_string(), value)]);
        let spec = RuleSpec::from([("f".to_string(), RuleSet::from(rule))]);
        let response = validate(&record, &spec);

        prop_assert_eq!(response.error_count(), response.errors().len());
        prop_assert_eq!(response.is_pass(), response.error_count() == 0);
    }

    #[test]
    fn validation_is_idempotent(rule in arb_rule(), value in arb_value()) {
        let record = Record::from([("f".to_string(), value)]);
        let spec = RuleSpec::from([("f".to_string(), RuleSet::from(rule))]);

        let first = validate(&record, &spec);
        let second = validate(&record, &spec);
        prop_assert_eq!(first.is_pass(), second.is_pass());
        prop_assert_eq!(first.error_count(), second.error_count());
    }

    #[test]
    fn backends_agree(rule in arb_rule(), value in arb_value()) {
        let record = Record::from([("f".to_string(), value)]);
        let spec = RuleSpec::from([("f".to_string(), RuleSet::from(rule))]);

        let native = RuleEngine.validate(&record, &spec, None);
        let adapter = CombinatorEngine.validate(&record, &spec, None);
        prop_assert_eq!(native.is_pass(), adapter.is_pass());
        prop_assert_eq!(native.error_count(), adapter.error_count());
    }

    #[test]
    fn error_count_bounded_by_spec_size(
        values in prop::collection::vec(arb_value(), 0..6),
        rules in prop::collection::vec(arb_rule(), 0..6),
    ) {
        let record: Record = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (format!("f{i}"), v))
            .collect();
        let spec: RuleSpec = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (format!("f{i}"), RuleSet::from(r.as_str())))
            .collect();

        let response = validate(&record, &spec);
        prop_assert!(response.error_count() <= spec.len());
        for field in response.errors().keys() {
            prop_assert!(spec.contains_key(field));
        }
    }
}

// ============================================================================
// GRAMMAR PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn arbitrary_rule_strings_never_panic(rule in ".{0,40}", value in arb_value()) {
        let record = Record::from([("f".to_string(), value.clone())]);
        let spec = RuleSpec::from([("f".to_string(), RuleSet::from(rule.as_str()))]);
        let _ = validate(&record, &spec);
        let _ = validate_single(&rule, &value);
    }

    #[test]
    fn unknown_single_tokens_pass_on_nonempty_values(token in "[a-z]{1,12}") {
        prop_assume!(!matches!(token.as_str(), "required" | "email" | "mobile"));
        prop_assume!(!token.contains("length"));
        prop_assert!(validate_single(&token, &json!("value")));
    }

    #[test]
    fn optional_rules_pass_empty_values(rule in arb_rule()) {
        prop_assume!(!rule.split('|').any(|t| t == "required"));
        prop_assert!(validate_single(&rule, &Value::Null));
        prop_assert!(validate_single(&rule, &json!("")));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = min_length(3).and(max_length(10));

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,30}") {
        let a = email();
        let b = max_length(5);
        let combined = email().or(max_length(5));

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn not_inverts(s in ".{0,30}") {
        let v = not_empty();
        let inverted = not_empty().not();
        prop_assert_eq!(inverted.validate(&*s).is_ok(), v.validate(&*s).is_err());
    }
}
