//! Benchmarks for rule parsing and the two engine backends.

use criterion::{Criterion, criterion_group, criterion_main};
use rulecheck::prelude::*;
use rulecheck::rules::parse_rule_string;
use serde_json::json;
use std::hint::black_box;

fn fixture() -> (Record, RuleSpec) {
    let record = Record::from([
        ("name".to_string(), json!("alice")),
        ("email".to_string(), json!("alice@example.com")),
        ("phone".to_string(), json!("13812345678")),
        ("bio".to_string(), json!("")),
        ("age".to_string(), json!(0)),
    ]);
    let spec = RuleSpec::from([
        (
            "name".to_string(),
            RuleSet::from("required|min-length[3]|max-length[20]"),
        ),
        ("email".to_string(), RuleSet::from("required|email")),
        ("phone".to_string(), RuleSet::from("mobile")),
        ("bio".to_string(), RuleSet::from("max-length[200]")),
        ("age".to_string(), RuleSet::from("required")),
    ]);
    (record, spec)
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_rule_string", |b| {
        b.iter(|| parse_rule_string(black_box("required|min-length[3]|max-length[20]|email")));
    });
}

fn bench_validate(c: &mut Criterion) {
    let (record, spec) = fixture();

    c.bench_function("native_engine", |b| {
        b.iter(|| RuleEngine.validate(black_box(&record), black_box(&spec), None));
    });

    c.bench_function("combinator_engine", |b| {
        b.iter(|| CombinatorEngine.validate(black_box(&record), black_box(&spec), None));
    });

    c.bench_function("validate_single", |b| {
        b.iter(|| validate_single(black_box("required|email"), black_box(&json!("a@b.com"))));
    });
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);
