//! Validation executor.
//!
//! Interprets one rule descriptor sequence against one concrete value,
//! producing a [`TestReport`]. One pass per terminal call; object and array
//! rules recurse through nested passes whose records are merged (not
//! nested) into the parent report.

pub mod checks;

use std::time::Instant;

use im::Vector;
use indexmap::IndexMap;
use tracing::{debug, trace};
use verity_value::{Value, display};

use crate::messages::{default_template, render};
use crate::rules::{DateFormat, Rule, RuleSpec};
use crate::schema::SchemaConfig;
use crate::types::{ErrorCategory, ErrorRecord, SuccessRecord, TestReport};

/// Runs one validation pass.
///
/// The state machine, in order: default substitution, name resolution,
/// optionality gate (`notRequired` / implicit `required` / `nullable`),
/// then per-rule dispatch in declaration order with array/object recursion.
/// A failing `required` gate does not short-circuit: the remaining rules
/// still run against the absent value and accumulate their own failures.
#[must_use]
pub fn run(config: &SchemaConfig, rules: &Vector<Rule>, value: Value, name: &str) -> TestReport {
    let started = Instant::now();
    let mut report = TestReport::new();

    // Alias wins over the caller-supplied label for every record.
    let target = rules
        .iter()
        .find_map(|r| match &r.spec {
            RuleSpec::Alias { name } => Some(name.as_str()),
            _ => None,
        })
        .unwrap_or(name);

    // Default substitution happens before the gate, so a defaulted value
    // satisfies `required` and flows through the type rules; see DESIGN.md.
    let mut value = value;
    if value.is_absent() {
        if let Some(default) = rules.iter().find_map(|r| match &r.spec {
            RuleSpec::DefaultTo { value } => Some(value.clone()),
            _ => None,
        }) {
            value = default;
        }
    }
    report.value = value.clone();

    let not_required = rules.iter().any(|r| matches!(r.spec, RuleSpec::NotRequired));
    let nullable = rules.iter().any(|r| matches!(r.spec, RuleSpec::Nullable));

    trace!(name = target, rules = rules.len(), "validation pass");

    // Optionality gate.
    if not_required {
        report.record_success(success(
            "notRequired",
            target,
            "value is not required and of any type",
            &value,
        ));
        if value.is_absent() {
            // Optional object, no value: fields are still validated once
            // against an empty placeholder so nested `required` errors
            // surface without duplication.
            descend_placeholder(config, rules, &mut report);
            report.finalize(started.elapsed());
            return report;
        }
    } else if value.is_present() {
        report.record_success(success(
            "required",
            target,
            "value other than undefined",
            &value,
        ));
    } else {
        let template = config
            .required_message
            .as_deref()
            .unwrap_or_else(|| default_template("required"));
        report.record_error(failure(
            "required",
            ErrorCategory::MissingValue,
            target,
            "value other than undefined",
            &value,
            render(template, &base_params(target, &value)),
        ));
        // Intentionally no return: subsequent type rules still evaluate.
    }

    if nullable && value.is_null() {
        report.record_success(success(
            "nullable",
            target,
            "the value can be null, but cannot be undefined",
            &value,
        ));
        descend_placeholder(config, rules, &mut report);
        report.finalize(started.elapsed());
        return report;
    }

    let date_format = rules.iter().find_map(|r| match r.spec {
        RuleSpec::Date { format } => Some(format),
        _ => None,
    });

    // Per-rule dispatch, declaration order.
    for rule in rules {
        if !rule.spec.is_modifier() {
            trace!(method = rule.method(), "dispatch");
        }
        match &rule.spec {
            spec if spec.is_modifier() => {}
            RuleSpec::Array { item } => {
                dispatch_array(config, rule, item, &value, target, &mut report);
            }
            RuleSpec::Object { fields } => {
                dispatch_object(config, rule, fields, &value, target, &mut report);
            }
            spec => {
                let outcome = checks::evaluate(spec, &value, date_format);
                record_outcome(rule, outcome, target, &value, None, &mut report);
            }
        }
    }

    report.finalize(started.elapsed());
    debug!(
        name = target,
        passed = report.passed,
        failed = report.failed,
        "validation pass finished"
    );
    report
}

/// Element-wise recursion for the `array` rule. The item rule set runs in
/// full against every element; every record it emits is tagged with the
/// element index (inner indices from nested arrays are kept).
fn dispatch_array(
    config: &SchemaConfig,
    rule: &Rule,
    item: &Vector<Rule>,
    value: &Value,
    target: &str,
    report: &mut TestReport,
) {
    let Some(items) = value.as_array() else {
        let message = message_for(rule, &base_params(target, value));
        report.record_error(failure(
            "array",
            ErrorCategory::InvalidValue,
            target,
            "array type",
            value,
            message,
        ));
        return;
    };
    report.record_success(success("array", target, "array type", value));
    for (index, element) in items.iter().enumerate() {
        let mut nested = run(config, item, element.clone(), target);
        for record in &mut nested.successes {
            record.index.get_or_insert(index);
        }
        for record in &mut nested.errors {
            record.index.get_or_insert(index);
        }
        report.merge(nested);
    }
}

/// Field-wise recursion for the `object` rule. Each declared field runs its
/// own rule sequence against the looked-up field value (absent when the key
/// is missing); the nested records merge into the parent in field order.
fn dispatch_object(
    config: &SchemaConfig,
    rule: &Rule,
    fields: &IndexMap<String, Vector<Rule>>,
    value: &Value,
    target: &str,
    report: &mut TestReport,
) {
    if value.as_object().is_none() {
        let message = message_for(rule, &base_params(target, value));
        report.record_error(failure(
            "object",
            ErrorCategory::InvalidValue,
            target,
            "object type",
            value,
            message,
        ));
        return;
    }
    report.record_success(success("object", target, "object type", value));
    for (field, field_rules) in fields {
        let nested = run(config, field_rules, value.field(field), field);
        report.merge(nested);
    }
}

/// The optional-object special case: the chain stopped at the gate, but an
/// `object` rule still validates its declared fields against an empty
/// mapping, so each nested `required` error appears exactly once.
fn descend_placeholder(config: &SchemaConfig, rules: &Vector<Rule>, report: &mut TestReport) {
    let placeholder = Value::object_empty();
    for rule in rules {
        if let RuleSpec::Object { fields } = &rule.spec {
            for (field, field_rules) in fields {
                let nested = run(config, field_rules, placeholder.field(field), field);
                report.merge(nested);
            }
        }
    }
}

fn record_outcome(
    rule: &Rule,
    outcome: checks::Outcome,
    target: &str,
    value: &Value,
    index: Option<usize>,
    report: &mut TestReport,
) {
    let method = rule.method();
    if outcome.passed {
        report.record_success(SuccessRecord {
            method: method.to_string(),
            name: target.to_string(),
            expect: outcome.expect,
            received: value.clone(),
            index,
        });
    } else {
        let mut params = base_params(target, value);
        params.extend(outcome.params);
        let message = message_for(rule, &params);
        report.record_error(ErrorRecord {
            method: method.to_string(),
            category: outcome.category,
            name: target.to_string(),
            expect: outcome.expect,
            received: value.clone(),
            index,
            message,
        });
    }
}

fn message_for(rule: &Rule, params: &[(&str, String)]) -> String {
    let template = rule
        .message
        .as_deref()
        .unwrap_or_else(|| default_template(rule.method()));
    render(template, params)
}

fn base_params(target: &str, value: &Value) -> Vec<(&'static str, String)> {
    vec![
        ("valueName", target.to_string()),
        ("value", display(value)),
    ]
}

fn success(method: &str, target: &str, expect: &str, value: &Value) -> SuccessRecord {
    SuccessRecord {
        method: method.to_string(),
        name: target.to_string(),
        expect: expect.to_string(),
        received: value.clone(),
        index: None,
    }
}

fn failure(
    method: &str,
    category: ErrorCategory,
    target: &str,
    expect: &str,
    value: &Value,
    message: String,
) -> ErrorRecord {
    ErrorRecord {
        method: method.to_string(),
        category,
        name: target.to_string(),
        expect: expect.to_string(),
        received: value.clone(),
        index: None,
        message,
    }
}
