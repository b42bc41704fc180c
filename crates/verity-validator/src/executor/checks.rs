//! Per-rule validators.
//!
//! One pure function per rule kind, folded into [`evaluate`]. Each check
//! decides pass/fail on its own and reports the expectation description and
//! message parameters; the executor turns the outcome into exactly one
//! report record.

use std::cmp::Ordering;
use std::panic::{AssertUnwindSafe, catch_unwind};

use verity_value::{Value, deep_equal, display};

use crate::rules::{DateFormat, RuleSpec};
use crate::types::ErrorCategory;

/// Result of evaluating one rule against one value.
#[derive(Debug)]
pub struct Outcome {
    /// Did the check pass.
    pub passed: bool,
    /// Human-readable expectation description.
    pub expect: String,
    /// Category on failure.
    pub category: ErrorCategory,
    /// Rule-specific message parameters (besides `valueName`/`value`).
    pub params: Vec<(&'static str, String)>,
}

impl Outcome {
    fn pass(expect: impl Into<String>) -> Self {
        Self {
            passed: true,
            expect: expect.into(),
            category: ErrorCategory::InvalidValue,
            params: Vec::new(),
        }
    }

    fn fail(expect: impl Into<String>) -> Self {
        Self {
            passed: false,
            expect: expect.into(),
            category: ErrorCategory::InvalidValue,
            params: Vec::new(),
        }
    }

    fn verdict(passed: bool, expect: impl Into<String>) -> Self {
        if passed { Self::pass(expect) } else { Self::fail(expect) }
    }

    fn with_param(mut self, key: &'static str, value: String) -> Self {
        self.params.push((key, value));
        self
    }

    fn with_category(mut self, category: ErrorCategory) -> Self {
        self.category = category;
        self
    }
}

/// Evaluates one non-modifier, non-recursive rule.
///
/// `date_format` is the chain's `date` rule format, if any; it lets the
/// bound rules (`min`/`max`) compare a textual date value against a date
/// reference without re-declaring the format.
#[must_use]
pub fn evaluate(spec: &RuleSpec, value: &Value, date_format: Option<DateFormat>) -> Outcome {
    match spec {
        RuleSpec::Text => Outcome::verdict(matches!(value, Value::Text(_)), "string type"),
        RuleSpec::Number => Outcome::verdict(value.is_number(), "number type"),
        RuleSpec::Float => Outcome::verdict(
            matches!(value, Value::Float(f) if f.is_finite() && f.fract() != 0.0),
            "float type",
        ),
        RuleSpec::Integer => Outcome::verdict(
            matches!(value, Value::Int(_))
                || matches!(value, Value::Float(f) if f.is_finite() && f.fract() == 0.0),
            "integer type",
        ),
        RuleSpec::Boolean => Outcome::verdict(matches!(value, Value::Boolean(_)), "boolean type"),
        RuleSpec::BigInt => Outcome::verdict(matches!(value, Value::BigInt(_)), "bigint type"),
        RuleSpec::Buffer => Outcome::verdict(matches!(value, Value::Bytes(_)), "buffer type"),
        RuleSpec::Date { format } => {
            let ok = match value {
                Value::Date(_) => true,
                Value::Text(s) => crate::predicates::parse_date(s, *format).is_some(),
                _ => false,
            };
            Outcome::verdict(ok, format!("date in the format {format}"))
                .with_param("format", format.to_string())
        }
        RuleSpec::Time { format } => {
            let ok = match value {
                Value::Time(_) => true,
                Value::Text(s) => crate::predicates::parse_time(s, *format).is_some(),
                _ => false,
            };
            Outcome::verdict(ok, format!("time in the format {format}"))
                .with_param("format", format.to_string())
        }
        RuleSpec::MinLength { min } => {
            let ok = value
                .as_text()
                .is_some_and(|s| s.chars().count() >= *min);
            Outcome::verdict(ok, format!("value with a minimum of {min} characters"))
                .with_param("minLength", min.to_string())
        }
        RuleSpec::MaxLength { max } => {
            let ok = value
                .as_text()
                .is_some_and(|s| s.chars().count() <= *max);
            Outcome::verdict(ok, format!("value with a maximum of {max} characters"))
                .with_param("maxLength", max.to_string())
        }
        RuleSpec::MinWord { min } => {
            let ok = value
                .as_text()
                .is_some_and(|s| crate::predicates::word_count(s) >= *min);
            Outcome::verdict(ok, format!("value with at least {min} words"))
                .with_param("minWord", min.to_string())
        }
        RuleSpec::Min { limit } => {
            let ok = compare(value, limit, date_format)
                .is_some_and(|ord| ord != Ordering::Less);
            Outcome::verdict(ok, format!("value greater than or equal to {}", display(limit)))
                .with_param("min", display(limit))
        }
        RuleSpec::Max { limit } => {
            let ok = compare(value, limit, date_format)
                .is_some_and(|ord| ord != Ordering::Greater);
            Outcome::verdict(ok, format!("value less than or equal to {}", display(limit)))
                .with_param("max", display(limit))
        }
        RuleSpec::Positive => Outcome::verdict(is_sign(value, Ordering::Greater), "positive number"),
        RuleSpec::Negative => Outcome::verdict(is_sign(value, Ordering::Less), "negative number"),
        RuleSpec::Equal { to } => Outcome::verdict(
            deep_equal(value, to),
            format!("value equal to {}", display(to)),
        )
        .with_param("ref", display(to)),
        RuleSpec::NotEqual { to } => Outcome::verdict(
            !deep_equal(value, to),
            format!("value different from {}", display(to)),
        )
        .with_param("ref", display(to)),
        RuleSpec::OneOf { candidates } => {
            let ok = candidates.iter().any(|c| deep_equal(value, c));
            Outcome::verdict(ok, "one of the allowed values")
                .with_param("candidates", display_candidates(candidates))
        }
        RuleSpec::NotOneOf { candidates } => {
            let ok = !candidates.iter().any(|c| deep_equal(value, c));
            Outcome::verdict(ok, "none of the forbidden values")
                .with_param("candidates", display_candidates(candidates))
        }
        RuleSpec::Pattern { regex } => {
            let ok = value.as_text().is_some_and(|s| regex.is_match(s));
            Outcome::verdict(ok, format!("value matching the pattern {}", regex.as_str()))
        }
        RuleSpec::Email => Outcome::verdict(
            value.as_text().is_some_and(crate::predicates::is_email),
            "valid email address",
        ),
        RuleSpec::Uuid { version } => {
            let ok = value
                .as_text()
                .is_some_and(|s| crate::predicates::is_uuid(s, *version));
            Outcome::verdict(ok, "valid UUID")
        }
        RuleSpec::Custom { predicate } => run_custom(predicate, value),
        // Modifiers and the recursive rules are handled by the executor
        // itself; reaching here with one is an engine bug.
        RuleSpec::NotRequired
        | RuleSpec::Nullable
        | RuleSpec::Alias { .. }
        | RuleSpec::DefaultTo { .. }
        | RuleSpec::Array { .. }
        | RuleSpec::Object { .. } => {
            Outcome::fail("internal dispatch").with_category(ErrorCategory::InvalidParam)
        }
    }
}

/// A predicate failure never aborts the pass: `Err` and panics downgrade to
/// one `invalid param` record for this rule only.
fn run_custom(predicate: &crate::rules::Predicate, value: &Value) -> Outcome {
    let expect = "value approved by the custom predicate";
    match catch_unwind(AssertUnwindSafe(|| predicate.call(value))) {
        Ok(Ok(true)) => Outcome::pass(expect),
        Ok(Ok(false)) => Outcome::fail(expect),
        Ok(Err(reason)) => Outcome::fail(expect)
            .with_category(ErrorCategory::InvalidParam)
            .with_param("reason", reason),
        Err(_) => Outcome::fail(expect)
            .with_category(ErrorCategory::InvalidParam)
            .with_param("reason", "predicate panicked".to_string()),
    }
}

fn is_sign(value: &Value, wanted: Ordering) -> bool {
    match value {
        Value::Int(i) => i.cmp(&0) == wanted,
        Value::BigInt(i) => i.cmp(&0) == wanted,
        Value::Float(f) => f.partial_cmp(&0.0) == Some(wanted),
        _ => false,
    }
}

/// Ordering between the value under test and a rule's reference limit.
/// `None` means the two are not comparable, which fails the bound rule.
fn compare(value: &Value, limit: &Value, date_format: Option<DateFormat>) -> Option<Ordering> {
    match (value, limit) {
        (Value::BigInt(a), Value::BigInt(b)) => Some(a.cmp(b)),
        (Value::BigInt(a), Value::Int(b)) => Some(a.cmp(&i128::from(*b))),
        (Value::Int(a), Value::BigInt(b)) => Some(i128::from(*a).cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        // A textual date compares against a date reference through the
        // chain's declared calendar format.
        (Value::Text(s), Value::Date(b)) => {
            let parsed = crate::predicates::parse_date(s, date_format.unwrap_or_default())?;
            Some(parsed.cmp(b))
        }
        _ => {
            let a = value.as_f64()?;
            let b = limit.as_f64()?;
            a.partial_cmp(&b)
        }
    }
}

fn display_candidates(candidates: &[Value]) -> String {
    candidates
        .iter()
        .map(display)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::rules::Predicate;

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn float_rejects_whole_numbers() {
        assert!(evaluate(&RuleSpec::Float, &Value::Float(1.5), None).passed);
        assert!(!evaluate(&RuleSpec::Float, &Value::Float(2.0), None).passed);
        assert!(!evaluate(&RuleSpec::Float, &Value::Int(2), None).passed);
    }

    #[test]
    fn integer_accepts_whole_floats() {
        assert!(evaluate(&RuleSpec::Integer, &Value::Int(2), None).passed);
        assert!(evaluate(&RuleSpec::Integer, &Value::Float(2.0), None).passed);
        assert!(!evaluate(&RuleSpec::Integer, &Value::Float(2.5), None).passed);
    }

    #[test]
    fn length_rules_fail_on_non_text() {
        assert!(!evaluate(&RuleSpec::MinLength { min: 1 }, &Value::Int(5), None).passed);
        assert!(!evaluate(&RuleSpec::MaxLength { max: 9 }, &Value::Absent, None).passed);
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let value = Value::text("héllo");
        assert!(evaluate(&RuleSpec::MinLength { min: 5 }, &value, None).passed);
        assert!(!evaluate(&RuleSpec::MinLength { min: 6 }, &value, None).passed);
    }

    #[test]
    fn bounds_span_numeric_variants() {
        let min = RuleSpec::Min {
            limit: Value::Int(1),
        };
        assert!(evaluate(&min, &Value::Float(1.0), None).passed);
        assert!(evaluate(&min, &Value::BigInt(7), None).passed);
        assert!(!evaluate(&min, &Value::Int(0), None).passed);
        // Incomparable kinds fail the bound.
        assert!(!evaluate(&min, &Value::text("2"), None).passed);
    }

    #[test]
    fn date_bounds_accept_textual_dates() {
        let min = RuleSpec::Min {
            limit: date(2024, 1, 1),
        };
        let textual = Value::text("2024-03-09");
        assert!(evaluate(&min, &textual, Some(DateFormat::Iso8601)).passed);
        let early = Value::text("2023-12-31");
        assert!(!evaluate(&min, &early, Some(DateFormat::Iso8601)).passed);
    }

    #[test]
    fn sign_rules_cover_bigint() {
        assert!(evaluate(&RuleSpec::Positive, &Value::BigInt(4), None).passed);
        assert!(!evaluate(&RuleSpec::Positive, &Value::BigInt(-4), None).passed);
        assert!(evaluate(&RuleSpec::Negative, &Value::BigInt(-4), None).passed);
        assert!(!evaluate(&RuleSpec::Positive, &Value::Int(0), None).passed);
    }

    #[test]
    fn custom_errors_downgrade_to_invalid_param() {
        let err = RuleSpec::Custom {
            predicate: Predicate::new(|_| Err("boom".to_string())),
        };
        let outcome = evaluate(&err, &Value::Int(1), None);
        assert!(!outcome.passed);
        assert_eq!(outcome.category, ErrorCategory::InvalidParam);

        let ok = RuleSpec::Custom {
            predicate: Predicate::new(|v| Ok(v.is_number())),
        };
        assert!(evaluate(&ok, &Value::Int(1), None).passed);
    }

    #[test]
    fn custom_panic_is_contained() {
        let panicky = RuleSpec::Custom {
            predicate: Predicate::new(|_| panic!("boom")),
        };
        let outcome = evaluate(&panicky, &Value::Int(1), None);
        assert!(!outcome.passed);
        assert_eq!(outcome.category, ErrorCategory::InvalidParam);
    }

    #[test]
    fn one_of_uses_deep_equality() {
        let rule = RuleSpec::OneOf {
            candidates: vec![Value::Int(1), Value::text("x")],
        };
        assert!(evaluate(&rule, &Value::Float(1.0), None).passed);
        assert!(!evaluate(&rule, &Value::text("y"), None).passed);
    }
}
