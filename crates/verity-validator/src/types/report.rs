//! Test report aggregation.
//!
//! One report per terminal call; nested object/array validation merges its
//! records into the parent rather than nesting sub-reports. Field names in
//! the serialized form are the stable contract middleware consumes
//! (`passedAll`, `totalTests`, …).

use std::time::Duration;

use serde::{Serialize, Serializer};
use verity_value::Value;

/// Why a rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCategory {
    /// A required value was absent.
    #[serde(rename = "missing value")]
    MissingValue,
    /// The value is present but fails a type/format/range/comparison check.
    #[serde(rename = "invalid value")]
    InvalidValue,
    /// A rule configuration turned out unusable at validation time
    /// (e.g. a custom predicate raised internally).
    #[serde(rename = "invalid param")]
    InvalidParam,
}

/// Outcome record for one passed rule.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessRecord {
    /// Method name, e.g. `minLength`.
    pub method: String,
    /// Effective target name (caller-supplied or alias).
    pub name: String,
    /// Human-readable description of what was expected.
    pub expect: String,
    /// The value the rule saw.
    pub received: Value,
    /// Element index when this record came from array recursion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Outcome record for one failed rule.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    /// Method name, e.g. `minLength`.
    pub method: String,
    /// Error category.
    #[serde(rename = "type")]
    pub category: ErrorCategory,
    /// Effective target name (caller-supplied or alias).
    pub name: String,
    /// Human-readable description of what was expected.
    pub expect: String,
    /// The value the rule saw.
    pub received: Value,
    /// Element index when this record came from array recursion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Rendered message (catalog template or caller override).
    pub message: String,
}

/// Aggregated result of one terminal validation call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// All attempted checks passed.
    pub passed_all: bool,
    /// Count of passed checks.
    pub passed: usize,
    /// Count of failed checks.
    pub failed: usize,
    /// Total checks attempted; always `passed + failed`.
    pub total_tests: usize,
    /// Per-rule success records, in evaluation order.
    pub successes: Vec<SuccessRecord>,
    /// Per-rule failure records, in evaluation order.
    pub errors: Vec<ErrorRecord>,
    /// Elapsed wall-clock of the terminal call.
    #[serde(serialize_with = "serialize_elapsed")]
    pub time: Duration,
    /// The final value after any coercion (default substitution).
    pub value: Value,
}

impl TestReport {
    /// Fresh report; every terminal call starts here.
    #[must_use]
    pub fn new() -> Self {
        Self {
            passed_all: false,
            passed: 0,
            failed: 0,
            total_tests: 0,
            successes: Vec::new(),
            errors: Vec::new(),
            time: Duration::ZERO,
            value: Value::Absent,
        }
    }

    /// Appends a success record and bumps the counters.
    pub fn record_success(&mut self, record: SuccessRecord) {
        self.successes.push(record);
        self.passed += 1;
        self.total_tests += 1;
    }

    /// Appends a failure record and bumps the counters.
    pub fn record_error(&mut self, record: ErrorRecord) {
        self.errors.push(record);
        self.failed += 1;
        self.total_tests += 1;
    }

    /// Merges a nested (object-field or array-element) report into this one,
    /// preserving the nested evaluation order. The nested report's `value`
    /// and timing are intentionally dropped; only records and counters flow
    /// upward.
    pub fn merge(&mut self, nested: TestReport) {
        self.passed += nested.passed;
        self.failed += nested.failed;
        self.total_tests += nested.total_tests;
        self.successes.extend(nested.successes);
        self.errors.extend(nested.errors);
    }

    /// Stamps `passed_all` and the elapsed time.
    pub fn finalize(&mut self, elapsed: Duration) {
        self.passed_all = self.failed == 0 && self.total_tests > 0;
        self.time = elapsed;
    }

    /// Message of the first failure, if any. This is what `throw` reports.
    #[must_use]
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

impl Default for TestReport {
    fn default() -> Self {
        Self::new()
    }
}

fn serialize_elapsed<S: Serializer>(time: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let secs = time.as_secs();
    let millis = time.subsec_millis();
    serializer.serialize_str(&format!("{secs}s {millis}ms"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn success(method: &str) -> SuccessRecord {
        SuccessRecord {
            method: method.to_string(),
            name: "n".to_string(),
            expect: "x".to_string(),
            received: Value::Int(1),
            index: None,
        }
    }

    fn error(method: &str) -> ErrorRecord {
        ErrorRecord {
            method: method.to_string(),
            category: ErrorCategory::InvalidValue,
            name: "n".to_string(),
            expect: "x".to_string(),
            received: Value::Int(1),
            index: None,
            message: "bad".to_string(),
        }
    }

    #[test]
    fn counters_track_records() {
        let mut report = TestReport::new();
        report.record_success(success("string"));
        report.record_error(error("minLength"));
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total_tests, 2);
        assert_eq!(
            report.total_tests,
            report.successes.len() + report.errors.len()
        );
    }

    #[test]
    fn merge_preserves_order_and_counts() {
        let mut parent = TestReport::new();
        parent.record_success(success("object"));

        let mut nested = TestReport::new();
        nested.record_success(success("required"));
        nested.record_error(error("string"));

        parent.merge(nested);
        assert_eq!(parent.total_tests, 3);
        assert_eq!(parent.successes[1].method, "required");
        assert_eq!(parent.errors[0].method, "string");
    }

    #[test]
    fn finalize_requires_at_least_one_test() {
        let mut empty = TestReport::new();
        empty.finalize(Duration::ZERO);
        assert!(!empty.passed_all);

        let mut one = TestReport::new();
        one.record_success(success("required"));
        one.finalize(Duration::ZERO);
        assert!(one.passed_all);
    }

    #[test]
    fn serialized_shape_uses_wire_names() {
        let mut report = TestReport::new();
        report.record_error(error("minLength"));
        report.finalize(Duration::from_millis(3));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passedAll"], json!(false));
        assert_eq!(json["totalTests"], json!(1));
        assert_eq!(json["time"], json!("0s 3ms"));
        assert_eq!(json["errors"][0]["type"], json!("invalid value"));
    }
}
