//! Runtime value validation with chainable schemas and replayable reports.
//!
//! A schema is built fluently, one rule per call, and reused freely: the
//! rule sequence is a persistent structure, so deriving a stricter chain
//! from a base chain never mutates the base. Terminal calls run the whole
//! sequence in declaration order and either collapse to a verdict
//! ([`Validatable::validate`]), return a full [`TestReport`]
//! ([`Validatable::test`]), or materialize the first failure as an error
//! ([`Validatable::throw`]).
//!
//! ```
//! use verity_validator::{Fields, SchemaLike, Validatable, schema};
//!
//! let user = schema().object(
//!     Fields::new()
//!         .field("name", schema().string().min_length(1))
//!         .field("age", schema().number().integer().min(0).not_required()),
//! );
//!
//! assert!(user.validate(serde_json::json!({ "name": "Ada", "age": 36 })));
//! assert!(!user.validate(serde_json::json!({ "age": -1 })));
//! ```
//!
//! Reports are serializable with stable camelCase field names, so they can
//! be logged or shipped to a frontend as-is.

pub mod executor;
pub mod messages;
pub mod predicates;
pub mod rules;
pub mod schema;
pub mod types;

pub use rules::{DateFormat, TimeFormat, UuidVersion};
pub use schema::collection::{ArraySchema, ObjectSchema};
pub use schema::number::{BigIntSchema, NumberSchema};
pub use schema::string::StringSchema;
pub use schema::temporal::{DateSchema, TimeSchema};
pub use schema::{
    BooleanSchema, BufferSchema, Fields, Schema, SchemaConfig, SchemaLike, Validatable,
};
pub use types::{ErrorCategory, ErrorRecord, SchemaError, SuccessRecord, TestReport};
pub use verity_value::{Value, ValueKind};

/// Starts a new schema chain with the default configuration.
#[must_use]
pub fn schema() -> Schema {
    Schema::default()
}

/// Starts a new schema chain with explicit configuration.
#[must_use]
pub fn schema_with(config: SchemaConfig) -> Schema {
    Schema::new(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn passing_chain_records_every_rule() {
        let report = schema().number().min(2).max(8).test(4, "n");
        assert!(report.passed_all);
        assert_eq!(report.total_tests, 4);
        assert_eq!(report.failed, 0);
        let methods: Vec<_> = report.successes.iter().map(|s| s.method.as_str()).collect();
        assert_eq!(methods, ["required", "number", "min", "max"]);
    }

    #[test]
    fn failing_rule_keeps_earlier_successes() {
        let report = schema().string().min_length(5).test("abcd", "password");
        assert!(!report.passed_all);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.errors[0].message,
            "password must have a minimum of 5 characters!"
        );
    }

    #[test]
    fn bigint_sign_rule() {
        let report = schema().big_int().positive().test(Value::BigInt(-4), "n");
        assert!(!report.passed_all);
        assert_eq!(report.errors[0].method, "positive");
        assert_eq!(report.errors[0].message, "n must be positive!");
    }

    #[test]
    fn required_failure_does_not_short_circuit() {
        let report = schema().number().test(Value::Absent, "n");
        assert_eq!(report.failed, 2);
        assert_eq!(report.errors[0].method, "required");
        assert_eq!(report.errors[0].category, ErrorCategory::MissingValue);
        assert_eq!(report.errors[1].method, "number");
    }

    #[test]
    fn optional_absent_value_stops_after_one_record() {
        let report = schema().string().not_required().test(Value::Absent, "n");
        assert!(report.passed_all);
        assert_eq!(report.total_tests, 1);
        assert_eq!(report.successes[0].method, "notRequired");
    }

    #[test]
    fn nullable_null_satisfies_the_chain() {
        let report = schema().string().nullable().test(Value::Null, "n");
        assert!(report.passed_all);
        assert_eq!(report.passed, 2);
        assert_eq!(report.successes[1].method, "nullable");
    }

    #[test]
    fn default_substitutes_before_the_gate() {
        let report = schema().number().default_to(5).test(Value::Absent, "n");
        assert!(report.passed_all);
        assert_eq!(report.value, Value::Int(5));
    }

    #[test]
    fn alias_renames_every_record() {
        let report = schema().string().alias("nickname").test(Value::Absent, "x");
        assert_eq!(report.errors[0].name, "nickname");
        assert_eq!(report.errors[0].message, "nickname is required!");
    }

    #[test]
    fn nested_object_failure_carries_the_field_name() {
        let user = schema().object(Fields::new().field("a", schema().string()));
        let report = user.test(serde_json::json!({ "a": 1 }), "user");
        assert!(!report.passed_all);
        assert_eq!(report.total_tests, 4);
        assert_eq!(report.errors[0].name, "a");
        assert_eq!(report.errors[0].method, "string");
    }

    #[test]
    fn array_failure_carries_the_element_index() {
        let chain = schema().array(schema().number());
        let report = chain.test(serde_json::json!([1, "x", 3]), "nums");
        assert_eq!(report.passed, 7);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errors[0].method, "number");
        assert_eq!(report.errors[0].index, Some(1));
        assert_eq!(report.errors[0].name, "nums");
    }

    #[test]
    fn optional_absent_object_still_reports_nested_required_once() {
        let chain = schema()
            .object(Fields::new().field("a", schema().string()))
            .not_required();
        let report = chain.test(Value::Absent, "user");
        assert_eq!(report.successes.len(), 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].name, "a");
        assert_eq!(report.errors[0].method, "required");
    }

    #[test]
    fn custom_predicate_error_becomes_invalid_param() {
        let chain = schema()
            .number()
            .custom(|_| Err("lookup unavailable".to_string()));
        let report = chain.test(1, "n");
        assert_eq!(report.errors[0].category, ErrorCategory::InvalidParam);
        assert_eq!(report.errors[0].method, "custom");
    }

    #[test]
    fn message_override_replaces_the_template() {
        let report = schema()
            .string()
            .min_length(5)
            .message("[valueName] too short: [value]")
            .test("abc", "password");
        assert_eq!(report.errors[0].message, "password too short: abc");
    }

    #[test]
    fn configured_required_message() {
        let config = SchemaConfig {
            required_message: Some("[valueName] is mandatory".to_string()),
        };
        let report = schema_with(config).string().test(Value::Absent, "token");
        assert_eq!(report.errors[0].message, "token is mandatory");
    }

    #[test]
    fn date_chain_renders_the_format_message() {
        let chain = schema().date(DateFormat::DdMmYyyy);
        assert!(chain.validate("09/03/2024"));

        let report = chain.test("2024-03-09", "start");
        assert!(!report.passed_all);
        assert_eq!(report.errors[0].method, "date");
        assert_eq!(
            report.errors[0].message,
            "the date start is not in the format DD/MM/YYYY!"
        );
    }

    #[test]
    fn time_chain_renders_the_format_message() {
        let chain = schema().time(TimeFormat::HhMm);
        assert!(chain.validate("10:30"));

        let report = chain.test("10:30:15", "opens");
        assert!(!report.passed_all);
        assert_eq!(report.errors[0].method, "time");
        assert_eq!(
            report.errors[0].message,
            "the time opens is not in the format HH:MM!"
        );
    }

    #[test]
    fn passes_are_deterministic() {
        let chain = schema().string().min_length(2).email();
        let a = serde_json::to_value(chain.test("x@y.io", "mail")).unwrap();
        let b = serde_json::to_value(chain.test("x@y.io", "mail")).unwrap();
        assert_eq!(a["successes"], b["successes"]);
        assert_eq!(a["errors"], b["errors"]);
        assert_eq!(a["passedAll"], b["passedAll"]);
    }

    #[test]
    fn non_array_records_omit_the_index_key() {
        let report = schema().string().test(1, "n");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["errors"][0].get("index").is_none());
        assert_eq!(json["errors"][0]["type"], "invalid value");
    }
}
