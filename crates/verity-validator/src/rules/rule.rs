//! Rule descriptor model.
//!
//! One [`RuleSpec`] case per validation method, each carrying only the
//! configuration that method needs. A [`Rule`] pairs the spec with an
//! optional caller-supplied message template that fully replaces the
//! catalog default when present.

use std::fmt::{self, Debug};
use std::sync::Arc;

use im::Vector;
use indexmap::IndexMap;
use regex::Regex;
use verity_value::Value;

use super::formats::{DateFormat, TimeFormat, UuidVersion};

/// A caller-supplied predicate for the `custom` rule.
///
/// Returns `Ok(true)` to pass, `Ok(false)` to fail with the rule's message,
/// `Err(reason)` for an internal predicate error, which the executor
/// downgrades to a single `invalid param` failure record.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> Result<bool, String> + Send + Sync>);

impl Predicate {
    /// Wraps a closure as a custom predicate.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, String> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the predicate.
    #[must_use]
    pub fn call(&self, value: &Value) -> Result<bool, String> {
        (self.0)(value)
    }
}

impl Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// One validation method instance, as a tagged variant.
#[derive(Debug, Clone)]
pub enum RuleSpec {
    /// The value may be absent; when it is, evaluation stops after one
    /// success record.
    NotRequired,
    /// Explicit null satisfies all remaining type rules.
    Nullable,
    /// Overrides the declared value name in every subsequent record.
    Alias { name: String },
    /// Substituted for the value when the value is absent.
    DefaultTo { value: Value },
    /// Must be UTF-8 text.
    Text,
    /// Must be a number (integer or float).
    Number,
    /// Must be a number with a fractional part.
    Float,
    /// Must be an integer-valued number.
    Integer,
    /// Must be a boolean.
    Boolean,
    /// Must be a wide integer.
    BigInt,
    /// Must be a binary buffer.
    Buffer,
    /// Must be a date (or text parseable in the given calendar format).
    Date { format: DateFormat },
    /// Must be a time (or text parseable in the given clock format).
    Time { format: TimeFormat },
    /// Text length lower bound, in Unicode scalar values.
    MinLength { min: usize },
    /// Text length upper bound, in Unicode scalar values.
    MaxLength { max: usize },
    /// Minimum number of whitespace-separated words.
    MinWord { min: usize },
    /// Numeric or date lower bound (inclusive).
    Min { limit: Value },
    /// Numeric or date upper bound (inclusive).
    Max { limit: Value },
    /// Must be strictly greater than zero.
    Positive,
    /// Must be strictly less than zero.
    Negative,
    /// Must deep-equal the reference.
    Equal { to: Value },
    /// Must not deep-equal the reference.
    NotEqual { to: Value },
    /// Must deep-equal one of the candidates.
    OneOf { candidates: Vec<Value> },
    /// Must deep-equal none of the candidates.
    NotOneOf { candidates: Vec<Value> },
    /// Text must match the pattern.
    Pattern { regex: Regex },
    /// Text must be a well-formed email address.
    Email,
    /// Text must be a well-formed UUID, optionally of a pinned version.
    Uuid { version: Option<UuidVersion> },
    /// Caller-supplied predicate.
    Custom { predicate: Predicate },
    /// Sequence whose every element is validated against the item rules.
    Array { item: Vector<Rule> },
    /// Mapping whose declared fields each carry their own rule sequence.
    Object { fields: IndexMap<String, Vector<Rule>> },
}

impl RuleSpec {
    /// The method name as it appears in report records. These strings are
    /// part of the stable report contract.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::NotRequired => "notRequired",
            Self::Nullable => "nullable",
            Self::Alias { .. } => "alias",
            Self::DefaultTo { .. } => "default",
            Self::Text => "string",
            Self::Number => "number",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::BigInt => "bigInt",
            Self::Buffer => "buffer",
            Self::Date { .. } => "date",
            Self::Time { .. } => "time",
            Self::MinLength { .. } => "minLength",
            Self::MaxLength { .. } => "maxLength",
            Self::MinWord { .. } => "minWord",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Equal { .. } => "equal",
            Self::NotEqual { .. } => "notEqual",
            Self::OneOf { .. } => "oneOf",
            Self::NotOneOf { .. } => "notOneOf",
            Self::Pattern { .. } => "regex",
            Self::Email => "email",
            Self::Uuid { .. } => "uuid",
            Self::Custom { .. } => "custom",
            Self::Array { .. } => "array",
            Self::Object { .. } => "object",
        }
    }

    /// Whether a second instance of this rule in one chain is a builder
    /// misuse. Only `custom` may appear more than once.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    /// Rules consumed by the executor's gate/name-resolution phases rather
    /// than dispatched as checks.
    #[must_use]
    pub const fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::NotRequired | Self::Nullable | Self::Alias { .. } | Self::DefaultTo { .. }
        )
    }
}

/// A rule descriptor: the method spec plus an optional caller message.
#[derive(Debug, Clone)]
pub struct Rule {
    /// What to check and with which configuration.
    pub spec: RuleSpec,
    /// Caller-supplied message template; replaces the catalog default.
    pub message: Option<String>,
}

impl Rule {
    /// Wraps a spec with no custom message.
    #[must_use]
    pub const fn new(spec: RuleSpec) -> Self {
        Self {
            spec,
            message: None,
        }
    }

    /// The method name of the underlying spec.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        self.spec.method()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_are_the_wire_contract() {
        assert_eq!(RuleSpec::NotRequired.method(), "notRequired");
        assert_eq!(RuleSpec::MinLength { min: 1 }.method(), "minLength");
        assert_eq!(RuleSpec::BigInt.method(), "bigInt");
        assert_eq!(
            RuleSpec::Pattern {
                regex: Regex::new("a").unwrap()
            }
            .method(),
            "regex"
        );
    }

    #[test]
    fn only_custom_repeats() {
        let custom = RuleSpec::Custom {
            predicate: Predicate::new(|_| Ok(true)),
        };
        assert!(!custom.is_singleton());
        assert!(RuleSpec::Text.is_singleton());
    }

    #[test]
    fn modifiers_are_gate_rules() {
        assert!(RuleSpec::NotRequired.is_modifier());
        assert!(
            RuleSpec::Alias {
                name: "x".to_string()
            }
            .is_modifier()
        );
        assert!(!RuleSpec::Text.is_modifier());
    }
}
