//! Schema builder: the fluent, chainable API that accumulates rule
//! descriptors for one declared value.
//!
//! The rule sequence lives in an [`im::Vector`], a persistent
//! copy-on-append structure: deriving a new builder from an existing one
//! shares the common prefix but can never mutate it, so two branches of a
//! chain are snapshots, not aliases.
//!
//! Builder misuse (appending a singleton rule twice, handing a rule a
//! structurally invalid argument) is a programmer error and panics at the
//! offending call site. It never surfaces inside a test report.

pub mod collection;
pub mod number;
pub mod string;
pub mod temporal;
pub mod terminal;

use im::Vector;
use verity_value::Value;

use crate::rules::{DateFormat, Predicate, Rule, RuleSpec, TimeFormat};

pub use collection::Fields;
pub use terminal::Validatable;

/// Schema-level configuration, threaded to every derived builder and into
/// nested validation passes.
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    /// Custom template for the implicit `required` rule; same
    /// `[placeholder]` syntax as per-rule overrides.
    pub required_message: Option<String>,
}

/// Root builder produced by [`schema()`](crate::schema).
///
/// Type-selector methods (`string`, `number`, …) narrow it to a typed view
/// exposing only the rules legal for that shape; the common modifiers and
/// terminal calls come from [`SchemaLike`] and [`Validatable`].
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) config: SchemaConfig,
    pub(crate) rules: Vector<Rule>,
}

impl Schema {
    pub(crate) fn new(config: SchemaConfig) -> Self {
        Self {
            config,
            rules: Vector::new(),
        }
    }

    /// Appends a rule, enforcing the singleton policy.
    pub(crate) fn push(&mut self, spec: RuleSpec) {
        if spec.is_singleton() && self.rules.iter().any(|r| r.method() == spec.method()) {
            panic!("{} method has already been called!", spec.method());
        }
        self.rules.push_back(Rule::new(spec));
    }

    /// Replaces the custom message of the most recently appended rule.
    pub(crate) fn set_last_message(&mut self, template: String) {
        let Some(index) = self.rules.len().checked_sub(1) else {
            panic!("message() requires a preceding rule");
        };
        let mut last = self.rules[index].clone();
        last.message = Some(template);
        self.rules = self.rules.update(index, last);
    }

    // ==================== Type selectors ====================

    /// The value must be UTF-8 text.
    #[must_use]
    pub fn string(self) -> string::StringSchema {
        self.select(RuleSpec::Text)
    }

    /// The value must be a number.
    #[must_use]
    pub fn number(self) -> number::NumberSchema {
        self.select(RuleSpec::Number)
    }

    /// The value must be a boolean.
    #[must_use]
    pub fn boolean(self) -> BooleanSchema {
        self.select(RuleSpec::Boolean)
    }

    /// The value must be a wide integer.
    #[must_use]
    pub fn big_int(self) -> number::BigIntSchema {
        self.select(RuleSpec::BigInt)
    }

    /// The value must be a binary buffer.
    #[must_use]
    pub fn buffer(self) -> BufferSchema {
        self.select(RuleSpec::Buffer)
    }

    /// The value must be a date in the given calendar format.
    #[must_use]
    pub fn date(self, format: DateFormat) -> temporal::DateSchema {
        self.select(RuleSpec::Date { format })
    }

    /// The value must be a time in the given clock format.
    #[must_use]
    pub fn time(self, format: TimeFormat) -> temporal::TimeSchema {
        self.select(RuleSpec::Time { format })
    }

    /// The value must be a sequence; every element is validated against the
    /// item schema.
    #[must_use]
    pub fn array(self, item: impl SchemaLike) -> collection::ArraySchema {
        let item = item.into_schema().rules;
        self.select(RuleSpec::Array { item })
    }

    /// The value must be a mapping; each declared field carries its own
    /// schema.
    #[must_use]
    pub fn object(self, fields: Fields) -> collection::ObjectSchema {
        self.select(RuleSpec::Object {
            fields: fields.into_entries(),
        })
    }

    fn select<V: SchemaLike>(mut self, spec: RuleSpec) -> V {
        self.push(spec);
        V::wrap(self)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

impl sealed::Sealed for Schema {}

impl SchemaLike for Schema {
    fn schema(&self) -> &Schema {
        self
    }

    fn into_schema(self) -> Schema {
        self
    }

    fn wrap(schema: Schema) -> Self {
        schema
    }
}

/// Common surface of every builder view: the modifiers legal on any chain,
/// plus the append plumbing the typed views delegate to.
///
/// Sealed; the closed set of views is the builder's state machine.
pub trait SchemaLike: sealed::Sealed + Sized + Clone {
    /// Borrow the underlying schema state.
    #[doc(hidden)]
    fn schema(&self) -> &Schema;

    /// Unwrap into the underlying schema state.
    #[doc(hidden)]
    fn into_schema(self) -> Schema;

    /// Rewrap schema state into this view.
    #[doc(hidden)]
    fn wrap(schema: Schema) -> Self;

    #[doc(hidden)]
    fn append(self, spec: RuleSpec) -> Self {
        let mut schema = self.into_schema();
        schema.push(spec);
        Self::wrap(schema)
    }

    // ==================== Common modifiers ====================

    /// The value may be absent; when it is, validation stops after a single
    /// success record.
    #[must_use]
    fn not_required(self) -> Self {
        self.append(RuleSpec::NotRequired)
    }

    /// Explicit null satisfies the remaining type rules.
    #[must_use]
    fn nullable(self) -> Self {
        self.append(RuleSpec::Nullable)
    }

    /// Overrides the declared value name in every report record.
    #[must_use]
    fn alias(self, name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "alias expects a non-empty name");
        self.append(RuleSpec::Alias { name })
    }

    /// Substituted for the value when the value is absent.
    #[must_use]
    fn default_to(self, value: impl Into<Value>) -> Self {
        let value = value.into();
        assert!(
            value.is_present(),
            "default_to expects a concrete default value"
        );
        self.append(RuleSpec::DefaultTo { value })
    }

    /// The value must deep-equal the reference.
    #[must_use]
    fn equal(self, to: impl Into<Value>) -> Self {
        self.append(RuleSpec::Equal { to: to.into() })
    }

    /// The value must not deep-equal the reference.
    #[must_use]
    fn not_equal(self, to: impl Into<Value>) -> Self {
        self.append(RuleSpec::NotEqual { to: to.into() })
    }

    /// The value must deep-equal one of the candidates.
    #[must_use]
    fn one_of<I, V>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        assert!(!candidates.is_empty(), "one_of expects at least one candidate");
        self.append(RuleSpec::OneOf { candidates })
    }

    /// The value must deep-equal none of the candidates.
    #[must_use]
    fn not_one_of<I, V>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let candidates: Vec<Value> = candidates.into_iter().map(Into::into).collect();
        assert!(
            !candidates.is_empty(),
            "not_one_of expects at least one candidate"
        );
        self.append(RuleSpec::NotOneOf { candidates })
    }

    /// Caller-supplied predicate. May appear more than once in a chain; a
    /// predicate error or panic becomes an `invalid param` record for this
    /// rule only.
    #[must_use]
    fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, String> + Send + Sync + 'static,
    {
        self.append(RuleSpec::Custom {
            predicate: Predicate::new(predicate),
        })
    }

    /// Custom message template for the most recently appended rule; fully
    /// replaces the catalog default, same `[placeholder]` syntax.
    #[must_use]
    fn message(self, template: impl Into<String>) -> Self {
        let mut schema = self.into_schema();
        schema.set_last_message(template.into());
        Self::wrap(schema)
    }
}

/// Declares a typed builder view over [`Schema`].
macro_rules! schema_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            pub(crate) inner: $crate::schema::Schema,
        }

        impl $crate::schema::sealed::Sealed for $name {}

        impl $crate::schema::SchemaLike for $name {
            fn schema(&self) -> &$crate::schema::Schema {
                &self.inner
            }

            fn into_schema(self) -> $crate::schema::Schema {
                self.inner
            }

            fn wrap(inner: $crate::schema::Schema) -> Self {
                Self { inner }
            }
        }
    };
}
pub(crate) use schema_view;

schema_view! {
    /// Chain view after `boolean()`; only the common modifiers apply.
    BooleanSchema
}

schema_view! {
    /// Chain view after `buffer()`; only the common modifiers apply.
    BufferSchema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    #[should_panic(expected = "string method has already been called!")]
    fn duplicate_singleton_rule_panics() {
        let _ = schema().string().append(RuleSpec::Text);
    }

    #[test]
    #[should_panic(expected = "notRequired method has already been called!")]
    fn duplicate_modifier_panics() {
        let _ = schema().string().not_required().not_required();
    }

    #[test]
    #[should_panic(expected = "message() requires a preceding rule")]
    fn message_without_rule_panics() {
        let _ = schema().message("[valueName] is bad!");
    }

    #[test]
    #[should_panic(expected = "one_of expects at least one candidate")]
    fn empty_candidate_list_panics() {
        let _ = schema().string().one_of(Vec::<String>::new());
    }

    #[test]
    #[should_panic(expected = "alias expects a non-empty name")]
    fn empty_alias_panics() {
        let _ = schema().string().alias("");
    }

    #[test]
    fn branching_shares_prefix_without_aliasing() {
        let base = schema().number();
        let positive = base.clone().positive();
        let negative = base.clone().negative();

        assert_eq!(base.schema().rules.len(), 1);
        assert_eq!(positive.schema().rules.len(), 2);
        assert_eq!(negative.schema().rules.len(), 2);
        assert_eq!(positive.schema().rules[1].method(), "positive");
        assert_eq!(negative.schema().rules[1].method(), "negative");
    }

    #[test]
    fn custom_rule_may_repeat() {
        let chain = schema()
            .number()
            .custom(|v| Ok(v.is_number()))
            .custom(|_| Ok(true));
        assert_eq!(chain.schema().rules.len(), 3);
    }

    #[test]
    fn message_attaches_to_last_rule() {
        let chain = schema().string().message("[valueName] must be text!");
        let rules = &chain.schema().rules;
        assert_eq!(rules[0].message.as_deref(), Some("[valueName] must be text!"));
    }
}
