//! Numeric chain views.

use verity_value::Value;

use crate::rules::RuleSpec;
use crate::schema::{SchemaLike, schema_view};

schema_view! {
    /// Chain view after `number()`.
    NumberSchema
}

schema_view! {
    /// Chain view after `big_int()`.
    BigIntSchema
}

fn numeric_limit(method: &str, limit: Value) -> Value {
    assert!(
        matches!(limit, Value::Int(_) | Value::Float(_) | Value::BigInt(_)),
        "{method} expects a numeric reference"
    );
    limit
}

impl NumberSchema {
    /// The number must carry a fractional part.
    #[must_use]
    pub fn float(self) -> Self {
        self.append(RuleSpec::Float)
    }

    /// The number must be integer-valued.
    #[must_use]
    pub fn integer(self) -> Self {
        self.append(RuleSpec::Integer)
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn min(self, limit: impl Into<Value>) -> Self {
        self.append(RuleSpec::Min {
            limit: numeric_limit("min", limit.into()),
        })
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn max(self, limit: impl Into<Value>) -> Self {
        self.append(RuleSpec::Max {
            limit: numeric_limit("max", limit.into()),
        })
    }

    /// Strictly greater than zero.
    #[must_use]
    pub fn positive(self) -> Self {
        self.append(RuleSpec::Positive)
    }

    /// Strictly less than zero.
    #[must_use]
    pub fn negative(self) -> Self {
        self.append(RuleSpec::Negative)
    }
}

impl BigIntSchema {
    /// Inclusive lower bound.
    #[must_use]
    pub fn min(self, limit: i128) -> Self {
        self.append(RuleSpec::Min {
            limit: Value::BigInt(limit),
        })
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn max(self, limit: i128) -> Self {
        self.append(RuleSpec::Max {
            limit: Value::BigInt(limit),
        })
    }

    /// Strictly greater than zero.
    #[must_use]
    pub fn positive(self) -> Self {
        self.append(RuleSpec::Positive)
    }

    /// Strictly less than zero.
    #[must_use]
    pub fn negative(self) -> Self {
        self.append(RuleSpec::Negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn number_rules_append_in_call_order() {
        let chain = schema().number().integer().min(1).max(10);
        let methods: Vec<_> = chain.inner.rules.iter().map(|r| r.method()).collect();
        assert_eq!(methods, ["number", "integer", "min", "max"]);
    }

    #[test]
    #[should_panic(expected = "min expects a numeric reference")]
    fn non_numeric_bound_panics() {
        let _ = schema().number().min("5");
    }

    #[test]
    #[should_panic(expected = "positive method has already been called!")]
    fn duplicate_sign_rule_panics() {
        let _ = schema().big_int().positive().positive();
    }
}
