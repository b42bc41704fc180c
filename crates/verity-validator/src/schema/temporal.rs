//! Date and time chain views.

use chrono::NaiveDateTime;
use verity_value::Value;

use crate::rules::RuleSpec;
use crate::schema::{SchemaLike, schema_view};

schema_view! {
    /// Chain view after `date(format)`. Bound rules compare textual values
    /// through the chain's declared calendar format.
    DateSchema
}

schema_view! {
    /// Chain view after `time(format)`.
    TimeSchema
}

impl DateSchema {
    /// Inclusive earliest accepted instant.
    #[must_use]
    pub fn min(self, limit: NaiveDateTime) -> Self {
        self.append(RuleSpec::Min {
            limit: Value::Date(limit),
        })
    }

    /// Inclusive latest accepted instant.
    #[must_use]
    pub fn max(self, limit: NaiveDateTime) -> Self {
        self.append(RuleSpec::Max {
            limit: Value::Date(limit),
        })
    }
}
