//! Value kind discriminant.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Value`](crate::Value), without the payload.
///
/// Used by validators to report what shape a value actually had when a
/// type rule fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    /// No value was supplied at all.
    Absent,
    /// Explicit null.
    Null,
    /// Boolean.
    Boolean,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Wide integer (the `bigInt` rule's domain).
    BigInt,
    /// UTF-8 text.
    Text,
    /// Binary buffer.
    Bytes,
    /// Calendar date with time-of-day.
    Date,
    /// Time-of-day without a date.
    Time,
    /// Ordered sequence of values.
    Array,
    /// Keyed mapping, insertion-ordered.
    Object,
}

impl ValueKind {
    /// Human-readable name, as used in report messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int | Self::Float => "number",
            Self::BigInt => "bigint",
            Self::Text => "string",
            Self::Bytes => "buffer",
            Self::Date => "date",
            Self::Time => "time",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
