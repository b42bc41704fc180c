//! Unified value enum covering every shape the engine validates.

use bytes::Bytes;
use chrono::{NaiveDateTime, NaiveTime};
use indexmap::IndexMap;

use crate::eq::deep_equal;
use crate::kind::ValueKind;

/// A dynamically shaped value under validation.
///
/// Produced once at the validation boundary (via the `From` impls in
/// [`convert`](crate::convert)) and matched on by every predicate above it.
/// [`Value::Absent`] is the "no value was supplied" sentinel and is distinct
/// from [`Value::Null`]; the optionality gate of the executor treats the two
/// differently.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value supplied.
    #[default]
    Absent,
    /// Explicit null.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Integer number (i64).
    Int(i64),
    /// Floating point number (f64).
    Float(f64),
    /// Wide integer, displayed with a trailing `n` marker.
    BigInt(i128),
    /// UTF-8 text string.
    Text(String),
    /// Binary data.
    Bytes(Bytes),
    /// Date with time-of-day (no timezone).
    Date(NaiveDateTime),
    /// Time-of-day.
    Time(NaiveTime),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Keyed mapping, insertion-ordered.
    Object(IndexMap<String, Value>),
}

impl Value {
    // ==================== Constructors ====================

    /// The absent sentinel.
    #[must_use]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Explicit null.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Text value from anything string-like.
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Binary value from raw bytes.
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    /// Empty object value.
    #[must_use]
    pub fn object_empty() -> Self {
        Self::Object(IndexMap::new())
    }

    // ==================== Inspection ====================

    /// The kind discriminant of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Absent => ValueKind::Absent,
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// True when no value was supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True for explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when a value was supplied (null counts as present).
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// True for either numeric variant.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    // ==================== Accessors ====================

    /// Borrow as text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view over both number variants.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow as a sequence, if this is an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as a mapping, if this is an object value.
    #[must_use]
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Field lookup on an object value; [`Value::Absent`] when the key is
    /// missing or this is not an object.
    #[must_use]
    pub fn field(&self, key: &str) -> Value {
        match self {
            Self::Object(map) => map.get(key).cloned().unwrap_or(Self::Absent),
            _ => Self::Absent,
        }
    }
}

/// Structural equality with the engine's comparison semantics; see
/// [`deep_equal`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}
