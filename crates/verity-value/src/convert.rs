//! Conversions into and out of [`Value`].
//!
//! The `From` impls are what make the validation boundary ergonomic: callers
//! hand over plain Rust values (or whole `serde_json` payloads) and the
//! engine sees one tagged variant. `Option::None` maps to the absent
//! sentinel, never to null.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bytes::Bytes;
use chrono::{NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use thiserror::Error;

use crate::display::display;
use crate::value::Value;

/// A value could not be converted to the requested Rust type.
#[derive(Debug, Clone, Error)]
#[error("cannot convert {kind} value `{rendered}` to {target}")]
pub struct ValueCastError {
    kind: crate::ValueKind,
    rendered: String,
    target: &'static str,
}

impl ValueCastError {
    fn new(value: &Value, target: &'static str) -> Self {
        Self {
            kind: value.kind(),
            rendered: display(value),
            target,
        }
    }
}

// ==================== Primitives -> Value ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Self::BigInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Self::Time(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    /// `None` is the absent sentinel, not null.
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<IndexMap<String, T>> for Value {
    fn from(v: IndexMap<String, T>) -> Self {
        Self::Object(v.into_iter().map(|(k, x)| (k, x.into())).collect())
    }
}

// ==================== Value -> primitives ====================

impl TryFrom<Value> for String {
    type Error = ValueCastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(ValueCastError::new(&other, "String")),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = ValueCastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(ValueCastError::new(&other, "i64")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = ValueCastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            other => Err(ValueCastError::new(&other, "f64")),
        }
    }
}

// ==================== JSON interop ====================

/// Converts a JSON document into the engine's value model.
///
/// JSON has no absent/date/time/bytes shapes, so those variants only arise
/// from the native `From` impls; numbers become `Int` when they fit in
/// `i64`, `BigInt` for larger magnitudes, `Float` otherwise.
#[must_use]
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::BigInt(i128::from(u))
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::Text(s),
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(from_json).collect()),
        serde_json::Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}

/// Converts a value to its JSON form, the shape middleware consumers see.
///
/// Absent collapses to JSON null, dates/times/big integers render through
/// the display formatter, buffers as their decoded text.
#[must_use]
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Absent | Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::BigInt(_) | Value::Date(_) | Value::Time(_) => {
            serde_json::Value::String(display(value))
        }
        // Buffers may hold arbitrary bytes; base64 keeps the JSON form lossless.
        Value::Bytes(b) => serde_json::Value::String(BASE64_STANDARD.encode(b)),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        from_json(json)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        to_json(value)
    }
}

impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_json(self).serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(from_json(json))
    }
}
