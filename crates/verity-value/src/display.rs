//! The single value-to-string formatter.
//!
//! Every message rendered by the validation engine goes through
//! [`display`]; there is deliberately exactly one place that decides how a
//! received value reads inside a report message.

use crate::value::Value;

/// Format used for the date variant: `YYYY/MM/DD HH:MM:SS.mmm`.
pub const DATE_DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Format used for the time variant: `HH:MM:SS.mmm`.
pub const TIME_DISPLAY_FORMAT: &str = "%H:%M:%S%.3f";

/// Renders a value for inclusion in a human-readable message.
///
/// - integer-valued floats render without a fractional part (`4.0` → `4`);
/// - big integers carry a trailing `n` marker;
/// - buffers render as their decoded UTF-8 form;
/// - sequences and mappings render as their JSON form.
#[must_use]
pub fn display(value: &Value) -> String {
    match value {
        Value::Absent => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => display_f64(*f),
        Value::BigInt(i) => format!("{i}n"),
        Value::Text(s) => s.clone(),
        Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
        Value::Date(d) => d.format(DATE_DISPLAY_FORMAT).to_string(),
        Value::Time(t) => t.format(TIME_DISPLAY_FORMAT).to_string(),
        Value::Array(_) | Value::Object(_) => crate::convert::to_json(value).to_string(),
    }
}

fn display_f64(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
