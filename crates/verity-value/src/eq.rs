//! Deep structural equality.
//!
//! Used by the `equal` / `notEqual` / `oneOf` / `notOneOf` rules. Semantics:
//!
//! - the two numeric variants compare by numeric value (`Int(1)` equals
//!   `Float(1.0)`), matching how the original's single number type behaves;
//! - dates compare by instant;
//! - sequences compare pairwise in order;
//! - mappings compare by key set, order-independent;
//! - `Absent` equals only `Absent`, `Null` only `Null`.

use crate::value::Value;

/// Structural equality over two values.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Absent, Value::Absent) | (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Int(x), Value::Float(y)) | (Value::Float(y), Value::Int(x)) => *x as f64 == *y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::BigInt(x), Value::Int(y)) | (Value::Int(y), Value::BigInt(x)) => *x == i128::from(*y),
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Bytes(x), Value::Bytes(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Time(x), Value::Time(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xm), Value::Object(ym)) => {
            xm.len() == ym.len()
                && xm
                    .iter()
                    .all(|(k, x)| ym.get(k).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}
