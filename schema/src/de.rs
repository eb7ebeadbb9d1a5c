//! Lenient deserializers for loosely typed backend columns.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so that a missing
//! key and an explicit `null` behave the same.

#[cfg(test)]
#[path = "de_test.rs"]
mod de_test;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a finite float. Numeric strings are accepted.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|f| f.is_finite()),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Interpret a JSON value as text. Numbers and booleans are stringified.
pub fn value_as_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(raw) => raw.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

/// `null` or any scalar into a `String`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_as_string).unwrap_or_default())
}

/// Like [`string`] but maps `null` and empty text to `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_as_string).filter(|s| !s.is_empty()))
}

/// Number or numeric string into `Option<f64>`; anything else is `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// Number or numeric string into `f64`, defaulting to `0.0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_f64(deserializer).map(Option::unwrap_or_default)
}

/// Integer-compatible number or numeric string into `Option<i64>`.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_i64().or_else(|| whole_f64(number.as_f64())),
        Some(Value::String(raw)) => {
            let raw = raw.trim();
            raw.parse::<i64>().ok().or_else(|| whole_f64(raw.parse::<f64>().ok()))
        }
        _ => None,
    })
}

/// Integer-compatible number or numeric string into `i64`, defaulting to `0`.
pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_i64(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize `T`, treating `null` as `T::default()`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_f64(value: Option<f64>) -> Option<i64> {
    let float = value?;
    if float.is_finite() && float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
