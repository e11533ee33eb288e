//! Serde adapters that degrade malformed values to "absent" instead of failing.
//!
//! Each adapter first reads an arbitrary JSON-like value, so the same code path
//! serves JSON and YAML documents.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::parse;

fn read<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Option::<Value>::deserialize(deserializer)
}

fn number_from(value: Value, from_text: fn(&str) -> Option<f64>) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => from_text(&s),
        _ => None,
    }
}

/// Strings, numbers (rendered as text) or nothing.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match read(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(read(deserializer)?.and_then(|v| number_from(v, parse::parse_number)))
}

pub fn capacity_gb<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(read(deserializer)?.and_then(|v| number_from(v, parse::parse_capacity_gb)))
}

pub fn screen_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(read(deserializer)?.and_then(|v| number_from(v, parse::parse_screen_size)))
}

pub fn frequency_ghz<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    Ok(read(deserializer)?.and_then(|v| number_from(v, parse::parse_frequency_ghz)))
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match read(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => parse::parse_bool(&s),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}

/// A whole component record; `null` or a non-object value becomes the empty record.
pub fn component<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match read(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}
