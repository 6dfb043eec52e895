//! Lenient field decoders.
//!
//! The API documents several fields as strings but sometimes sends `false`
//! (or a bare number) in their place. These decoders map such values to
//! `None` or to their textual form so that one odd field does not fail the
//! whole payload.

use crate::time::Timestamp;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a string-typed field; `false`, `null` and empty strings become `None`.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Same as [`opt_string`] but yields an empty string instead of `None`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

/// Decode an unsigned number sent either as a JSON number or a digit string.
/// Anything else (`false`, `null`, `""`, junk) becomes `None`.
pub(crate) fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Same as [`opt_u64`] but defaults to zero.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_u64(deserializer)?.unwrap_or_default())
}

/// Decode a list that may be sent as `false` or `null` when empty.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Array(_)) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

/// Decode epoch seconds sent as a number or a digit string.
/// `false`, `null`, `""` and anything unparseable become `None`.
pub(crate) fn opt_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let seconds = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(seconds.and_then(Timestamp::from_unix))
}

/// Decode a boolean that may arrive as `null`, a number or a string.
/// Only `true`, non-zero numbers and the strings "true"/"1" are true.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |n| n != 0.0),
        Some(Value::String(s)) => matches!(s.trim(), "true" | "1"),
        _ => false,
    })
}

/// Decode a nested value, falling back to `T::default()` when it has the wrong shape.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value) => serde_json::from_value(value).unwrap_or_default(),
        None => T::default(),
    })
}
