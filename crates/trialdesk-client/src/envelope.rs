//! Response envelope decoding.
//!
//! The API returns either a bare entity object or a listing envelope
//! `{ "<collection>": [entity, ...] }`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Unwrap a listing envelope into its raw entity values.
pub fn items(value: Value, key: &str) -> Result<Vec<Value>, ApiError> {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ApiError::Envelope(key.to_string())),
        },
        _ => Err(ApiError::Envelope(key.to_string())),
    }
}

/// Unwrap a listing envelope and decode each entry.
pub fn items_as<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, ApiError> {
    items(value, key)?
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::from))
        .collect()
}
