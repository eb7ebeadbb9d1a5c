//! The `{ok, status, data}` envelope every backend request resolves to.
//!
//! ERROR HANDLING
//! ==============
//! A transport failure is folded into the same shape with `status == 0`, so
//! callers branch on one type. Human-readable messages are pulled from the
//! backend body in a fixed order: `error`, then `detail`, then `message`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::SchemaError;

/// Message used when the server cannot be reached at all.
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor";

const MESSAGE_KEYS: [&str; 3] = ["error", "detail", "message"];
const NON_FIELD_KEYS: [&str; 6] = ["error", "detail", "message", "mensaje", "success", "non_field_errors"];

/// Outcome of one HTTP request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// True for 2xx statuses.
    pub ok: bool,
    /// HTTP status, or `0` when the request never reached the server.
    pub status: u16,
    /// Decoded JSON body, `{}` when the body was empty or not JSON.
    pub data: Value,
}

impl ApiResponse {
    /// Build an envelope from a status code and body.
    #[must_use]
    pub fn new(status: u16, data: Value) -> Self {
        Self { ok: (200..300).contains(&status), status, data }
    }

    /// Envelope produced when the network request failed before a response.
    #[must_use]
    pub fn connection_error() -> Self {
        let mut data = Map::new();
        data.insert("error".to_owned(), Value::String(CONNECTION_ERROR.to_owned()));
        Self { ok: false, status: 0, data: Value::Object(data) }
    }

    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        self.status == 0
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    /// First non-empty message among `error`, `detail` and `message`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        MESSAGE_KEYS.iter().find_map(|key| self.data.get(key).and_then(text_of))
    }

    /// All non-empty `error`/`detail` messages, in that order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        ["detail", "error"].iter().filter_map(|key| self.data.get(key).and_then(text_of)).collect()
    }

    /// DRF-style validation errors: `{field: ["msg", ...]}` or `{field: "msg"}`.
    ///
    /// Well-known message keys are excluded.
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        let Some(object) = self.data.as_object() else {
            return BTreeMap::new();
        };
        object
            .iter()
            .filter(|(key, _)| !NON_FIELD_KEYS.iter().any(|k| *k == key.as_str()))
            .filter(|(_, value)| value.is_array() || value.is_string())
            .filter_map(|(key, value)| text_of(value).map(|text| (key.clone(), text)))
            .collect()
    }

    /// `data[key] == true`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.data.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Non-empty string at `data[key]`.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    /// Decode the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Decode`] if the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, SchemaError> {
        Ok(T::deserialize(&self.data)?)
    }

    /// Decode `data.data` when the backend nests the payload, else the body.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Decode`] if the payload does not match `T`.
    pub fn decode_payload<T: DeserializeOwned>(&self) -> Result<T, SchemaError> {
        let inner = self.data.get("data").filter(|v| !v.is_null()).unwrap_or(&self.data);
        Ok(T::deserialize(inner)?)
    }

    /// Decode a required nested key such as `user` or `results`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingField`] when the key is absent, or
    /// [`SchemaError::Decode`] when it does not match `T`.
    pub fn decode_field<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, SchemaError> {
        let value = self.data.get(key).filter(|v| !v.is_null()).ok_or(SchemaError::MissingField(key))?;
        Ok(T::deserialize(value)?)
    }
}

/// Text of a string, or of a string array joined by spaces.
pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_owned()).filter(|t| !t.is_empty()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Some(joined).filter(|t| !t.is_empty())
        }
        _ => None,
    }
}
