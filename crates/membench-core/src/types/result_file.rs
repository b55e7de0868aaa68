//! A discovered result file and its (leniently) decoded payload.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultFile {
    /// File name, without directory.
    pub name: String,
    /// Decoded JSON. `Value::Null` when the file could not be read or decoded.
    pub payload: Value,
}

impl ResultFile {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Decode raw bytes, degrading to `Value::Null` on malformed JSON.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let name = name.into();
        let payload = match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(e) => {
                ::tracing::debug!(file = %name, error = %e, "result file is not valid JSON");
                Value::Null
            }
        };
        Self { name, payload }
    }
}
