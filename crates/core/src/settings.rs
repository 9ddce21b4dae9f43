//! Key/value site settings with per-value type tagging.
//!
//! Settings are persisted as text plus a type tag. Structured values (objects
//! and arrays) are stored as JSON text tagged `json`; everything else is
//! stored as plain text tagged `string`.
//!
//! Decoding is lenient: stored JSON that fails to parse decodes to an empty
//! object instead of an error, so one corrupt row never breaks the whole
//! settings map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The stored type tag of a setting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    String,
    Json,
}

impl SettingType {
    /// The tag as stored in the `value_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Json => "json",
        }
    }

    /// Parse a stored tag. Anything other than `json` reads as `string`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "json" => Self::Json,
            _ => Self::String,
        }
    }
}

/// A decoded setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Json(Value),
}

impl SettingValue {
    /// Classify an incoming JSON value by shape.
    ///
    /// Objects and arrays stay structured. Strings are taken verbatim; other
    /// scalars (numbers, booleans, null) use their JSON text form, e.g. `42`,
    /// `true`, `null`.
    pub fn from_incoming(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Self::Json(value),
            Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }

    /// Decode stored text according to its type tag.
    pub fn decode(stored: &str, setting_type: SettingType) -> Self {
        match setting_type {
            SettingType::String => Self::Text(stored.to_owned()),
            SettingType::Json => Self::Json(
                serde_json::from_str(stored).unwrap_or_else(|_| Value::Object(Map::new())),
            ),
        }
    }

    pub fn setting_type(&self) -> SettingType {
        match self {
            Self::Text(_) => SettingType::String,
            Self::Json(_) => SettingType::Json,
        }
    }

    /// The text written to the `value` column.
    pub fn encode(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Json(v) => v.to_string(),
        }
    }

    /// The value as it appears in the public settings map.
    pub fn into_json(self) -> Value {
        match self {
            Self::Text(s) => Value::String(s),
            Self::Json(v) => v,
        }
    }
}

/// A setting ready to be written: encoded text plus its type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSetting {
    pub key: String,
    pub value: String,
    pub setting_type: SettingType,
}

impl EncodedSetting {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        let decoded = SettingValue::from_incoming(value);
        Self {
            key: key.into(),
            value: decoded.encode(),
            setting_type: decoded.setting_type(),
        }
    }
}

/// Encode every entry of a bulk update payload, preserving payload order.
pub fn encode_all(payload: Map<String, Value>) -> Vec<EncodedSetting> {
    payload
        .into_iter()
        .map(|(key, value)| EncodedSetting::new(key, value))
        .collect()
}

/// Build the public settings map from stored `(key, value, type tag)` rows.
///
/// If the same key appears twice the later row wins.
pub fn decode_all<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Map<String, Value> {
    rows.into_iter()
        .map(|(key, value, tag)| {
            let decoded = SettingValue::decode(value, SettingType::from_tag(tag));
            (key.to_owned(), decoded.into_json())
        })
        .collect()
}
