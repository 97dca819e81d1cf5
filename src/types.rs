//! Response and payload types

use serde::Serialize;

/// Body extracted from a successful response
///
/// JSON bodies are parsed, other UTF-8 bodies are kept as text and anything
/// else is returned as raw bytes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Body parsed as JSON
    Json(serde_json::Value),
    /// Non-JSON UTF-8 body
    Text(String),
    /// Body that is not valid UTF-8
    Binary(Vec<u8>),
}

impl Payload {
    /// Classify a raw response body
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
            return Payload::Json(value);
        }
        match std::str::from_utf8(bytes) {
            Ok(text) => Payload::Text(text.to_string()),
            Err(_) => Payload::Binary(bytes.to_vec()),
        }
    }

    /// The parsed JSON value, if this is a JSON payload
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The body as text, for JSON and text payloads
    pub fn as_text(&self) -> Option<String> {
        match self {
            Payload::Json(value) => Some(value.to_string()),
            Payload::Text(text) => Some(text.clone()),
            Payload::Binary(_) => None,
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

/// A completed GET as seen by the fetcher
#[must_use]
#[derive(Clone, Debug)]
pub struct Response {
    /// Final URL of the request
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Extracted body
    pub body: Payload,
}
