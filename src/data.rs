use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A compacted interaction document: only the fields that were actually
/// configured on the builder are present, and absent fields are omitted
/// from the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    pub method: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// A response status, either numeric or textual. Serializes as a plain
/// JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    Code(u16),
    Text(String),
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Status::Code(code)
    }
}

// Integer literals fall back to i32, so plain `will_respond_with(200, ..)`
// resolves through this impl.
impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Status::Code(code as u16)
    }
}

impl From<&str> for Status {
    fn from(text: &str) -> Self {
        Status::Text(text.into())
    }
}

impl From<String> for Status {
    fn from(text: String) -> Self {
        Status::Text(text)
    }
}
