use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;
use crate::error::FormError;

/// The `{Ok, Error?, ...}` shape every endpoint answers with.
///
/// `payload` captures the operation-specific fields next to `Ok`/`Error`.
/// A body without `Ok` is read as `Ok=false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "Ok", default)]
    pub ok: bool,
    #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn from_value(value: Value) -> Result<Self, FormError> {
        serde_json::from_value(value).map_err(|e| FormError::Decode(e.to_string()))
    }
}

/// Payload of a write endpoint (`settings.json`, `signup.json`, ...).
///
/// `Changes` may be absent or `null`; both count as no change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteReply {
    #[serde(rename = "Changes", default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<i64>,
}

impl WriteReply {
    pub fn change_count(&self) -> i64 {
        self.changes.unwrap_or(0)
    }
}

/// Payload of `search.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchReply {
    #[serde(rename = "Results", default)]
    pub results: Option<Vec<Record>>,
}

pub type LoadEnvelope = Envelope<Record>;
pub type WriteEnvelope = Envelope<WriteReply>;
pub type SearchEnvelope = Envelope<SearchReply>;
