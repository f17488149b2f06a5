//! Payloads exchanged with the remote humanization service.
//!
//! Response fields are all optional: the service omits fields freely, and the
//! client decides what a missing field means.

use serde::{Deserialize, Serialize};

/// Body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitPayload<'a> {
    pub text: &'a str,
    pub readability: &'static str,
    pub purpose: &'static str,
    pub strength: &'static str,
    pub model: &'a str,
}

/// Only the fields the client reads are declared; anything else the service
/// sends (timestamps, echoed input, ...) is ignored whatever its type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    /// Logged only.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Body of `POST /document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentQuery<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Body of `GET /check-user-credits`. `credits` is kept raw so non-numeric
/// values can be told apart from a missing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub credits: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Treats empty strings the same as absent fields.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Renders an `error` field of any JSON type; `null`, `false` and `""` count
/// as absent.
pub(crate) fn error_message(field: &Option<serde_json::Value>) -> Option<String> {
    match field.as_ref()? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
