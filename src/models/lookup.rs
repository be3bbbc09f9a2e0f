use serde::{Deserialize, Serialize};
use url::Url;

/// Body returned by the backend for `GET /lookup/{code}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl LookupResponse {
    /// The destination to redirect to, only when the backend reports success
    /// and `originalUrl` is a non-empty absolute URL. Returned as sent so the
    /// redirect matches it exactly. Control characters are rejected even where
    /// the URL parser would strip them; they cannot appear in `Location`.
    pub fn destination(&self) -> Option<&str> {
        if !self.success {
            return None;
        }

        let raw = self.original_url.as_deref()?.trim();
        if raw.is_empty() || raw.chars().any(char::is_control) {
            return None;
        }

        Url::parse(raw).ok().map(|_| raw)
    }
}
