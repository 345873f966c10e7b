//! The response envelope both handlers return to the Lambda platform.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const TEXT_HTML_UTF8: &str = "text/html; charset=utf-8";
pub const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";

/// Proxy-integration style response: `statusCode`, `headers`, `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    /// Returns a 200 OK response with the given body and content type.
    #[must_use]
    pub fn ok(content_type: &str, body: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), content_type.to_string());

        Self {
            status_code: 200,
            headers,
            body: body.into(),
        }
    }

    /// Returns a 200 OK response with an HTML body.
    #[must_use]
    pub fn html(body: impl Into<String>) -> Self {
        Self::ok(TEXT_HTML_UTF8, body)
    }

    /// Returns a 200 OK response whose body is the compact JSON text of `value`.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        Self::ok(APPLICATION_JSON_UTF8, value.to_string())
    }

    /// Looks up a header value by its exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
