use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// How reading values are presented on the wire.
///
/// One handler set serves both shapes; the format is configuration, not a
/// separate route tree. Older dashboard deployments consume the plain-text
/// variant, current ones the JSON one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Json,
    Plain,
}

/// A single stringified reading, rendered per the configured format.
#[derive(Debug)]
pub struct ValueReply {
    format: ResponseFormat,
    value: String,
}

impl ValueReply {
    pub fn new(format: ResponseFormat, value: impl Into<String>) -> Self {
        Self {
            format,
            value: value.into(),
        }
    }
}

impl IntoResponse for ValueReply {
    fn into_response(self) -> Response {
        match self.format {
            ResponseFormat::Json => {
                Json(serde_json::json!({ "value": self.value })).into_response()
            }
            ResponseFormat::Plain => (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                self.value,
            )
                .into_response(),
        }
    }
}
