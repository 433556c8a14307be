#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Shown when a request never reached the backend.
pub const REQUEST_FAILED: &str = "Request failed. Please check your connection and try again.";

const UNEXPECTED_RESPONSE: &str = "Unexpected response from the server.";

const RELOADING: &str = "A new version is available. Reloading...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not encode request body: {0}")]
    Encode(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    /// 409 from the backend: the page must be loaded outside the app.
    #[error("full reload required ({location:?})")]
    Reload { location: Option<String> },
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: status_message(status, body),
        }
    }

    /// Text for the error toast. All failures render the same way; only the
    /// wording differs.
    pub fn toast_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => REQUEST_FAILED.to_string(),
            ApiError::Encode(_) | ApiError::Decode(_) => UNEXPECTED_RESPONSE.to_string(),
            ApiError::Reload { .. } => RELOADING.to_string(),
        }
    }
}

/// Message of an error response body: the first field validation error,
/// then the top-level `message`, then a generic status line.
pub fn status_message(status: u16, body: &str) -> String {
    let fallback = || format!("Request failed with status {}", status);
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    let field_error = json
        .get("errors")
        .and_then(|errors| errors.as_object())
        .and_then(|errors| {
            errors.values().find_map(|messages| match messages {
                serde_json::Value::Array(items) => items.iter().find_map(|m| m.as_str()),
                serde_json::Value::String(message) => Some(message.as_str()),
                _ => None,
            })
        });

    field_error
        .or_else(|| json.get("message").and_then(|m| m.as_str()))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(fallback)
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Encode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
