use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Per-field messages from the server's validation error envelope.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// One failure class per round trip, decided at the response boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The anti-forgery token was rejected; the page must re-authenticate.
    #[error("session expired")]
    SessionExpired,

    /// The server rejected the payload field by field. Recoverable in
    /// place; the edit session stays open for correction.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing listing key '{0}' in response")]
    Envelope(String),
}

const MESSAGE_LIMIT: usize = 200;

impl ApiError {
    /// Fold a non-2xx response into exactly one failure class.
    ///
    /// A structured validation envelope wins; otherwise an anti-forgery
    /// marker in the body means the session is gone; anything else is a
    /// generic status failure.
    pub fn classify(status: u16, body: &str) -> Self {
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            if let Some(errors) = validation_errors(&value) {
                return Self::Validation(errors);
            }
        }

        if body.to_lowercase().contains("csrf") {
            return Self::SessionExpired;
        }

        Self::Status {
            status,
            message: status_message(status, body),
        }
    }
}

fn status_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("request failed with status {status}");
    }
    trimmed.chars().take(MESSAGE_LIMIT).collect()
}

/// Extract `{ "validation_errors": { field: [msg, ...] } }` if present.
fn validation_errors(value: &Value) -> Option<ValidationErrors> {
    let fields = value.get("validation_errors")?.as_object()?;

    let mut errors = ValidationErrors::new();
    for (field, messages) in fields {
        let messages = match messages {
            Value::Array(items) => items
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect(),
            Value::String(message) => vec![message.clone()],
            other => {
                tracing::warn!(%field, ?other, "unrecognized validation message shape");
                continue;
            }
        };
        errors.insert(field.clone(), messages);
    }
    Some(errors)
}
