use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend: `{"detail": ...}`.
///
/// `detail` is a plain string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(message) => message.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item.get("msg").and_then(|m| m.as_str()) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}
