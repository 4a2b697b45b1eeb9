use serde_json::Value;
use thiserror::Error;

/// Transport-level failure; `Display` is the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{0}")]
    Server(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Error for a non-success response with the given body
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        match serde_json::from_str::<Value>(body).ok().and_then(|v| detail_of(&v)) {
            Some(detail) => Self::Server(detail),
            None => Self::Status(status),
        }
    }
}

/// `{"detail": ..}` or `{"error": ..}`; otherwise the first field error
/// of a `{"field": ["message"]}` body
fn detail_of(body: &Value) -> Option<String> {
    for key in ["detail", "error"] {
        if let Some(s) = body.get(key).and_then(Value::as_str) {
            return Some(s.to_string());
        }
    }
    let (field, messages) = body.as_object()?.iter().next()?;
    let first = match messages {
        Value::Array(items) => items.first()?.as_str()?,
        Value::String(s) => s.as_str(),
        _ => return None,
    };
    Some(format!("{}: {}", field, first))
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_response() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_response(400, r#"{"detail": "Slug already exists"}"#),
            ApiError::Server("Slug already exists".into())
        );
        assert_eq!(
            ApiError::from_response(400, r#"{"error": "School not found"}"#).to_string(),
            "School not found"
        );
        assert_eq!(
            ApiError::from_response(400, r#"{"slug": ["This field must be unique."]}"#),
            ApiError::Server("slug: This field must be unique.".into())
        );
        assert_eq!(ApiError::from_response(502, "<html>"), ApiError::Status(502));
    }
}
