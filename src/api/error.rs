//! API-specific error types.

/// Errors that can occur while talking to the lists/auth or content API.
///
/// Every variant carries plain strings so the error can be cloned into
/// store state (`ApiResponse::Rejected`) and shown inline by the UI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// API answered with a status outside 2xx
    #[error("{name}: {message}")]
    Http {
        name: String,
        message: String,
        status: u16,
    },

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(String),

    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Returns the numeric HTTP status for server-side failures.
    ///
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the text suitable for an inline alert: the response body for
    /// HTTP failures and the display string otherwise.
    ///
    pub fn message(&self) -> String {
        match self {
            ApiError::Http { message, name, .. } if message.trim().is_empty() => name.to_owned(),
            ApiError::Http { message, .. } => message.to_owned(),
            other => other.to_string(),
        }
    }

    /// Whether the server rejected the request as a duplicate.
    ///
    pub fn is_conflict(&self) -> bool {
        matches!(self.status(), Some(409) | Some(422))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Deserialization(error.to_string())
        } else {
            ApiError::Request(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Deserialization(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: &str) -> ApiError {
        ApiError::Http {
            name: format!("{} Test", status),
            message: message.to_string(),
            status,
        }
    }

    #[test]
    fn test_api_error_display() {
        let error = http(404, "Not found");
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));

        let error = ApiError::Request("connection refused".to_string());
        assert!(error.to_string().contains("HTTP request failed"));

        let error = ApiError::Deserialization("missing field".to_string());
        assert!(error.to_string().contains("deserialize"));
    }

    #[test]
    fn status_only_for_http_errors() {
        assert_eq!(http(500, "boom").status(), Some(500));
        assert_eq!(ApiError::Request("x".to_string()).status(), None);
    }

    #[test]
    fn conflict_statuses() {
        assert!(http(422, "").is_conflict());
        assert!(http(409, "").is_conflict());
        assert!(!http(400, "").is_conflict());
        assert!(!ApiError::Request("x".to_string()).is_conflict());
    }

    #[test]
    fn message_prefers_body_text() {
        assert_eq!(http(401, "Invalid credentials").message(), "Invalid credentials");
        assert_eq!(http(500, "  ").message(), "500 Test");
    }
}
