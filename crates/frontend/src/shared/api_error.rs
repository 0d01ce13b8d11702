use thiserror::Error;

/// Failure of a call to the records API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Failed to send request: {0}")]
    Network(String),

    /// The API answered with a non-2xx status
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// The API positively refused the session (as opposed to being unreachable)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for an inline error banner: the API's own message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses() {
        let denied = ApiError::Status {
            status: 401,
            message: String::new(),
        };
        let forbidden = ApiError::Status {
            status: 403,
            message: String::new(),
        };
        let server = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(denied.is_unauthorized());
        assert!(forbidden.is_unauthorized());
        assert!(!server.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
        assert!(!ApiError::Parse("eof".into()).is_unauthorized());
    }

    #[test]
    fn test_user_message_prefers_api_text() {
        let err = ApiError::Status {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials (HTTP 401)");
        assert_eq!(
            ApiError::Network("offline".into()).user_message(),
            "Failed to send request: offline"
        );
    }
}
