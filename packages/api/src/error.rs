//! Client-side error taxonomy.

/// Every way a client operation can fail.
///
/// Views show `err.to_string()` inline; none of these are retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server, or no response came back.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `message` is the response
    /// body, or the operation's default message when the body was empty.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The backend rejected the persisted token.
    #[error("Your session has expired. Please log in again.")]
    SessionInvalid,

    /// A client-side form check failed.
    #[error("{0}")]
    Validation(String),

    /// A 2xx response whose body could not be understood.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid API address: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// HTTP status for [`ApiError::Request`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_server_message() {
        let err = ApiError::Request {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_validation_error() {
        let err = ApiError::validation("Passwords do not match");
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }
}
