//! Error types for analytics service calls

/// Errors that can occur while talking to the analytics service
///
/// Every variant renders as a message fit for an error banner.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The service answered with a non-success status
    #[error("Server Error {status}: {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-supplied message, or the canonical status reason
        message: String,
    },

    /// The request was sent but no response arrived
    #[error("No response from server at {url}. Please check that the analytics service is running.")]
    Unreachable {
        /// Base URL of the service
        url: String,
        /// Underlying transport failure
        reason: String,
    },

    /// The request could not be constructed or sent at all
    #[error("Request Error: {0}")]
    RequestConstruction(String),

    /// The service answered with a success status but an unusable body
    #[error("Invalid response from server: {0}")]
    Parse(String),

    /// Client configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RestError {
    /// Classify a transport error from the HTTP client
    pub fn from_transport(err: reqwest::Error, url: &str) -> Self {
        if err.is_builder() {
            Self::RequestConstruction(err.to_string())
        } else if err.is_timeout() || err.is_connect() || err.is_request() {
            Self::Unreachable {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else if err.is_decode() || err.is_body() {
            Self::Parse(err.to_string())
        } else {
            Self::RequestConstruction(err.to_string())
        }
    }

    /// Returns true if the service could not be reached
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Returns true if the service rejected the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// HTTP status of a rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if trying again later could succeed
    ///
    /// The client itself never retries; this is advisory for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unreachable { .. } => true,
            Self::Rejected { status, .. } => *status >= 500 || *status == 429,
            Self::RequestConstruction(_) | Self::Parse(_) | Self::InvalidConfig(_) => false,
        }
    }
}

/// Result type for analytics service calls
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        let err = RestError::Rejected {
            status: 404,
            message: "Ticker not found".to_string(),
        };
        assert_eq!(err.to_string(), "Server Error 404: Ticker not found");
        assert!(err.is_rejection());
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unreachable_message() {
        let err = RestError::Unreachable {
            url: "http://localhost:3005".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().starts_with("No response from server"));
        assert!(err.is_unreachable());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_retryable_statuses() {
        let server = RestError::Rejected {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(server.is_retryable());

        let construction = RestError::RequestConstruction("relative URL without a base".into());
        assert_eq!(construction.to_string(), "Request Error: relative URL without a base");
        assert!(!construction.is_retryable());
    }
}
