use thiserror::Error;

/// Result type alias for tikblock operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur while syncing a feed into a device
#[derive(Error, Debug)]
pub enum SyncError {
    /// Credential or device address supplied by the operator is unusable
    #[error("invalid input: {0}")]
    Input(String),

    /// Device answered with a non-success status
    #[error("device rejected the request (HTTP {status}){}", fmt_message(.message))]
    Auth {
        /// HTTP status code
        status: u16,
        /// Error message from the device, if any
        message: String,
    },

    /// Connection, DNS or TLS failure
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Feed source answered with a non-success status
    #[error("feed unavailable (HTTP {status})")]
    FeedUnavailable {
        /// HTTP status code
        status: u16,
    },

    /// Feed body exceeded the configured size limit
    #[error("feed exceeds {limit} bytes")]
    FeedTooLarge {
        /// Configured limit in bytes
        limit: usize,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_message(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

/// Coarse classification of a [`SyncError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad operator input, reported before any network activity
    Input,
    /// Non-success status from the device
    Auth,
    /// Transport failure or unusable feed response
    Network,
    /// Client construction or settings
    Config,
}

impl SyncError {
    /// Returns the taxonomy class of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::Input,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Network(_)
            | Self::Timeout
            | Self::FeedUnavailable { .. }
            | Self::FeedTooLarge { .. } => ErrorKind::Network,
            Self::Config(_) | Self::Json(_) => ErrorKind::Config,
        }
    }

    /// Returns true if the device refused the request
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Returns true if the error happened at the transport level
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network)
    }

    /// Returns the HTTP status code if the error carries one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::FeedUnavailable { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = SyncError::Auth {
            status: 401,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "device rejected the request (HTTP 401)");

        let err = SyncError::Auth {
            status: 400,
            message: "failure: already have such entry".into(),
        };
        assert_eq!(
            err.to_string(),
            "device rejected the request (HTTP 400): failure: already have such entry"
        );
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(SyncError::Input("x".into()).kind(), ErrorKind::Input);
        assert_eq!(SyncError::Timeout.kind(), ErrorKind::Network);
        assert_eq!(
            SyncError::FeedUnavailable { status: 503 }.kind(),
            ErrorKind::Network
        );
        assert_eq!(SyncError::Config("x".into()).kind(), ErrorKind::Config);
        assert!(SyncError::Network("refused".into()).is_network_error());
        assert!(!SyncError::Network("refused".into()).is_auth_error());
    }

    #[test]
    fn test_status_code() {
        let err = SyncError::Auth {
            status: 403,
            message: String::new(),
        };
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(
            SyncError::FeedUnavailable { status: 404 }.status_code(),
            Some(404)
        );
        assert_eq!(SyncError::Timeout.status_code(), None);
    }
}
