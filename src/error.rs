//! Error types for the orchestrator client.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single message was rejected before any request was made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("must have both sender and content properties")]
    MissingSenderOrContent,

    #[error("sender must have an id property")]
    MissingSenderId,

    #[error("must have a type property")]
    MissingKind,
}

/// Errors returned by [`OrchestratorClient`](crate::OrchestratorClient).
#[derive(Error, Debug)]
pub enum Error {
    /// The client configuration is unusable.
    #[error("{0}")]
    Config(String),

    /// A message sequence with no elements was submitted.
    #[error("messages must not be empty")]
    EmptyInput,

    /// A message failed the presence checks.
    #[error("message {index} {reason}")]
    Validation {
        index: usize,
        reason: ValidationError,
    },

    /// A required argument was empty.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// Network-level failure surfaced by the HTTP transport.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The orchestrator answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
}

impl Error {
    /// True for errors raised before any network I/O happened.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput | Error::Validation { .. } | Error::MissingArgument(_)
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status { .. })
    }

    /// Timeouts, connection failures (DNS, refused) and 5xx responses.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout() || e.is_connect(),
            Error::Status { status, .. } => status.as_u16() >= 500,
            _ => false,
        }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingSenderOrContent.to_string(),
            "must have both sender and content properties"
        );
        assert_eq!(
            ValidationError::MissingSenderId.to_string(),
            "sender must have an id property"
        );
        assert_eq!(
            ValidationError::MissingKind.to_string(),
            "must have a type property"
        );
    }

    #[test]
    fn test_missing_argument_display() {
        let err = Error::MissingArgument("agentName");
        assert_eq!(err.to_string(), "agentName is required");
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_status_retryable_classification() {
        let err = Error::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "down".to_string(),
        };
        assert!(err.is_retryable());
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));

        let err = Error::Status {
            status: StatusCode::BAD_REQUEST,
            body: "bad".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "HTTP 400 Bad Request: bad");
    }

    #[test]
    fn test_validation_is_never_retryable() {
        let err = Error::Validation {
            index: 2,
            reason: ValidationError::MissingKind,
        };
        assert!(err.is_validation());
        assert!(!err.is_transport());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "message 2 must have a type property");
        assert!(!Error::Config("baseUrl is required".into()).is_retryable());
    }
}
