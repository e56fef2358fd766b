//! Error types for upload operations
//!
//! Every failure an upload can hit is classified here so the orchestrator
//! can record a per-file outcome without losing the cause.

use thiserror::Error;

/// Result type alias for upload operations
pub type Result<T> = std::result::Result<T, UploadError>;

/// Error type for the upload pipeline
#[derive(Error, Debug)]
pub enum UploadError {
    /// No resolvable endpoint URL or missing required setting
    #[error("Configuration error: {0}. Check your command-line flags, environment variables, or .envrc file.")]
    Config(String),

    /// Server answered with a non-2xx status
    #[error("Server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// HTTP request failed (connection refused, timeout, TLS, ...)
    #[error("Network request failed: {0}. Check the endpoint URL and your connection.")]
    Transport(#[from] reqwest::Error),

    /// Digest authentication handshake failed
    #[error("Digest authentication failed: {0}")]
    DigestAuth(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check the file path and read permissions.")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable kind name for per-file result reporting
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::Config(_) => "ConfigurationError",
            UploadError::HttpStatus { .. } => "HttpStatusError",
            UploadError::Transport(_) | UploadError::DigestAuth(_) => "TransportError",
            UploadError::Io(_) => "IoError",
        }
    }
}

impl From<diqwest::error::Error> for UploadError {
    fn from(err: diqwest::error::Error) -> Self {
        match err {
            diqwest::error::Error::Reqwest(inner) => UploadError::Transport(inner),
            other => UploadError::DigestAuth(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(UploadError::config("x").kind(), "ConfigurationError");
        assert_eq!(
            UploadError::HttpStatus {
                status: 500,
                body: String::new()
            }
            .kind(),
            "HttpStatusError"
        );
        assert_eq!(
            UploadError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).kind(),
            "IoError"
        );
        assert_eq!(UploadError::DigestAuth("no challenge".into()).kind(), "TransportError");
    }

    #[test]
    fn test_http_status_message_includes_body() {
        let err = UploadError::HttpStatus {
            status: 400,
            body: "MALFORMED QUERY".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("MALFORMED QUERY"));
    }
}
