//! Error handling for the college directory client
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the college directory client
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Directory API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("College not found: {college_id}")]
    CollegeNotFound { college_id: i64 },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Directory API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("API service unavailable")]
    ServiceUnavailable,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

impl ApiError {
    /// Whether the server rejected the caller for lack of credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    /// Whether the server reported the target record as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl DirectoryError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            DirectoryError::Api(ApiError::Status { status, .. }) => *status >= 500,
            DirectoryError::Api(ApiError::InvalidResponse(_)) => false,
            DirectoryError::Api(_) => true,
            DirectoryError::Config(_) => false,
            DirectoryError::PermissionDenied(_) => false,
            DirectoryError::CollegeNotFound { .. } => false,
            DirectoryError::InvalidStateTransition { .. } => false,
            DirectoryError::Http(_) => true,
            DirectoryError::Serialization(_) => false,
            DirectoryError::Io(_) => true,
            DirectoryError::UrlParse(_) => false,
            DirectoryError::Authentication(_) => false,
            DirectoryError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DirectoryError::Config(_) => ErrorSeverity::Critical,
            DirectoryError::PermissionDenied(_) => ErrorSeverity::Warning,
            DirectoryError::Authentication(_) => ErrorSeverity::Warning,
            DirectoryError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            DirectoryError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses() {
        let forbidden = ApiError::Status { status: 403, body: String::new() };
        let unauthorized = ApiError::Status { status: 401, body: String::new() };
        let missing = ApiError::Status { status: 404, body: String::new() };

        assert!(forbidden.is_unauthorized());
        assert!(unauthorized.is_unauthorized());
        assert!(!missing.is_unauthorized());
        assert!(missing.is_not_found());
    }

    #[test]
    fn test_server_errors_are_recoverable() {
        let err = DirectoryError::Api(ApiError::Status { status: 503, body: String::new() });
        assert!(err.is_recoverable());

        let err = DirectoryError::Api(ApiError::Status { status: 400, body: String::new() });
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_severity_ordering() {
        assert_eq!(DirectoryError::InvalidInput("x".into()).severity(), ErrorSeverity::Info);
        assert_eq!(DirectoryError::Config("x".into()).severity(), ErrorSeverity::Critical);
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    }
}
