//! User-facing page errors.

use thiserror::Error;

/// An error surfaced to the page renderer.
///
/// Carries the HTTP status the page should respond with and a message that
/// is safe to show to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}: {message}")]
pub struct PageError {
    /// HTTP status code.
    pub status: u16,
    /// Visitor-facing message.
    pub message: String,
}

impl PageError {
    /// Create a page error with an explicit status.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A 404 error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// A 500 error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    /// Check if this is a 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Canonical reason phrase for the status (e.g. "Not Found").
    pub fn reason(&self) -> &'static str {
        http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_not_found() {
        let err = PageError::not_found("Projects file not found");
        assert_eq!(err.status, 404);
        assert!(err.is_not_found());
        assert_eq!(err.reason(), "Not Found");
    }

    #[test]
    fn test_page_error_internal() {
        let err = PageError::internal("Failed to load projects");
        assert_eq!(err.status, 500);
        assert!(!err.is_not_found());
        assert_eq!(err.reason(), "Internal Server Error");
    }

    #[test]
    fn test_page_error_display() {
        let err = PageError::internal("boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_page_error_unknown_status_reason() {
        let err = PageError::new(99, "odd");
        assert_eq!(err.reason(), "Error");
    }
}
