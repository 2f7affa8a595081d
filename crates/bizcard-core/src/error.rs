//! Error types for the business card runtime

use thiserror::Error;

/// Main error type for business card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// A required element is not part of the page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// Clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Saving a downloadable file failed
    #[error("Download error: {0}")]
    Download(String),

    /// Configuration is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::MissingElement("call-modal".to_string());
        assert_eq!(format!("{}", err), "Element not found: call-modal");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CardError = io_err.into();
        assert!(matches!(err, CardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: CardError = json_err.into();
        assert!(format!("{}", err).starts_with("JSON error"));
    }
}
