//! Error handling for the grid engine adapter.

use thiserror::Error;

/// Result type for grid engine operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while translating to and from the grid engine.
#[derive(Error, Debug)]
pub enum GridError {
    /// qsub output matched neither the terse nor the verbose grammar.
    ///
    /// Carries the complete raw response so operators can see what the
    /// scheduler actually printed.
    #[error("Invalid qsub response: {0}")]
    InvalidSubmitResponse(String),

    /// A wall time string could not be parsed.
    #[error("Invalid wall time: {0}")]
    InvalidWallTime(String),

    /// A memory size string could not be parsed.
    #[error("Invalid memory size: {0}")]
    InvalidMemory(String),

    /// A path that cannot be written into a directive unchanged.
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML configuration decoding error.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),
}

impl GridError {
    /// The raw scheduler text attached to a submit failure, if any.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            GridError::InvalidSubmitResponse(raw) => Some(raw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::InvalidSubmitResponse("garbage output".to_string());
        assert_eq!(err.to_string(), "Invalid qsub response: garbage output");

        let err = GridError::InvalidWallTime("1:xx".to_string());
        assert_eq!(err.to_string(), "Invalid wall time: 1:xx");

        let err = GridError::ConfigError("bad flag".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad flag");

        let err = GridError::NonUtf8Path("/w/\u{FFFD}".to_string());
        assert_eq!(err.to_string(), "Path is not valid UTF-8: /w/\u{FFFD}");
    }

    #[test]
    fn test_raw_response() {
        let raw = "warning: foo\nnot a job id";
        let err = GridError::InvalidSubmitResponse(raw.to_string());
        assert_eq!(err.raw_response(), Some(raw));

        assert!(GridError::InvalidMemory("x".into()).raw_response().is_none());
    }
}
