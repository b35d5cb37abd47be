//! Error types for compression operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Compression error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Input has zero length; there is nothing to compress.
    #[error("input is empty, nothing to compress")]
    EmptyInput,

    /// Artifact is corrupted, truncated or internally inconsistent.
    #[error("corrupt artifact: {message}")]
    CorruptArtifact { message: String },

    /// A bit sequence does not resolve to any entry of the code table.
    #[error("unknown symbol: bits at offset {bit_offset} match no code")]
    UnknownSymbol { bit_offset: usize },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// I/O error from an underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file.
    #[error("{action} {}: {source}", path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a corrupt artifact error.
    pub fn corrupted(message: impl Into<String>) -> Self {
        Error::CorruptArtifact {
            message: message.into(),
        }
    }

    /// Create a corrupt artifact error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptArtifact {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Create an unknown symbol error at the given bit offset.
    pub fn unknown_symbol(bit_offset: usize) -> Self {
        Error::UnknownSymbol { bit_offset }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Attach a path and the attempted action to an I/O error.
    pub fn file(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::File {
            action,
            path: path.into(),
            source,
        }
    }

    /// Check if error is recoverable (can retry with different parameters).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::BufferTooSmall { .. })
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::EmptyInput => "empty_input",
            Error::CorruptArtifact { .. } => "corrupt_artifact",
            Error::UnknownSymbol { .. } => "unknown_symbol",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::Io(_) | Error::File { .. } => "io_error",
            Error::InvalidConfig(_) => "invalid_config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Error::EmptyInput.category(), "empty_input");
        assert_eq!(Error::corrupted("bad").category(), "corrupt_artifact");
        assert_eq!(Error::unknown_symbol(3).category(), "unknown_symbol");
        assert_eq!(
            Error::file("reading", "a.txt", std::io::Error::other("x")).category(),
            "io_error"
        );
    }

    #[test]
    fn test_corrupted_at_message() {
        let err = Error::corrupted_at("padding count 9 out of range", 12);
        assert_eq!(
            err.to_string(),
            "corrupt artifact: padding count 9 out of range at offset 12"
        );
    }

    #[test]
    fn test_file_error_message() {
        let err = Error::file(
            "reading",
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "input file does not exist"),
        );
        assert_eq!(
            err.to_string(),
            "reading missing.txt: input file does not exist"
        );
    }

    #[test]
    fn test_corrupt_artifact_has_no_source() {
        use std::error::Error as _;
        assert!(Error::corrupted("bad").source().is_none());
        let err = Error::file("reading", "a", std::io::Error::other("x"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::buffer_too_small(10, 2).is_recoverable());
        assert!(!Error::EmptyInput.is_recoverable());
        assert!(!Error::unknown_symbol(0).is_recoverable());
    }
}
