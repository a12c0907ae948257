//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// Golden file not found
    #[error("golden file not found: {path}")]
    GoldenNotFound { path: String },

    /// File comparison failed
    #[error("file comparison failed at index {index}: {path}")]
    FileMismatch { index: usize, path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
