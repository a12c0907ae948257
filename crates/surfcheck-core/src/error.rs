//! Error types for surfcheck-core
//!
//! Errors are limited to construction-time contract failures: building a
//! surface with bad dimensions or a mismatched buffer, or writing a pixel
//! outside the surface. The counting operations themselves never fail;
//! degenerate regions simply count zero pixels.

use thiserror::Error;

/// Surfcheck error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid surface dimensions
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match the surface dimensions
    #[error("buffer size mismatch: expected {expected} bytes for {width}x{height}, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinates out of bounds
    #[error("pixel out of bounds: ({x}, {y}) on {width}x{height} surface")]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Result type alias for surfcheck operations
pub type Result<T> = std::result::Result<T, Error>;
