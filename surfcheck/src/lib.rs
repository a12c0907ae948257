//! Surfcheck - Captured-surface pixel validation
//!
//! Test-support library for validating captured surfaces: count the pixels
//! inside a region of interest whose red, green, and blue channels are all
//! strictly below a threshold. Harnesses compare the count against an
//! expectation to verify that rendered output contains a dark region where
//! one should be (overlay coverage, composition checks).
//!
//! # Example
//!
//! ```
//! use surfcheck::{Rect, Surface};
//!
//! // A 4x4 capture, dark 2x2 block in the middle
//! let mut surface = Surface::new(4, 4).unwrap();
//! surface.fill(200, 200, 200, 255);
//! surface.fill_rect(&Rect::new(1, 1, 3, 3), 50, 50, 50, 255);
//!
//! let count = surface.count_blackish(100, &Rect::new(1, 1, 3, 3));
//! assert_eq!(count, 4);
//! ```

// Re-export core types (the entire public API)
pub use surfcheck_core::*;
