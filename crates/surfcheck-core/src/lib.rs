//! Surfcheck Core - Captured-surface pixel validation
//!
//! Test-support library for validating frames captured from a rendering
//! pipeline. Its one job is the blackish-pixel count: how many pixels inside
//! a region of interest have red, green, and blue channels all strictly
//! below a threshold. Harnesses use the count to verify that rendered output
//! contains an expected dark region (overlay coverage, composition checks).
//!
//! - [`Surface`] - a captured RGBA8 frame
//! - [`Rect`] - the region of interest, exclusive upper bounds
//! - [`Surface::count_blackish`] / [`Surface::count_blackish_parallel`] -
//!   the counting reduction
//!
//! Capture itself, thresholds, and pass/fail policy live in the calling
//! harness; this crate only counts.

pub mod count;
pub mod error;
pub mod rect;
pub mod surface;

pub use error::{Error, Result};
pub use rect::Rect;
pub use surface::{BYTES_PER_PIXEL, Surface};
