//! surfcheck-test - Regression test framework for surfcheck
//!
//! Provides a regression test harness supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (manual inspection)
//!
//! plus surface fixtures for building capture patterns in tests.
//!
//! # Usage
//!
//! ```ignore
//! use surfcheck_test::{RegParams, fixtures};
//! use surfcheck_core::Rect;
//!
//! let mut rp = RegParams::new("count");
//! let s = fixtures::uniform(4, 4, (0, 0, 0, 255));
//! rp.compare_counts(16, s.count_blackish(255, &Rect::of_surface(&s)));
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // surfcheck-test is at crates/surfcheck-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
