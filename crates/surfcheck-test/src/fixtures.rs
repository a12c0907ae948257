//! Surface fixtures for tests
//!
//! Builders for the capture patterns the regression tests need: uniform
//! fills, a contrasting inner block, and reproducible random noise.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use surfcheck_core::{Rect, Surface};

/// Create a surface filled with one color.
///
/// # Panics
///
/// Panics if the dimensions are invalid; fixtures are for tests, where a
/// bad dimension is a bug in the test itself.
pub fn uniform(width: u32, height: u32, rgba: (u8, u8, u8, u8)) -> Surface {
    let mut s = Surface::new(width, height).expect("fixture dimensions");
    s.fill(rgba.0, rgba.1, rgba.2, rgba.3);
    s
}

/// Create a surface with an outer color and a contrasting inner block.
///
/// The classic overlay-validation pattern: bright background, dark block
/// where the overlay is expected to land.
pub fn with_inner_block(
    width: u32,
    height: u32,
    outer: (u8, u8, u8, u8),
    inner: (u8, u8, u8, u8),
    block: &Rect,
) -> Surface {
    let mut s = uniform(width, height, outer);
    s.fill_rect(block, inner.0, inner.1, inner.2, inner.3);
    s
}

/// Create a surface of reproducible random pixels from a seed.
pub fn random_surface(width: u32, height: u32, seed: u64) -> Surface {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..width as usize * height as usize * 4)
        .map(|_| rng.random())
        .collect();
    Surface::from_raw(width, height, data).expect("fixture dimensions")
}
