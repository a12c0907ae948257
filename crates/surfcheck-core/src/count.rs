//! Blackish-pixel counting
//!
//! The one reduction this library exists for: count the pixels inside a
//! region of interest whose red, green, and blue channels are each strictly
//! below a threshold. Validation harnesses use it to check that a captured
//! frame contains an expected dark region (for example, that an overlay
//! actually covered part of the screen).
//!
//! The reduction is an accumulate-and-combine fold: each partition of the
//! region counts its own matches into a private accumulator, and partial
//! counts merge by integer addition. Addition is associative and
//! commutative, so the sequential and parallel entry points always agree.

use rayon::prelude::*;

use crate::rect::Rect;
use crate::surface::{BYTES_PER_PIXEL, Surface};

/// Minimum rows per rayon work unit, to keep task overhead below the work
const MIN_ROWS_PER_TASK: usize = 16;

impl Surface {
    /// Count blackish pixels inside a region of interest.
    ///
    /// A pixel counts when its red, green, and blue channels are each
    /// strictly less than `threshold`; alpha is ignored. The comparison is
    /// strict, so a channel exactly equal to the threshold does not match,
    /// and `threshold == 0` matches nothing.
    ///
    /// `bounds` uses inclusive-lower/exclusive-upper corners and is clipped
    /// to the surface. A degenerate region (empty, inverted, or entirely
    /// outside the surface) counts zero; no error is signaled.
    pub fn count_blackish(&self, threshold: u8, bounds: &Rect) -> i32 {
        let clipped = bounds.clip_to(self.width(), self.height());
        if clipped.is_empty() {
            return 0;
        }
        let mut count = 0;
        for y in clipped.y_min..clipped.y_max {
            count += count_row_span(
                self.row(y as u32),
                clipped.x_min as usize,
                clipped.x_max as usize,
                threshold,
            );
        }
        count
    }

    /// Count blackish pixels inside a region of interest, in parallel.
    ///
    /// Same contract as [`Surface::count_blackish`]. The region is
    /// partitioned by rows across the rayon thread pool; each partition
    /// accumulates a private partial count and the partials are summed.
    pub fn count_blackish_parallel(&self, threshold: u8, bounds: &Rect) -> i32 {
        let clipped = bounds.clip_to(self.width(), self.height());
        if clipped.is_empty() {
            return 0;
        }
        (clipped.y_min..clipped.y_max)
            .into_par_iter()
            .with_min_len(MIN_ROWS_PER_TASK)
            .map(|y| {
                count_row_span(
                    self.row(y as u32),
                    clipped.x_min as usize,
                    clipped.x_max as usize,
                    threshold,
                )
            })
            .sum()
    }
}

/// Count matching pixels in the `[x_min, x_max)` span of one packed RGBA row.
#[inline]
fn count_row_span(row: &[u8], x_min: usize, x_max: usize, threshold: u8) -> i32 {
    let span = &row[x_min * BYTES_PER_PIXEL..x_max * BYTES_PER_PIXEL];
    let mut n = 0;
    for px in span.chunks_exact(BYTES_PER_PIXEL) {
        if px[0] < threshold && px[1] < threshold && px[2] < threshold {
            n += 1;
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_row_span_strict_threshold() {
        // Three pixels: below, equal, above the threshold
        let row = [99, 99, 99, 255, 100, 100, 100, 255, 101, 101, 101, 255];
        assert_eq!(count_row_span(&row, 0, 3, 100), 1);
    }

    #[test]
    fn test_count_row_span_partial_span() {
        let row = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(count_row_span(&row, 1, 2, 10), 1);
        assert_eq!(count_row_span(&row, 1, 1, 10), 0);
    }

    #[test]
    fn test_count_row_span_mixed_channels() {
        // One channel at the threshold disqualifies the pixel
        let row = [10, 10, 50, 255, 10, 10, 10, 255];
        assert_eq!(count_row_span(&row, 0, 2, 50), 1);
    }
}
