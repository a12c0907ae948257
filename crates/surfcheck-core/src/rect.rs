//! Rect - Rectangular region of interest
//!
//! Regions are given by their corners: inclusive lower bound, exclusive
//! upper bound on both axes. This matches the `[x_min, y_min, x_max, y_max]`
//! bounds convention used by capture validation harnesses.

use crate::surface::Surface;

/// An axis-aligned rectangle with exclusive upper bounds
///
/// A small Copy type; corners are signed so callers can pass regions that
/// extend past the surface edges. No constructor validates the corners:
/// an inverted or zero-extent rect is simply empty and matches no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate (inclusive)
    pub x_min: i32,
    /// Top y coordinate (inclusive)
    pub y_min: i32,
    /// Right x coordinate (exclusive)
    pub x_max: i32,
    /// Bottom y coordinate (exclusive)
    pub y_max: i32,
}

impl Rect {
    /// Create a new rect from its corners
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Create a rect from a `[x_min, y_min, x_max, y_max]` bounds array
    pub const fn from_bounds(bounds: [i32; 4]) -> Self {
        Self {
            x_min: bounds[0],
            y_min: bounds[1],
            x_max: bounds[2],
            y_max: bounds[3],
        }
    }

    /// Create the rect covering an entire surface
    pub fn of_surface(surface: &Surface) -> Self {
        Self {
            x_min: 0,
            y_min: 0,
            x_max: surface.width() as i32,
            y_max: surface.height() as i32,
        }
    }

    /// Get the width (0 for inverted rects)
    #[inline]
    pub fn width(&self) -> i32 {
        (self.x_max - self.x_min).max(0)
    }

    /// Get the height (0 for inverted rects)
    #[inline]
    pub fn height(&self) -> i32 {
        (self.y_max - self.y_min).max(0)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Check if the rect contains no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_min >= self.x_max || self.y_min >= self.y_max
    }

    /// Check if a point is inside the rect
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x < self.x_max && y >= self.y_min && y < self.y_max
    }

    /// Compute the intersection of two rects
    ///
    /// Disjoint rects produce an empty result.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            x_min: self.x_min.max(other.x_min),
            y_min: self.y_min.max(other.y_min),
            x_max: self.x_max.min(other.x_max),
            y_max: self.y_max.min(other.y_max),
        }
    }

    /// Clip the rect to a surface extent
    ///
    /// The result lies entirely within `[0, width) x [0, height)` and may
    /// be empty.
    pub fn clip_to(&self, width: u32, height: u32) -> Rect {
        self.intersect(&Rect::new(0, 0, width as i32, height as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_and_area() {
        let r = Rect::new(1, 1, 3, 3);
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 2);
        assert_eq!(r.area(), 4);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_inverted_rect_is_empty() {
        let r = Rect::new(5, 5, 2, 8);
        assert!(r.is_empty());
        assert_eq!(r.width(), 0);
        assert_eq!(r.area(), 0);
    }

    #[test]
    fn test_zero_extent_is_empty() {
        assert!(Rect::new(3, 0, 3, 10).is_empty());
        assert!(Rect::new(0, 7, 10, 7).is_empty());
    }

    #[test]
    fn test_contains_point_exclusive_upper() {
        let r = Rect::new(0, 0, 4, 4);
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(3, 3));
        assert!(!r.contains_point(4, 3));
        assert!(!r.contains_point(3, 4));
        assert!(!r.contains_point(-1, 0));
    }

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 6, 6);
        assert_eq!(a.intersect(&b), Rect::new(2, 2, 4, 4));
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, 5, 8, 8);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn test_clip_to_surface_extent() {
        let r = Rect::new(-3, -3, 100, 100);
        assert_eq!(r.clip_to(8, 6), Rect::new(0, 0, 8, 6));
    }

    #[test]
    fn test_from_bounds_layout() {
        let r = Rect::from_bounds([1, 2, 3, 4]);
        assert_eq!(r, Rect::new(1, 2, 3, 4));
    }
}
