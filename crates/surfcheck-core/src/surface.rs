//! Surface - A captured RGBA frame
//!
//! The `Surface` structure holds one captured frame from a rendering
//! pipeline as a tightly packed, row-major RGBA buffer (4 bytes per pixel,
//! red first). Captures arrive from the host as raw byte buffers; this type
//! wraps them with dimension checking and per-pixel access.
//!
//! # Pixel layout
//!
//! - 8 bits per channel, channel order R, G, B, A
//! - Pixel (x, y) starts at byte offset `(y * width + x) * 4`
//! - Rows are contiguous; there is no padding or stride beyond the width

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A captured surface: width x height RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Create a new surface filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// the byte length would overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an externally captured RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * 4`, or [`Error::InvalidDimension`] for zero-area
    /// dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw RGBA bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the surface and return the raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Get one packed RGBA row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize * BYTES_PER_PIXEL;
        let end = start + self.width as usize * BYTES_PER_PIXEL;
        &self.data[start..end]
    }

    /// Get RGBA values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some((
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
        self.data[i + 3] = a;
        Ok(())
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = a;
        }
    }

    /// Fill a rectangular region with one color.
    ///
    /// The region is clipped to the surface; a rect that lies outside (or
    /// is inverted) fills nothing.
    pub fn fill_rect(&mut self, rect: &Rect, r: u8, g: u8, b: u8, a: u8) {
        let clipped = rect.clip_to(self.width, self.height);
        if clipped.is_empty() {
            return;
        }
        for y in clipped.y_min..clipped.y_max {
            for x in clipped.x_min..clipped.x_max {
                let i = self.offset(x as u32, y as u32);
                self.data[i] = r;
                self.data[i + 1] = g;
                self.data[i + 2] = b;
                self.data[i + 3] = a;
            }
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(Error::InvalidDimension { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let s = Surface::new(3, 2).unwrap();
        assert_eq!(s.width(), 3);
        assert_eq!(s.height(), 2);
        assert_eq!(s.as_raw().len(), 24);
        assert_eq!(s.get_rgba(2, 1), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_new_zero_dimension_fails() {
        assert!(Surface::new(0, 5).is_err());
        assert!(Surface::new(5, 0).is_err());
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(Surface::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(Surface::from_raw(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut s = Surface::new(4, 4).unwrap();
        s.set_rgba(1, 2, 10, 20, 30, 40).unwrap();
        assert_eq!(s.get_rgba(1, 2), Some((10, 20, 30, 40)));
        assert_eq!(s.get_rgba(2, 1), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_access_out_of_bounds() {
        let mut s = Surface::new(2, 2).unwrap();
        assert_eq!(s.get_rgba(2, 0), None);
        assert!(s.set_rgba(0, 2, 1, 2, 3, 4).is_err());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut s = Surface::new(4, 4).unwrap();
        s.fill_rect(&Rect::new(2, 2, 10, 10), 200, 200, 200, 255);
        assert_eq!(s.get_rgba(3, 3), Some((200, 200, 200, 255)));
        assert_eq!(s.get_rgba(1, 1), Some((0, 0, 0, 0)));
    }

    #[test]
    fn test_row_is_packed_rgba() {
        let mut s = Surface::new(2, 2).unwrap();
        s.set_rgba(0, 1, 1, 2, 3, 4).unwrap();
        s.set_rgba(1, 1, 5, 6, 7, 8).unwrap();
        assert_eq!(s.row(1), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
