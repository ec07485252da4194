use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum BufferDescriptorError {
    #[error("buffer dimensions must be non-zero: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("buffer dimensions are too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    #[error("buffer holds {actual} pixels but {width}x{height} needs {expected}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Dimensions of a caller-owned, row-major pixel buffer.
///
/// Pixel offsets are measured from the centre: buffer column `col` maps to
/// `x = col - half_width` with `half_width = width / 2`, rows likewise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BufferDescriptor {
    width: u32,
    height: u32,
}

impl BufferDescriptor {
    pub fn new(width: u32, height: u32) -> Result<Self, BufferDescriptorError> {
        if width == 0 || height == 0 {
            return Err(BufferDescriptorError::ZeroSize { width, height });
        }

        if width > i32::MAX as u32
            || height > i32::MAX as u32
            || (width as usize).checked_mul(height as usize).is_none()
        {
            return Err(BufferDescriptorError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    #[must_use]
    pub fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Offset of buffer index `(col, row)` from the centre.
    #[must_use]
    pub fn offset_of(&self, col: u32, row: u32) -> Point {
        Point {
            x: col as i32 - self.half_width(),
            y: row as i32 - self.half_height(),
        }
    }

    /// Every offset in the buffer, row 0 first.
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        let top_left = self.offset_of(0, 0);
        let bottom_right = self.offset_of(self.width - 1, self.height - 1);

        PixelRect::new(top_left, bottom_right)
            .unwrap_or_else(|_| unreachable!("non-empty buffer always spans at least one pixel"))
    }

    pub fn check_buffer(&self, buffer: &[u32]) -> Result<(), BufferDescriptorError> {
        if buffer.len() != self.len() {
            return Err(BufferDescriptorError::LengthMismatch {
                width: self.width,
                height: self.height,
                expected: self.len(),
                actual: buffer.len(),
            });
        }

        Ok(())
    }
}
