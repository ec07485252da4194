use thiserror::Error;

use crate::core::data::buffer_descriptor::BufferDescriptor;

/// Multiplicative zoom step for one wheel notch.
pub const WHEEL_ZOOM_FACTOR: f64 = 1.2;

/// Multiplicative zoom step for the zoom in / zoom out commands.
pub const STEP_ZOOM_FACTOR: f64 = 2.0;

/// Zoom level at which `magnification` reports 1.
const REFERENCE_ZOOM: f64 = 0.002;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewStateError {
    #[error("zoom level must be finite and within (0, 1), got {zoom}")]
    ZoomOutOfRange { zoom: f64 },

    #[error("view centre must be finite, got ({real}, {imag})")]
    NonFiniteCentre { real: f64, imag: f64 },
}

/// Position and scale of the view onto the complex plane.
///
/// `zoom_level` is the distance in the plane between horizontally (or
/// vertically) adjacent pixels. Smaller values zoom further in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom_level: f64,
    center_real: f64,
    center_imag: f64,
}

impl ViewState {
    pub fn new(zoom_level: f64, center_real: f64, center_imag: f64) -> Result<Self, ViewStateError> {
        if !zoom_level.is_finite() || zoom_level <= 0.0 || zoom_level >= 1.0 {
            return Err(ViewStateError::ZoomOutOfRange { zoom: zoom_level });
        }

        if !center_real.is_finite() || !center_imag.is_finite() {
            return Err(ViewStateError::NonFiniteCentre {
                real: center_real,
                imag: center_imag,
            });
        }

        Ok(Self {
            zoom_level,
            center_real,
            center_imag,
        })
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    #[must_use]
    pub fn center_real(&self) -> f64 {
        self.center_real
    }

    #[must_use]
    pub fn center_imag(&self) -> f64 {
        self.center_imag
    }

    /// User-facing zoom figure, 1.0 at the reference scale.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        REFERENCE_ZOOM / self.zoom_level
    }

    /// Drags the view by a pixel delta.
    pub fn pan_by_pixels(&self, dx: f64, dy: f64) -> Result<Self, ViewStateError> {
        Self::new(
            self.zoom_level,
            self.center_real + dx * self.zoom_level,
            self.center_imag + dy * self.zoom_level,
        )
    }

    pub fn zoom_in(&self) -> Result<Self, ViewStateError> {
        Self::new(
            self.zoom_level / STEP_ZOOM_FACTOR,
            self.center_real,
            self.center_imag,
        )
    }

    pub fn zoom_out(&self) -> Result<Self, ViewStateError> {
        Self::new(
            self.zoom_level * STEP_ZOOM_FACTOR,
            self.center_real,
            self.center_imag,
        )
    }

    /// Wheel zoom that keeps the plane point under `cursor` fixed.
    ///
    /// `cursor` is in buffer coordinates; a positive `wheel_delta` zooms in.
    pub fn zoom_at(
        &self,
        wheel_delta: i32,
        cursor: (f64, f64),
        buffer: &BufferDescriptor,
    ) -> Result<Self, ViewStateError> {
        let distance_real = (cursor.0 - buffer.width() as f64 / 2.0) * self.zoom_level;
        let distance_imag = (cursor.1 - buffer.height() as f64 / 2.0) * self.zoom_level;

        let (zoom_level, shift) = if wheel_delta > 0 {
            (
                self.zoom_level / WHEEL_ZOOM_FACTOR,
                1.0 - 1.0 / WHEEL_ZOOM_FACTOR,
            )
        } else {
            (self.zoom_level * WHEEL_ZOOM_FACTOR, 1.0 - WHEEL_ZOOM_FACTOR)
        };

        Self::new(
            zoom_level,
            self.center_real + distance_real * shift,
            self.center_imag + distance_imag * shift,
        )
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom_level: 0.001,
            center_real: 0.001643721971153,
            center_imag: 0.822467633298876,
        }
    }
}
