use crate::core::data::view_state::ViewState;

/// Squared escape radius.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterations granted per decade of zoom.
const ITERATIONS_PER_DECADE: f64 = 512.0;

/// Iteration cap for a zoom level: `floor(-512 * log10(zoom))`.
///
/// Zoom levels of 1 and above give 0.
#[must_use]
pub fn max_iterations_for_zoom(zoom_level: f64) -> u32 {
    let cap = (-ITERATIONS_PER_DECADE * zoom_level.log10()).floor();

    if cap.is_nan() || cap <= 0.0 {
        0
    } else {
        cap as u32
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl MandelbrotParams {
    #[must_use]
    pub fn from_view(view: &ViewState) -> Self {
        Self {
            max_iterations: max_iterations_for_zoom(view.zoom_level()),
            escape_radius_squared: ESCAPE_RADIUS_SQUARED,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }
}
