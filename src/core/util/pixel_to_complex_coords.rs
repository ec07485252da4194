use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::util::real::Real;

/// View parameters converted once into the working precision.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping<R: Real> {
    pub center: Complex<R>,
    pub zoom: R,
}

impl<R: Real> PlaneMapping<R> {
    #[must_use]
    pub fn from_view(view: &ViewState) -> Self {
        Self {
            center: Complex {
                real: R::from_f64(view.center_real()),
                imag: R::from_f64(view.center_imag()),
            },
            zoom: R::from_f64(view.zoom_level()),
        }
    }
}

/// Maps a pixel offset from the buffer centre onto the complex plane.
///
/// The offset is always formed in single precision and then widened, so
/// the double-precision pipeline sees the same offsets as the single one.
#[inline]
#[must_use]
pub fn pixel_to_complex_coords<R: Real>(pixel: Point, mapping: &PlaneMapping<R>) -> Complex<R> {
    let x = R::widen(pixel.x as f32);
    let y = R::widen(pixel.y as f32);

    Complex {
        real: mapping.center.real + x * mapping.zoom,
        imag: mapping.center.imag + y * mapping.zoom,
    }
}
