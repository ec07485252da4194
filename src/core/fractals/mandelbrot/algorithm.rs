use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::params::{MandelbrotParams, ESCAPE_RADIUS_SQUARED};
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PlaneMapping};
use crate::core::util::real::Real;

const INV_LN_2: f32 = 1.0 / std::f32::consts::LN_2;

/// Escape-time evaluation of `z <- z^2 + c` starting from `z = c`.
///
/// Iteration state lives in `R`; the smoothing step always runs in `f32`
/// on the narrowed squared magnitude.
#[inline]
#[must_use]
pub fn escape_time<R: Real>(c: Complex<R>, max_iterations: u32) -> EscapeResult {
    let escape = R::from_f64(ESCAPE_RADIUS_SQUARED);
    let mut z = c;

    for iteration in 0..max_iterations {
        let magnitude_squared = z.magnitude_squared();

        if magnitude_squared > escape {
            return EscapeResult::escaped(smooth(iteration, magnitude_squared.narrow()));
        }

        z = z * z + c;
    }

    EscapeResult::INSIDE
}

/// `n + 1 - log2(ln(|z|))`
#[inline]
fn smooth(iteration: u32, magnitude_squared: f32) -> f32 {
    (iteration + 1) as f32 - magnitude_squared.sqrt().ln().ln() * INV_LN_2
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm<R: Real> {
    mapping: PlaneMapping<R>,
    max_iterations: u32,
}

impl<R: Real> MandelbrotAlgorithm<R> {
    #[must_use]
    pub fn new(view: &ViewState) -> Self {
        Self {
            mapping: PlaneMapping::from_view(view),
            max_iterations: MandelbrotParams::from_view(view).max_iterations(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl<R: Real> FractalAlgorithm for MandelbrotAlgorithm<R> {
    type Success = EscapeResult;
    type Failure = Infallible;

    #[inline]
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.mapping);

        Ok(escape_time(c, self.max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        let result = escape_time(Complex::new(0.0_f64, 0.0), 10_000);

        assert_eq!(result, EscapeResult::INSIDE);
        assert_eq!(result.smoothed, 0.0);
    }

    #[test]
    fn test_origin_never_escapes_in_single_precision() {
        assert!(!escape_time(Complex::new(0.0_f32, 0.0), 10_000).escaped);
    }

    #[test]
    fn test_zero_cap_reports_inside() {
        assert_eq!(escape_time(Complex::new(10.0_f64, 10.0), 0), EscapeResult::INSIDE);
    }

    #[test]
    fn test_far_point_escapes_on_first_step() {
        // |c|^2 = 9, escapes at n = 0: 1 - log2(ln(3))
        let result = escape_time(Complex::new(3.0_f32, 0.0), 100);
        let expected = 1.0 - 3.0_f32.ln().ln() * INV_LN_2;

        assert!(result.escaped);
        assert_eq!(result.smoothed, expected);
    }

    #[test]
    fn test_point_escapes_after_iterating() {
        // c = 1: z = 1, 2, 5 -> escapes once |z|^2 = 25 at n = 2
        let result = escape_time(Complex::new(1.0_f64, 0.0), 100);
        let expected = 3.0 - 5.0_f32.ln().ln() * INV_LN_2;

        assert!(result.escaped);
        assert_eq!(result.smoothed, expected);
    }

    #[test]
    fn test_boundary_magnitude_does_not_escape() {
        // c = -2 sits on the set: z stays at 2 and |z|^2 == 4 never exceeds the radius
        let result = escape_time(Complex::new(-2.0_f64, 0.0), 50);

        assert!(!result.escaped);
    }

    #[test]
    fn test_smoothed_value_grows_towards_the_set() {
        let far = escape_time(Complex::new(0.5_f64, 0.0), 1000);
        let near = escape_time(Complex::new(0.26_f64, 0.0), 1000);

        assert!(far.escaped && near.escaped);
        assert!(near.smoothed > far.smoothed);
    }

    fn doubled_product_reference(c: Complex<f32>, max_iterations: u32) -> EscapeResult {
        let (mut zr, mut zi) = (c.real, c.imag);

        for iteration in 0..max_iterations {
            let (re2, im2) = (zr * zr, zi * zi);
            if re2 + im2 > 4.0 {
                return EscapeResult::escaped(smooth(iteration, re2 + im2));
            }
            zi = (zr + zr) * zi + c.imag;
            zr = re2 - im2 + c.real;
        }

        EscapeResult::INSIDE
    }

    #[test]
    fn test_complex_square_matches_doubled_product_update() {
        for step in 0..400 {
            let c = Complex::new(-2.1_f32 + step as f32 * 0.007, 0.63 - step as f32 * 0.003);

            assert_eq!(escape_time(c, 500), doubled_product_reference(c, 500), "c = {c:?}");
        }
    }

    #[test]
    fn test_escape_threshold_is_the_shared_radius() {
        // |c|^2 just above the radius escapes immediately, exactly on it does not
        let on = escape_time(Complex::new(0.0_f64, ESCAPE_RADIUS_SQUARED.sqrt()), 1);
        let above = escape_time(Complex::new(0.0_f64, 2.000_001), 1);

        assert!(!on.escaped);
        assert!(above.escaped);
    }

    #[test]
    fn test_compute_maps_pixel_before_iterating() {
        let view = ViewState::new(0.5, 0.0, 0.0).unwrap();
        let algorithm = MandelbrotAlgorithm::<f64>::new(&view);

        // offset (2, 0) at zoom 0.5 is c = 1
        let result = algorithm.compute(Point { x: 2, y: 0 }).unwrap();

        assert_eq!(result, escape_time(Complex::new(1.0_f64, 0.0), algorithm.max_iterations()));
    }

    #[test]
    fn test_single_and_double_agree_away_from_boundary() {
        let view = ViewState::new(0.01, -0.75, 0.2).unwrap();
        let single = MandelbrotAlgorithm::<f32>::new(&view);
        let double = MandelbrotAlgorithm::<f64>::new(&view);

        let a = single.compute(Point { x: -100, y: -60 }).unwrap();
        let b = double.compute(Point { x: -100, y: -60 }).unwrap();

        assert_eq!(a.escaped, b.escaped);
        assert!((a.smoothed - b.smoothed).abs() < 1e-3);
    }
}
