use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::SmoothBandedColourMap;
use crate::core::util::real::Real;

/// Mapper, evaluator and colour map fused into one packed pixel.
#[derive(Debug)]
pub struct MandelbrotPixelPipeline<R: Real> {
    algorithm: MandelbrotAlgorithm<R>,
    colour_map: SmoothBandedColourMap,
}

impl<R: Real> MandelbrotPixelPipeline<R> {
    #[must_use]
    pub fn new(view: &ViewState) -> Self {
        Self {
            algorithm: MandelbrotAlgorithm::new(view),
            colour_map: SmoothBandedColourMap::new(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.algorithm.max_iterations()
    }
}

impl<R: Real> FractalAlgorithm for MandelbrotPixelPipeline<R> {
    type Success = u32;
    type Failure = Infallible;

    #[inline]
    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let escape = self.algorithm.compute(pixel)?;
        let colour = self.colour_map.map(escape.smoothed)?;

        Ok(colour.pack())
    }
}
