use bytemuck::{Pod, Zeroable};

use crate::adapters::gpu::shader::GpuPrecision;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;
use crate::core::util::real::Real;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParamsF32 {
    center_re: f32,
    center_im: f32,
    zoom: f32,
    escape: f32,
    half_width: i32,
    half_height: i32,
    width: u32,
    height: u32,
    max_iterations: u32,
    _pad: [u32; 3],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParamsF64 {
    center_re: f64,
    center_im: f64,
    zoom: f64,
    escape: f64,
    half_width: i32,
    half_height: i32,
    width: u32,
    height: u32,
    max_iterations: u32,
    _pad: [u32; 3],
}

macro_rules! impl_params_new {
    ($params:ident, $real:ty) => {
        impl $params {
            #[must_use]
            pub fn new(request: &RenderRequest) -> Self {
                let mapping = PlaneMapping::<$real>::from_view(&request.view);
                let params = MandelbrotParams::from_view(&request.view);

                Self {
                    center_re: mapping.center.real,
                    center_im: mapping.center.imag,
                    zoom: mapping.zoom,
                    escape: <$real as Real>::from_f64(params.escape_radius_squared()),
                    half_width: request.buffer.half_width(),
                    half_height: request.buffer.half_height(),
                    width: request.buffer.width(),
                    height: request.buffer.height(),
                    max_iterations: params.max_iterations(),
                    _pad: [0; 3],
                }
            }
        }
    };
}

impl_params_new!(ParamsF32, f32);
impl_params_new!(ParamsF64, f64);

/// Uniform block contents for the kernel built at `precision`.
#[must_use]
pub fn uniform_bytes(request: &RenderRequest, precision: GpuPrecision) -> Vec<u8> {
    match precision {
        GpuPrecision::Single => bytemuck::bytes_of(&ParamsF32::new(request)).to_vec(),
        GpuPrecision::Double => bytemuck::bytes_of(&ParamsF64::new(request)).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::backend::Backend;
    use crate::core::data::buffer_descriptor::BufferDescriptor;
    use crate::core::data::view_state::ViewState;

    fn request() -> RenderRequest {
        RenderRequest::new(
            ViewState::new(0.001, 0.25, -0.5).unwrap(),
            BufferDescriptor::new(7, 4).unwrap(),
            Backend::GpuSingle,
        )
    }

    #[test]
    fn test_uniform_sizes_are_multiples_of_sixteen() {
        assert_eq!(std::mem::size_of::<ParamsF32>(), 48);
        assert_eq!(std::mem::size_of::<ParamsF64>(), 64);
    }

    #[test]
    fn test_single_precision_params() {
        let params = ParamsF32::new(&request());

        assert_eq!(params.center_re, 0.25);
        assert_eq!(params.center_im, -0.5);
        assert_eq!(params.zoom, 0.001_f32);
        assert_eq!(params.escape, 4.0);
        assert_eq!(params.half_width, 3);
        assert_eq!(params.half_height, 2);
        assert_eq!(params.max_iterations, 1536);
    }

    #[test]
    fn test_double_precision_params_keep_full_zoom() {
        let params = ParamsF64::new(&request());

        assert_eq!(params.zoom, 0.001_f64);
        assert_eq!(params.width, 7);
        assert_eq!(params.height, 4);
    }

    #[test]
    fn test_uniform_bytes_length_follows_precision() {
        assert_eq!(uniform_bytes(&request(), GpuPrecision::Single).len(), 48);
        assert_eq!(uniform_bytes(&request(), GpuPrecision::Double).len(), 64);
    }
}
