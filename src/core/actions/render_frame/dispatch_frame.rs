use std::convert::Infallible;

use tracing::{debug, warn};

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::render_frame::errors::RenderResult;
use crate::core::actions::render_frame::ports::gpu_compute::GpuCompute;
use crate::core::data::backend::Backend;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::pixel_pipeline::MandelbrotPixelPipeline;

/// Fills `output` with the frame described by `request`.
///
/// The buffer length is checked before any work starts. CPU backends use
/// the single-precision pipeline and cannot fail past that check; GPU
/// backends are delegated to `gpu` and its errors are returned unchanged.
#[tracing::instrument(
    level = "debug",
    skip(output, request, gpu),
    fields(
        backend = %request.backend,
        width = request.buffer.width(),
        height = request.buffer.height(),
    )
)]
pub fn dispatch_frame<G>(output: &mut [u32], request: &RenderRequest, gpu: &G) -> RenderResult<()>
where
    G: GpuCompute + ?Sized,
{
    request.buffer.check_buffer(output)?;

    let pixel_rect = request.buffer.pixel_rect();

    match request.backend {
        Backend::Serial => {
            let pipeline = MandelbrotPixelPipeline::<f32>::new(&request.view);
            debug!(max_iterations = pipeline.max_iterations(), "rendering on one thread");
            infallible(generate_fractal_serial(pixel_rect, &pipeline, output));
        }
        Backend::CpuParallel => {
            let pipeline = MandelbrotPixelPipeline::<f32>::new(&request.view);
            debug!(
                max_iterations = pipeline.max_iterations(),
                threads = rayon::current_num_threads(),
                "rendering rows in parallel"
            );
            infallible(generate_fractal_parallel_rayon(pixel_rect, &pipeline, output));
        }
        Backend::GpuSingle | Backend::GpuDouble => {
            gpu.compute_frame(request, output).inspect_err(|err| {
                warn!(backend = %request.backend, error = %err, "gpu render failed");
            })?;
        }
    }

    Ok(())
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
