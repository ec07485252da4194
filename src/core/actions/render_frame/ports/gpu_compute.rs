use crate::core::actions::render_frame::errors::RenderError;
use crate::core::data::render_request::RenderRequest;

/// Accelerator that evaluates a whole frame in one dispatch.
///
/// Called only for GPU backends, with a buffer already checked against
/// `request.buffer`. Implementations pick the precision from
/// `request.backend` and must block until `output` holds the frame.
pub trait GpuCompute {
    fn compute_frame(&self, request: &RenderRequest, output: &mut [u32]) -> Result<(), RenderError>;
}
