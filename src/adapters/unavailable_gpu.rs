use crate::core::actions::render_frame::errors::{RenderError, RenderResult};
use crate::core::actions::render_frame::ports::gpu_compute::GpuCompute;
use crate::core::data::render_request::RenderRequest;

/// Stand-in used when the crate is built without the `gpu` feature.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableGpu;

impl UnavailableGpu {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GpuCompute for UnavailableGpu {
    fn compute_frame(&self, request: &RenderRequest, _output: &mut [u32]) -> RenderResult<()> {
        Err(RenderError::device_unavailable(format!(
            "{} requires building with the `gpu` feature",
            request.backend
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::backend::Backend;
    use crate::core::data::buffer_descriptor::BufferDescriptor;
    use crate::core::data::view_state::ViewState;

    #[test]
    fn test_reports_device_unavailable() {
        let request = RenderRequest::new(
            ViewState::default(),
            BufferDescriptor::new(2, 2).unwrap(),
            Backend::GpuDouble,
        );
        let mut output = [0; 4];

        let result = UnavailableGpu::new().compute_frame(&request, &mut output);

        assert!(matches!(result, Err(RenderError::DeviceUnavailable(msg)) if msg.contains("gpu")));
    }
}
