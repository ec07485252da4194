use tracing::info;

use crate::controllers::render::render;
use crate::core::actions::render_frame::errors::RenderResult;
use crate::core::data::backend::Backend;
use crate::core::data::colour::Colour;
use crate::core::data::render_request::RenderRequest;

/// How far one backend's frame is from the serial reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityReport {
    pub backend: Backend,
    pub pixels: usize,
    pub differing_pixels: usize,
    pub max_channel_delta: u8,
}

impl ParityReport {
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.differing_pixels == 0
    }
}

/// Renders `request` on Serial and on `request.backend` and diffs the frames.
pub fn compare_with_serial(request: &RenderRequest) -> RenderResult<ParityReport> {
    let mut reference = vec![0; request.buffer.len()];
    let mut candidate = vec![0; request.buffer.len()];

    render(&mut reference, &request.with_backend(Backend::Serial))?;
    render(&mut candidate, request)?;

    let report = diff_frames(request.backend, &reference, &candidate);
    info!(
        backend = %report.backend,
        differing = report.differing_pixels,
        max_delta = report.max_channel_delta,
        "parity check finished"
    );

    Ok(report)
}

#[must_use]
pub fn diff_frames(backend: Backend, reference: &[u32], candidate: &[u32]) -> ParityReport {
    let mut differing_pixels = 0;
    let mut max_channel_delta = 0;

    for (&a, &b) in reference.iter().zip(candidate) {
        if a != b {
            differing_pixels += 1;
            max_channel_delta = max_channel_delta.max(Colour::unpack(a).max_channel_delta(Colour::unpack(b)));
        }
    }

    ParityReport {
        backend,
        pixels: reference.len().min(candidate.len()),
        differing_pixels,
        max_channel_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::buffer_descriptor::BufferDescriptor;
    use crate::core::data::view_state::ViewState;

    #[test]
    fn test_diff_counts_changed_pixels() {
        let reference = [0x000000, 0x102030, 0xffffff];
        let candidate = [0x000000, 0x10201a, 0xfffffe];

        let report = diff_frames(Backend::GpuSingle, &reference, &candidate);

        assert_eq!(report.pixels, 3);
        assert_eq!(report.differing_pixels, 2);
        assert_eq!(report.max_channel_delta, 0x16);
        assert!(!report.is_identical());
    }

    #[test]
    fn test_parallel_is_identical_to_serial() {
        let request = RenderRequest::new(
            ViewState::new(0.005, -0.75, 0.1).unwrap(),
            BufferDescriptor::new(31, 21).unwrap(),
            Backend::CpuParallel,
        );

        let report = compare_with_serial(&request).unwrap();

        assert!(report.is_identical());
        assert_eq!(report.pixels, 31 * 21);
    }
}
