use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::controllers::render::render;
use crate::core::actions::render_frame::errors::{RenderError, RenderResult};
use crate::core::data::backend::Backend;
use crate::core::data::buffer_descriptor::BufferDescriptor;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::mandelbrot::params::max_iterations_for_zoom;

/// Frames rendered per backend when no count is given.
pub const DEFAULT_FRAMES: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub backend: Backend,
    pub frames: u32,
    pub total: Duration,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
}

impl BenchmarkReport {
    #[must_use]
    pub fn average_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1000.0 / self.frames as f64
    }

    #[must_use]
    pub fn frames_per_second(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.frames as f64 / secs
    }
}

/// Renders the same request `frames` times into one buffer.
pub fn benchmark(buffer: &mut [u32], request: &RenderRequest, frames: u32) -> RenderResult<BenchmarkReport> {
    if frames == 0 {
        return Err(RenderError::invalid_configuration("benchmark needs at least one frame"));
    }

    let start = Instant::now();
    for _ in 0..frames {
        render(buffer, request)?;
    }
    let total = start.elapsed();

    let report = BenchmarkReport {
        backend: request.backend,
        frames,
        total,
        max_iterations: max_iterations_for_zoom(request.view.zoom_level()),
        width: request.buffer.width(),
        height: request.buffer.height(),
    };

    info!(
        backend = %report.backend,
        frames,
        average_ms = report.average_ms(),
        "benchmark finished"
    );

    Ok(report)
}

/// Benchmarks every backend in turn.
///
/// A failing backend is recorded and the remaining ones still run.
pub fn benchmark_all(
    buffer: &mut [u32],
    view: ViewState,
    descriptor: BufferDescriptor,
    frames: u32,
) -> Vec<(Backend, RenderResult<BenchmarkReport>)> {
    Backend::ALL
        .iter()
        .map(|&backend| {
            let request = RenderRequest::new(view, descriptor, backend);
            let result = benchmark(buffer, &request, frames);

            if let Err(err) = &result {
                warn!(%backend, error = %err, "backend skipped");
            }

            (backend, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::new(0.02, -0.5, 0.0).unwrap()
    }

    #[test]
    fn test_benchmark_reports_frames_and_iterations() {
        let descriptor = BufferDescriptor::new(16, 12).unwrap();
        let request = RenderRequest::new(view(), descriptor, Backend::Serial);
        let mut buffer = vec![0; descriptor.len()];

        let report = benchmark(&mut buffer, &request, 3).unwrap();

        assert_eq!(report.backend, Backend::Serial);
        assert_eq!(report.frames, 3);
        assert_eq!(report.max_iterations, max_iterations_for_zoom(0.02));
        assert_eq!((report.width, report.height), (16, 12));
    }

    #[test]
    fn test_benchmark_rejects_zero_frames() {
        let descriptor = BufferDescriptor::new(4, 4).unwrap();
        let request = RenderRequest::new(view(), descriptor, Backend::Serial);
        let mut buffer = vec![0; 16];

        assert!(matches!(
            benchmark(&mut buffer, &request, 0),
            Err(RenderError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_average_divides_total() {
        let report = BenchmarkReport {
            backend: Backend::CpuParallel,
            frames: 4,
            total: Duration::from_millis(100),
            max_iterations: 1,
            width: 1,
            height: 1,
        };

        assert!((report.average_ms() - 25.0).abs() < 1e-9);
        assert!((report.frames_per_second() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_benchmark_all_covers_every_backend() {
        let descriptor = BufferDescriptor::new(8, 8).unwrap();
        let mut buffer = vec![0; descriptor.len()];

        let results = benchmark_all(&mut buffer, view(), descriptor, 1);
        let backends: Vec<Backend> = results.iter().map(|(backend, _)| *backend).collect();

        assert_eq!(backends, Backend::ALL);
        for (backend, result) in &results {
            if !backend.is_gpu() {
                assert!(result.is_ok(), "{backend} failed: {result:?}");
            }
        }
    }
}
