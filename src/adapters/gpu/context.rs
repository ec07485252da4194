use tracing::debug;

use crate::adapters::gpu::shader::GpuPrecision;
use crate::core::actions::render_frame::errors::{RenderError, RenderResult};

/// Device and queue opened for a single frame.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Opens the high-performance adapter with the features `precision` needs.
    pub fn acquire(precision: GpuPrecision) -> RenderResult<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| match e {
            wgpu::RequestAdapterError::NotFound { .. } => {
                RenderError::device_unavailable("no gpu adapter available")
            }
            other => RenderError::device_unavailable(format!("wgpu request_adapter failed: {other:?}")),
        })?;

        let info = adapter.get_info();
        debug!(adapter = %info.name, backend = ?info.backend, "gpu adapter selected");

        let required_features = precision.required_features();
        if !adapter.features().contains(required_features) {
            return Err(RenderError::device_unavailable(format!(
                "adapter {} does not support {:?}",
                info.name, required_features
            )));
        }

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("mandelbrot-device"),
            required_features,
            required_limits: adapter.limits(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        }))
        .map_err(|e| RenderError::compute_failure(format!("wgpu request_device failed: {e:?}")))?;

        Ok(Self { device, queue })
    }
}
