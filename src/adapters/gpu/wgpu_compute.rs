use std::num::NonZeroU64;

use tracing::debug;
use wgpu::util::DeviceExt;

use crate::adapters::gpu::context::GpuContext;
use crate::adapters::gpu::shader::{build_shader, workgroup_count, GpuPrecision};
use crate::adapters::gpu::uniforms::uniform_bytes;
use crate::core::actions::render_frame::errors::{RenderError, RenderResult};
use crate::core::actions::render_frame::ports::gpu_compute::GpuCompute;
use crate::core::data::render_request::RenderRequest;

/// Error classes captured around the frame; anything else would reach the
/// device's uncaptured-error handler and panic.
const CAPTURED_ERRORS: [wgpu::ErrorFilter; 3] = [
    wgpu::ErrorFilter::Validation,
    wgpu::ErrorFilter::OutOfMemory,
    wgpu::ErrorFilter::Internal,
];

/// Runs the kernel through wgpu, opening a fresh device for every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct WgpuCompute;

impl WgpuCompute {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GpuCompute for WgpuCompute {
    fn compute_frame(&self, request: &RenderRequest, output: &mut [u32]) -> RenderResult<()> {
        let precision = GpuPrecision::for_backend(request.backend).ok_or_else(|| {
            RenderError::invalid_configuration(format!("{} is not a gpu backend", request.backend))
        })?;

        let context = GpuContext::acquire(precision)?;
        compute_on(&context, request, precision, output)
    }
}

fn compute_on(
    context: &GpuContext,
    request: &RenderRequest,
    precision: GpuPrecision,
    output: &mut [u32],
) -> RenderResult<()> {
    let device = &context.device;
    let width = request.buffer.width();
    let height = request.buffer.height();
    let output_size = (output.len() * std::mem::size_of::<u32>()) as u64;

    let limits = device.limits();
    if output_size > limits.max_storage_buffer_binding_size as u64 || output_size > limits.max_buffer_size {
        return Err(RenderError::compute_failure(format!(
            "{width}x{height} frame exceeds the device storage buffer limit"
        )));
    }

    for filter in CAPTURED_ERRORS {
        device.push_error_scope(filter);
    }

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mandelbrot-kernel"),
        source: wgpu::ShaderSource::Wgsl(build_shader(precision).into()),
    });

    let uniforms = uniform_bytes(request, precision);
    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("mandelbrot-bind-group-layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(uniforms.len() as u64),
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: false },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mandelbrot-pipeline-layout"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("mandelbrot-pipeline"),
        layout: Some(&pipeline_layout),
        module: &shader,
        entry_point: Some("main"),
        compilation_options: wgpu::PipelineCompilationOptions::default(),
        cache: None,
    });

    let params_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("mandelbrot-params"),
        contents: &uniforms,
        usage: wgpu::BufferUsages::UNIFORM,
    });

    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("mandelbrot-output"),
        size: output_size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });

    let readback_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("mandelbrot-readback"),
        size: output_size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("mandelbrot-bind-group"),
        layout: &bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: params_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: output_buffer.as_entire_binding(),
            },
        ],
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("mandelbrot-encoder"),
    });
    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("mandelbrot-pass"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, &bind_group, &[]);
        pass.dispatch_workgroups(workgroup_count(width), workgroup_count(height), 1);
    }
    encoder.copy_buffer_to_buffer(&output_buffer, 0, &readback_buffer, 0, output_size);
    context.queue.submit(Some(encoder.finish()));

    // scopes pop innermost first
    let scoped: Vec<_> = CAPTURED_ERRORS
        .iter()
        .rev()
        .map(|&filter| (filter, pollster::block_on(device.pop_error_scope())))
        .collect();
    first_scope_error(scoped)?;

    debug!(
        ?precision,
        groups_x = workgroup_count(width),
        groups_y = workgroup_count(height),
        "kernel submitted"
    );

    let buffer_slice = readback_buffer.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    buffer_slice.map_async(wgpu::MapMode::Read, move |res| {
        let _ = tx.send(res);
    });
    device
        .poll(wgpu::PollType::wait_indefinitely())
        .map_err(|e| RenderError::compute_failure(format!("wgpu poll failed: {e:?}")))?;
    rx.recv()
        .map_err(|_| RenderError::compute_failure("readback channel closed"))?
        .map_err(|e| RenderError::compute_failure(format!("readback map failed: {e:?}")))?;

    {
        let mapped = buffer_slice.get_mapped_range();
        let pixels: &[u32] = bytemuck::try_cast_slice(&mapped)
            .map_err(|e| RenderError::compute_failure(format!("readback layout: {e}")))?;
        output.copy_from_slice(pixels);
    }
    readback_buffer.unmap();

    Ok(())
}

fn first_scope_error(
    scoped: impl IntoIterator<Item = (wgpu::ErrorFilter, Option<wgpu::Error>)>,
) -> RenderResult<()> {
    match scoped.into_iter().find_map(|(filter, err)| err.map(|err| (filter, err))) {
        Some((filter, err)) => Err(RenderError::compute_failure(format!("gpu {filter:?} error: {err}"))),
        None => Ok(()),
    }
}
