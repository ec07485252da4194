use std::time::{Duration, Instant};

use crate::adapters::DefaultGpu;
use crate::core::actions::render_frame::dispatch_frame::dispatch_frame;
use crate::core::actions::render_frame::errors::RenderResult;
use crate::core::data::backend::Backend;
use crate::core::data::buffer_descriptor::BufferDescriptor;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::view_state::ViewState;

/// Renders `request` into the caller's buffer.
pub fn render(buffer: &mut [u32], request: &RenderRequest) -> RenderResult<()> {
    dispatch_frame(buffer, request, &DefaultGpu::default())
}

/// Flat form of [`render`] for hosts that keep the view as loose values.
pub fn render_frame(
    buffer: &mut [u32],
    width: u32,
    height: u32,
    zoom_level: f64,
    center_real: f64,
    center_imag: f64,
    backend: Backend,
) -> RenderResult<()> {
    let view = ViewState::new(zoom_level, center_real, center_imag)?;
    let descriptor = BufferDescriptor::new(width, height)?;

    render(buffer, &RenderRequest::new(view, descriptor, backend))
}

/// Renders once and reports how long the frame took.
pub fn render_timed(buffer: &mut [u32], request: &RenderRequest) -> RenderResult<Duration> {
    let start = Instant::now();
    render(buffer, request)?;

    Ok(start.elapsed())
}
