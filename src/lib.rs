//! Mandelbrot renderer with interchangeable execution backends.
//!
//! Every backend runs the same per-pixel pipeline: a pixel offset from the
//! buffer centre is mapped onto the complex plane, iterated with the
//! escape-time algorithm, smoothed, and coloured with a cyclic banded
//! palette. Serial and CPU-parallel output is bit-identical; the GPU
//! backends (behind the `gpu` feature) evaluate the same kernel in single
//! or double precision.
//!
//! ```no_run
//! use mandelbrot_bench::{render, Backend, BufferDescriptor, RenderRequest, ViewState};
//!
//! let descriptor = BufferDescriptor::new(800, 600)?;
//! let request = RenderRequest::new(ViewState::default(), descriptor, Backend::CpuParallel);
//! let mut pixels = vec![0u32; descriptor.len()];
//!
//! render(&mut pixels, &request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod adapters;
mod controllers;
mod core;

pub use crate::adapters::DefaultGpu;
#[cfg(feature = "gpu")]
pub use crate::adapters::gpu::WgpuCompute;
#[cfg(not(feature = "gpu"))]
pub use crate::adapters::unavailable_gpu::UnavailableGpu;

pub use crate::controllers::benchmark::{benchmark, benchmark_all, BenchmarkReport, DEFAULT_FRAMES};
pub use crate::controllers::compare::{compare_with_serial, diff_frames, ParityReport};
pub use crate::controllers::render::{render, render_frame, render_timed};

pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::dispatch_frame::dispatch_frame;
pub use crate::core::actions::render_frame::errors::{RenderError, RenderResult};
pub use crate::core::actions::render_frame::ports::gpu_compute::GpuCompute;

pub use crate::core::data::backend::Backend;
pub use crate::core::data::buffer_descriptor::{BufferDescriptor, BufferDescriptorError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::view_state::{ViewState, ViewStateError, STEP_ZOOM_FACTOR, WHEEL_ZOOM_FACTOR};

pub use crate::core::fractals::mandelbrot::algorithm::{escape_time, MandelbrotAlgorithm};
pub use crate::core::fractals::mandelbrot::colour_map::{banded_colour, palette_index, SmoothBandedColourMap};
pub use crate::core::fractals::mandelbrot::params::{max_iterations_for_zoom, MandelbrotParams, ESCAPE_RADIUS_SQUARED};
pub use crate::core::fractals::mandelbrot::pixel_pipeline::MandelbrotPixelPipeline;

pub use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PlaneMapping};
pub use crate::core::util::real::Real;
