mod context;
mod shader;
mod uniforms;
mod wgpu_compute;

pub use wgpu_compute::WgpuCompute;
