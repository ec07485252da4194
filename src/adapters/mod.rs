#[cfg(feature = "gpu")]
pub mod gpu;
#[cfg(not(feature = "gpu"))]
pub mod unavailable_gpu;

#[cfg(feature = "gpu")]
pub type DefaultGpu = gpu::WgpuCompute;
#[cfg(not(feature = "gpu"))]
pub type DefaultGpu = unavailable_gpu::UnavailableGpu;
