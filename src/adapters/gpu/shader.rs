use crate::core::data::backend::Backend;
use crate::core::util::real::Real;

/// Edge length of the square compute workgroup declared in the kernel.
pub const WORKGROUP_SIZE: u32 = 16;

const TEMPLATE: &str = include_str!("mandelbrot.wgsl");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuPrecision {
    Single,
    Double,
}

impl GpuPrecision {
    #[must_use]
    pub fn for_backend(backend: Backend) -> Option<Self> {
        match backend {
            Backend::GpuSingle => Some(Self::Single),
            Backend::GpuDouble => Some(Self::Double),
            Backend::Serial | Backend::CpuParallel => None,
        }
    }

    #[must_use]
    pub fn scalar(self) -> &'static str {
        match self {
            Self::Single => <f32 as Real>::NAME,
            Self::Double => <f64 as Real>::NAME,
        }
    }

    #[must_use]
    pub fn required_features(self) -> wgpu::Features {
        match self {
            Self::Single => wgpu::Features::empty(),
            Self::Double => wgpu::Features::SHADER_F64,
        }
    }
}

/// Kernel source for one precision.
#[must_use]
pub fn build_shader(precision: GpuPrecision) -> String {
    TEMPLATE.replace("{real}", precision.scalar())
}

/// Workgroups needed to cover `extent` pixels along one axis.
#[must_use]
pub fn workgroup_count(extent: u32) -> u32 {
    extent.div_ceil(WORKGROUP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_precision_kernel_has_no_f64() {
        let source = build_shader(GpuPrecision::Single);

        assert!(!source.contains("{real}"));
        assert!(!source.contains("f64"));
        assert!(source.contains("center_re: f32"));
    }

    #[test]
    fn test_double_precision_kernel_keeps_f32_smoothing() {
        let source = build_shader(GpuPrecision::Double);

        assert!(!source.contains("{real}"));
        assert!(source.contains("center_re: f64"));
        assert!(source.contains("let c_re = params.center_re + f64(x) * params.zoom;"));
        assert!(source.contains("sqrt(f32(magnitude))"));
    }

    #[test]
    fn test_precision_for_backend() {
        assert_eq!(GpuPrecision::for_backend(Backend::GpuSingle), Some(GpuPrecision::Single));
        assert_eq!(GpuPrecision::for_backend(Backend::GpuDouble), Some(GpuPrecision::Double));
        assert_eq!(GpuPrecision::for_backend(Backend::Serial), None);
    }

    #[test]
    fn test_double_requires_shader_f64() {
        assert!(GpuPrecision::Double.required_features().contains(wgpu::Features::SHADER_F64));
        assert!(GpuPrecision::Single.required_features().is_empty());
    }

    #[test]
    fn test_workgroup_count_rounds_up() {
        assert_eq!(workgroup_count(1), 1);
        assert_eq!(workgroup_count(16), 1);
        assert_eq!(workgroup_count(17), 2);
        assert_eq!(workgroup_count(800), 50);
    }
}
