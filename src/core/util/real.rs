use std::fmt::Debug;

use num_traits::Float;

/// Scalar type the per-pixel pipeline is generic over.
///
/// Both precisions share the single-precision pixel offset and the
/// single-precision smoothing step, so conversions to and from `f32`
/// are part of the contract rather than left to `NumCast`.
pub trait Real: Float + Send + Sync + Debug + 'static {
    /// Shader scalar keyword for this precision.
    const NAME: &'static str;

    fn from_f64(value: f64) -> Self;

    fn widen(value: f32) -> Self;

    fn narrow(self) -> f32;
}

impl Real for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn widen(value: f32) -> Self {
        value
    }

    #[inline]
    fn narrow(self) -> f32 {
        self
    }
}

impl Real for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn widen(value: f32) -> Self {
        value as f64
    }

    #[inline]
    fn narrow(self) -> f32 {
        self as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_from_f64_rounds_to_nearest() {
        let value = 0.1_f64;

        assert_eq!(<f32 as Real>::from_f64(value), 0.1_f32);
    }

    #[test]
    fn test_f64_widen_is_exact() {
        let value = 0.1_f32;

        assert_eq!(<f64 as Real>::widen(value), 0.1_f32 as f64);
        assert_ne!(<f64 as Real>::widen(value), 0.1_f64);
    }

    #[test]
    fn test_f64_narrow_matches_cast() {
        assert_eq!(Real::narrow(4.000000001_f64), 4.0_f32);
    }

    #[test]
    fn test_names() {
        assert_eq!(<f32 as Real>::NAME, "f32");
        assert_eq!(<f64 as Real>::NAME, "f64");
    }
}
