/// Outcome of iterating one point.
///
/// `smoothed` is the fractional escape count and is `0.0` for points
/// that did not escape within the iteration cap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub escaped: bool,
    pub smoothed: f32,
}

impl EscapeResult {
    pub const INSIDE: Self = Self {
        escaped: false,
        smoothed: 0.0,
    };

    #[must_use]
    pub const fn escaped(smoothed: f32) -> Self {
        Self {
            escaped: true,
            smoothed,
        }
    }
}
