#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Packs as `0x00RRGGBB`.
    #[must_use]
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[must_use]
    pub const fn unpack(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Largest per-channel absolute difference.
    #[must_use]
    pub fn max_channel_delta(self, other: Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_places_red_in_high_byte() {
        let colour = Colour { r: 0x12, g: 0x34, b: 0x56 };

        assert_eq!(colour.pack(), 0x0012_3456);
    }

    #[test]
    fn test_unpack_ignores_top_byte() {
        assert_eq!(Colour::unpack(0xff40_0000), Colour { r: 0x40, g: 0, b: 0 });
    }

    #[test]
    fn test_max_channel_delta() {
        let a = Colour { r: 10, g: 200, b: 0 };
        let b = Colour { r: 12, g: 190, b: 1 };

        assert_eq!(a.max_channel_delta(b), 10);
        assert_eq!(b.max_channel_delta(a), 10);
    }
}
