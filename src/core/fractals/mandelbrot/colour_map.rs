use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Scale from smoothed escape value to palette position.
pub const PALETTE_SCALE: f32 = 5.0;

/// Length of one palette cycle.
pub const PALETTE_PERIOD: f32 = 1280.0;

/// Cyclic palette: black, red, purple, blue, green, yellow, back to red.
///
/// Points inside the set arrive with a smoothed value of 0 and map to black.
#[derive(Debug, Default, Copy, Clone)]
pub struct SmoothBandedColourMap;

impl SmoothBandedColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColourMap for SmoothBandedColourMap {
    type T = f32;
    type Failure = Infallible;

    #[inline]
    fn map(&self, smoothed: f32) -> Result<Colour, Self::Failure> {
        Ok(banded_colour(smoothed))
    }
}

/// Palette position within the current cycle.
#[inline]
#[must_use]
pub fn palette_index(smoothed: f32) -> u32 {
    // negative positions wrap through two's complement
    ((smoothed * PALETTE_SCALE) % PALETTE_PERIOD) as i32 as u32
}

#[inline]
#[must_use]
pub fn banded_colour(smoothed: f32) -> Colour {
    let scaled = smoothed * PALETTE_SCALE;
    let resi = palette_index(smoothed);
    let low = resi & 255;

    // black to red
    let (mut r, mut g, mut b) = (low, 0, 0);

    // red to purple
    if resi >= 256 {
        r = 255;
        b = resi.wrapping_sub(256) & 255;
    }
    // purple to blue
    if resi >= 512 {
        r = 255 - low;
        b = 255;
    }
    // blue to green
    if resi >= 768 {
        r = 0;
        g = low;
        b = 255 - low;
    }
    // green to yellow
    if resi >= 1024 {
        r = low;
        g = 255;
        b = 0;
    }
    // yellow back to red on every cycle after the first
    if scaled >= PALETTE_PERIOD && resi < 256 {
        r = 255;
        g = 255 - low;
        b = 0;
    }

    Colour {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
