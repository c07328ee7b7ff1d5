//! HSV (Hue, Saturation, Value) Color Model
//!
//! Hue is an angle in degrees; saturation and value are fractions.
//!
//! The 8-bit encoding stores hue at half-degree resolution, so the channel
//! holds `round(hue / 2)` and a full turn spans 0..180. Saturation and value
//! are scaled to 0..255.

use crate::model::{Rgb, quantize};

/// HSV color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue angle in degrees (0 to 360)
    pub hue: f64,
    /// Saturation (0.0 to 1.0)
    pub saturation: f64,
    /// Value (0.0 to 1.0)
    pub value: f64,
}

impl Hsv {
    /// Create a new HSV color
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Decode from 8-bit channels `[hue / 2, saturation, value]`
    ///
    /// Stored hues above 179 lie past a full turn and wrap around.
    #[inline]
    pub fn from_channels(channels: [u8; 3]) -> Self {
        let [h, s, v] = channels;
        Self {
            hue: (h as f64 * 2.0).rem_euclid(360.0),
            saturation: s as f64 / 255.0,
            value: v as f64 / 255.0,
        }
    }

    /// Encode to 8-bit channels `[hue / 2, saturation, value]`
    #[inline]
    pub fn to_channels(&self) -> [u8; 3] {
        [
            quantize(self.hue / 2.0),
            quantize(self.saturation * 255.0),
            quantize(self.value * 255.0),
        ]
    }

    /// Convert from RGB
    ///
    /// Achromatic input (all components equal) gets hue 0, and black gets
    /// saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let max = rgb.max();
        let min = rgb.min();
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == rgb.r {
            60.0 * ((rgb.g - rgb.b) / delta).rem_euclid(6.0)
        } else if max == rgb.g {
            60.0 * ((rgb.b - rgb.r) / delta + 2.0)
        } else {
            60.0 * ((rgb.r - rgb.g) / delta + 4.0)
        };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            hue,
            saturation,
            value: max,
        }
    }

    /// Convert to RGB using the six-sector decomposition
    pub fn to_rgb(&self) -> Rgb {
        let hue = self.hue.rem_euclid(360.0);
        let chroma = self.value * self.saturation;
        let x = chroma * (1.0 - ((hue / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = self.value - chroma;

        let (r, g, b) = match (hue / 60.0) as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new(r + m, g + m, b + m)
    }

    /// Check if approximately equal to another HSV color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.hue - other.hue).abs() < epsilon
            && (self.saturation - other.saturation).abs() < epsilon
            && (self.value - other.value).abs() < epsilon
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}
