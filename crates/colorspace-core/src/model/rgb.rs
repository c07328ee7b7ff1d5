//! RGB Color Primitives
//!
//! Normalized RGB used as the entry point of every transform.

use crate::math::TransferFunction;
use crate::model::quantize;

/// RGB color in floating-point (0.0-1.0 range)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component (0.0 to 1.0)
    pub r: f64,
    /// Green component (0.0 to 1.0)
    pub g: f64,
    /// Blue component (0.0 to 1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from 8-bit channels (0-255)
    #[inline]
    pub fn from_channels(channels: [u8; 3]) -> Self {
        let [r, g, b] = channels;
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 8-bit channels (0-255), rounding and clamping
    #[inline]
    pub fn to_channels(&self) -> [u8; 3] {
        [
            quantize(self.r * 255.0),
            quantize(self.g * 255.0),
            quantize(self.b * 255.0),
        ]
    }

    /// Largest component
    #[inline]
    pub fn max(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest component
    #[inline]
    pub fn min(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Decode each component through a transfer function
    #[inline]
    pub fn decode(&self, transfer: TransferFunction) -> Self {
        Self {
            r: transfer.decode(self.r),
            g: transfer.decode(self.g),
            b: transfer.decode(self.b),
        }
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        Self::from_channels(channels)
    }
}
