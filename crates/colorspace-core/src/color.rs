//! Tagged 8-bit colors
//!
//! A [`Color`] is three channel values in `0..=255` plus the [`ColorSpace`]
//! that gives them meaning. Colors are validated once, at construction, and
//! never change afterwards; conversions build new values.

use std::fmt;

use crate::types::ColorSpace;
use crate::{Error, Result};

/// Three 8-bit channels tagged with a color space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ColorRecord", into = "ColorRecord"))]
pub struct Color {
    space: ColorSpace,
    channels: [u8; 3],
}

impl Color {
    /// Number of channels every color carries
    pub const CHANNELS: usize = 3;

    /// Largest value a channel may hold
    pub const CHANNEL_MAX: i64 = u8::MAX as i64;

    /// Build a color from untrusted channel values
    ///
    /// Fails with [`Error::InvalidColor`] if `values` does not hold exactly
    /// three entries or any entry lies outside `0..=255`.
    pub fn new(space: ColorSpace, values: &[i64]) -> Result<Self> {
        if values.len() != Self::CHANNELS {
            return Err(Error::InvalidColor(format!(
                "expected {} channels, got {}",
                Self::CHANNELS,
                values.len()
            )));
        }

        let mut channels = [0u8; 3];
        for (index, (&value, slot)) in values.iter().zip(channels.iter_mut()).enumerate() {
            *slot = u8::try_from(value).map_err(|_| {
                Error::InvalidColor(format!(
                    "{} channel ({}) is {}, expected 0..={}",
                    space,
                    space.channel_names()[index],
                    value,
                    Self::CHANNEL_MAX
                ))
            })?;
        }

        Ok(Self { space, channels })
    }

    /// Build a color from channels that are already bytes
    #[inline]
    pub const fn from_channels(space: ColorSpace, channels: [u8; 3]) -> Self {
        Self { space, channels }
    }

    /// All-zero color in the given space
    #[inline]
    pub const fn black(space: ColorSpace) -> Self {
        Self::from_channels(space, [0, 0, 0])
    }

    /// Color space tag
    #[inline]
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    /// Channel values in space order
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        self.channels
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = self.channels;
        write!(f, "{} [{}, {}, {}]", self.space, c0, c1, c2)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels
    }
}

/// Wire form of a [`Color`]; deserializing goes through [`Color::new`]
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ColorRecord {
    space: ColorSpace,
    values: Vec<i64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ColorRecord> for Color {
    type Error = Error;

    fn try_from(record: ColorRecord) -> Result<Self> {
        Self::new(record.space, &record.values)
    }
}

#[cfg(feature = "serde")]
impl From<Color> for ColorRecord {
    fn from(color: Color) -> Self {
        Self {
            space: color.space,
            values: color.channels.iter().map(|&c| i64::from(c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black_rgb() {
        let color = Color::default();
        assert_eq!(color.space(), ColorSpace::Rgb);
        assert_eq!(color.channels(), [0, 0, 0]);
        assert_eq!(color.to_string(), "RGB [0, 0, 0]");
    }

    #[test]
    fn test_black_in_each_space() {
        assert_eq!(Color::black(ColorSpace::Hsv).to_string(), "HSV [0, 0, 0]");
        assert_eq!(Color::black(ColorSpace::Lab).to_string(), "LAB [0, 0, 0]");
    }

    #[test]
    fn test_new_valid() {
        let color = Color::new(ColorSpace::Rgb, &[123, 45, 67]).unwrap();
        assert_eq!(color.channels(), [123, 45, 67]);
        assert_eq!(color.to_string(), "RGB [123, 45, 67]");

        let edges = Color::new(ColorSpace::Lab, &[0, 255, 128]).unwrap();
        assert_eq!(edges.channels(), [0, 255, 128]);
    }

    #[test]
    fn test_wrong_length() {
        let err = Color::new(ColorSpace::Rgb, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
        assert!(err.to_string().contains("expected 3 channels, got 10"));

        assert!(Color::new(ColorSpace::Rgb, &[]).is_err());
        assert!(Color::new(ColorSpace::Rgb, &[1, 2]).is_err());
    }

    #[test]
    fn test_overflow() {
        let err = Color::new(ColorSpace::Rgb, &[300, 350, 399]).unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
        assert!(err.to_string().contains("red"));

        assert!(Color::new(ColorSpace::Hsv, &[0, 0, 256]).is_err());
    }

    #[test]
    fn test_negative() {
        let err = Color::new(ColorSpace::Rgb, &[10, -100, 20]).unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
        assert!(err.to_string().contains("-100"));
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Color::new(ColorSpace::Rgb, &[1, 2, 3]).unwrap();
        let b = Color::from_channels(ColorSpace::Rgb, [1, 2, 3]);
        let c = Color::from_channels(ColorSpace::Hsv, [1, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_into_array() {
        let channels: [u8; 3] = Color::from_channels(ColorSpace::Hsv, [9, 8, 7]).into();
        assert_eq!(channels, [9, 8, 7]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_revalidates() {
        let color = Color::from_channels(ColorSpace::Hsv, [10, 20, 30]);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"space":"HSV","values":[10,20,30]}"#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);

        assert!(serde_json::from_str::<Color>(r#"{"space":"RGB","values":[1,2,999]}"#).is_err());
        assert!(serde_json::from_str::<Color>(r#"{"space":"XYZ","values":[1,2,3]}"#).is_err());
    }
}
