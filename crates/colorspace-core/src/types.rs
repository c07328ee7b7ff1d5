//! Color space tags
//!
//! A [`ColorSpace`] says how the three channels of a [`Color`](crate::Color)
//! are to be read. Only RGB, HSV and CIELAB are supported.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Supported color spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Hue, saturation, value
    Hsv,
    /// CIE L*a*b*
    Lab,
}

impl ColorSpace {
    /// Every supported space, in declaration order
    pub const ALL: [ColorSpace; 3] = [Self::Rgb, Self::Hsv, Self::Lab];

    /// Look up a color space by its canonical name ("RGB", "HSV" or "LAB")
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "RGB" => Ok(Self::Rgb),
            "HSV" => Ok(Self::Hsv),
            "LAB" => Ok(Self::Lab),
            other => Err(Error::InvalidColorSpace(other.to_string())),
        }
    }

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsv => "HSV",
            Self::Lab => "LAB",
        }
    }

    /// Human-readable label of each channel position
    pub const fn channel_names(&self) -> [&'static str; 3] {
        match self {
            Self::Rgb => ["red", "green", "blue"],
            Self::Hsv => ["hue", "saturation", "value"],
            Self::Lab => ["lightness", "a", "b"],
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for ColorSpace {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorSpace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorSpace {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(serde::de::Error::custom)
    }
}
