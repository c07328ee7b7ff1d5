//! Color space conversion
//!
//! [`ColorSpaceConverter`] turns a [`Color`] into the same color expressed in
//! another [`ColorSpace`]. Every (source, target) pair is resolved through
//! [`Conversion::lookup`], a closed table over the three supported spaces.
//! Pairs without an entry fail with [`Error::InvalidConversion`].
//!
//! | from \ to | RGB        | HSV        | LAB        |
//! |-----------|------------|------------|------------|
//! | RGB       | identity   | rgb_to_hsv | rgb_to_lab |
//! | HSV       | hsv_to_rgb | identity   | -          |
//! | LAB       | -          | -          | identity   |

use std::fmt;

use log::{debug, trace};

use crate::color::Color;
use crate::math::TransferFunction;
use crate::model::{Hsv, Lab, Rgb, WhitePoint, Xyz};
use crate::types::ColorSpace;
use crate::{Error, Result};

/// Options for the RGB → LAB pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionOptions {
    /// Reference white that XYZ is normalized by
    pub white_point: WhitePoint,
    /// Decoding applied to RGB components before the XYZ matrix
    pub transfer: TransferFunction,
}

impl ConversionOptions {
    /// Use a different reference white
    pub fn with_white_point(mut self, white_point: WhitePoint) -> Self {
        self.white_point = white_point;
        self
    }

    /// Use a different RGB transfer function
    pub fn with_transfer(mut self, transfer: TransferFunction) -> Self {
        self.transfer = transfer;
        self
    }
}

/// A transform between two color spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Source and target are the same space
    Identity,
    /// RGB → HSV
    RgbToHsv,
    /// HSV → RGB
    HsvToRgb,
    /// RGB → XYZ → LAB
    RgbToLab,
}

impl Conversion {
    /// Every implemented transform
    pub const ALL: [Conversion; 4] = [Self::Identity, Self::RgbToHsv, Self::HsvToRgb, Self::RgbToLab];

    /// Find the transform for a (source, target) pair
    ///
    /// Returns `None` for pairs that have no transform.
    pub const fn lookup(from: ColorSpace, to: ColorSpace) -> Option<Self> {
        use ColorSpace::{Hsv, Lab, Rgb};

        match (from, to) {
            (Rgb, Rgb) | (Hsv, Hsv) | (Lab, Lab) => Some(Self::Identity),
            (Rgb, Hsv) => Some(Self::RgbToHsv),
            (Rgb, Lab) => Some(Self::RgbToLab),
            (Hsv, Rgb) => Some(Self::HsvToRgb),
            (Hsv, Lab) | (Lab, Rgb) | (Lab, Hsv) => None,
        }
    }

    /// Short name, used in log output
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::RgbToHsv => "rgb_to_hsv",
            Self::HsvToRgb => "hsv_to_rgb",
            Self::RgbToLab => "rgb_to_lab",
        }
    }

    /// Run the transform on raw channels
    pub fn apply(&self, channels: [u8; 3], options: &ConversionOptions) -> [u8; 3] {
        match self {
            Self::Identity => channels,
            Self::RgbToHsv => rgb_to_hsv(channels),
            Self::HsvToRgb => hsv_to_rgb(channels),
            Self::RgbToLab => rgb_to_lab(channels, options),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert 8-bit RGB to 8-bit HSV (`[hue / 2, saturation, value]`)
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    Hsv::from_rgb(Rgb::from_channels(rgb)).to_channels()
}

/// Convert 8-bit HSV (`[hue / 2, saturation, value]`) to 8-bit RGB
pub fn hsv_to_rgb(hsv: [u8; 3]) -> [u8; 3] {
    Hsv::from_channels(hsv).to_rgb().to_channels()
}

/// Convert 8-bit RGB to 8-bit LAB (`[L * 255 / 100, a + 128, b + 128]`)
pub fn rgb_to_lab(rgb: [u8; 3], options: &ConversionOptions) -> [u8; 3] {
    let linear = Rgb::from_channels(rgb).decode(options.transfer);
    let xyz = Xyz::from_linear_rgb(linear);
    Lab::from_xyz(xyz, &options.white_point).to_channels()
}

/// Stateless color space conversion engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorSpaceConverter {
    options: ConversionOptions,
}

impl ColorSpaceConverter {
    /// Create a converter with default options (D65, no linearization)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with explicit options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Options this converter was built with
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Check whether a transform exists for the pair
    pub fn supports(&self, from: ColorSpace, to: ColorSpace) -> bool {
        Conversion::lookup(from, to).is_some()
    }

    /// Convert a color into the target space
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConversion`] when the pair has no transform:
    /// HSV → LAB, LAB → RGB and LAB → HSV.
    pub fn convert(&self, color: &Color, target: ColorSpace) -> Result<Color> {
        let source = color.space();
        let Some(conversion) = Conversion::lookup(source, target) else {
            debug!("no transform from {} to {}", source, target);
            return Err(Error::InvalidConversion {
                from: source,
                to: target,
            });
        };

        let channels = conversion.apply(color.channels(), &self.options);
        let converted = Color::from_channels(target, channels);
        trace!("{} -> {} via {}", color, converted, conversion);
        Ok(converted)
    }
}
