//! # colorspace - RGB, HSV and CIELAB colors
//!
//! A small color model: three 8-bit channels tagged with the space they
//! belong to, and a stateless engine that converts between spaces.
//!
//! ## Supported Conversions
//!
//! - RGB → HSV, HSV → RGB
//! - RGB → LAB (through CIE XYZ)
//! - identity for every space
//!
//! LAB → RGB, LAB → HSV and HSV → LAB are not implemented and fail with
//! [`Error::InvalidConversion`].
//!
//! ## Quick Start
//!
//! ```
//! use colorspace_core::{Color, ColorSpace, ColorSpaceConverter};
//!
//! let space: ColorSpace = "RGB".parse()?;
//! let color = Color::new(space, &[91, 71, 123])?;
//!
//! let converter = ColorSpaceConverter::new();
//! let hsv = converter.convert(&color, ColorSpace::Hsv)?;
//! assert_eq!(hsv.to_string(), "HSV [132, 108, 123]");
//!
//! let lab = converter.convert(&color, ColorSpace::Lab)?;
//! assert_eq!(lab.channels(), [159, 142, 109]);
//! # Ok::<(), colorspace_core::Error>(())
//! ```
//!
//! ## Channel Encodings
//!
//! | space | channel 0        | channel 1      | channel 2      |
//! |-------|------------------|----------------|----------------|
//! | RGB   | red              | green          | blue           |
//! | HSV   | hue / 2 (0..180) | saturation     | value          |
//! | LAB   | L* × 255 / 100   | a* + 128       | b* + 128       |

pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod model;
pub mod types;

pub use color::Color;
pub use convert::{
    ColorSpaceConverter, Conversion, ConversionOptions, hsv_to_rgb, rgb_to_hsv, rgb_to_lab,
};
pub use error::{Error, Result};
pub use math::TransferFunction;
pub use model::WhitePoint;
pub use types::ColorSpace;

/// Version of colorspace
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
