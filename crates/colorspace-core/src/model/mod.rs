//! Floating-point color models
//!
//! The numeric transforms run on these types. Each one also owns its
//! 8-bit channel encoding, so the conversion engine only moves bytes in
//! and out at the edges:
//! - RGB primitives (0.0-1.0)
//! - HSV (hue in degrees)
//! - CIE XYZ
//! - CIELAB (L*a*b*)
//! - White point definitions

pub mod hsv;
pub mod lab;
pub mod rgb;
pub mod white_point;
pub mod xyz;

pub use hsv::Hsv;
pub use lab::Lab;
pub use rgb::Rgb;
pub use white_point::{A, D50, D55, D65, D75, E, WhitePoint};
pub use xyz::Xyz;

/// Round to the nearest byte, saturating at both ends
#[inline]
pub(crate) fn quantize(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
