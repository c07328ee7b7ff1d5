//! Error types for colorspace

use thiserror::Error;

use crate::types::ColorSpace;

/// Result type for colorspace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or converting colors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Color space name is not one of RGB, HSV, LAB
    #[error("Invalid color space: {0:?}")]
    InvalidColorSpace(String),

    /// Channel count or channel value out of range
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// No transform exists between the two spaces
    #[error("Invalid conversion: {from} to {to} is not supported")]
    InvalidConversion { from: ColorSpace, to: ColorSpace },
}
