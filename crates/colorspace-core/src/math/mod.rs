//! Math used by the RGB → LAB pipeline
//!
//! - 3x3 matrix for RGB → XYZ
//! - sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{TransferFunction, srgb_gamma_decode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ};
