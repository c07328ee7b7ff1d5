//! CIE XYZ Color Space
//!
//! XYZ is the device-independent hub between RGB and CIELAB.

use crate::math::{Matrix3x3, SRGB_TO_XYZ};
use crate::model::Rgb;

/// CIE 1931 XYZ color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value (mix of cone responses, roughly red)
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value (roughly blue)
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert from linear RGB with the sRGB (D65) primaries
    #[inline]
    pub fn from_linear_rgb(rgb: Rgb) -> Self {
        Self::from_rgb_with_matrix(rgb, &SRGB_TO_XYZ)
    }

    /// Convert from linear RGB with an explicit RGB→XYZ matrix
    #[inline]
    pub fn from_rgb_with_matrix(rgb: Rgb, matrix: &Matrix3x3) -> Self {
        Self::from_array(matrix.multiply_vec(rgb.to_array()))
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversion() {
        let arr = [0.1, 0.2, 0.3];
        let xyz = Xyz::from_array(arr);
        assert_eq!(xyz.to_array(), arr);

        let xyz2: Xyz = arr.into();
        assert_eq!(xyz, xyz2);
    }

    #[test]
    fn test_black_is_origin() {
        assert_eq!(Xyz::from_linear_rgb(Rgb::BLACK), Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white_is_d65() {
        let white = Xyz::from_linear_rgb(Rgb::WHITE);
        assert!(white.approx_eq(&Xyz::new(0.95047, 1.0, 1.08883), 1e-3));
    }

    #[test]
    fn test_identity_matrix() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        let xyz = Xyz::from_rgb_with_matrix(rgb, &Matrix3x3::identity());
        assert!(xyz.approx_eq(&Xyz::new(0.1, 0.2, 0.3), 1e-12));
    }
}
