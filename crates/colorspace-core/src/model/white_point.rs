//! CIE Standard Illuminant White Points
//!
//! White points define the color of "white" for a given illuminant.
//! These are specified as CIE XYZ coordinates where Y=1.0.
//! The LAB transform normalizes XYZ by one of these before the
//! L*a*b* nonlinearity; D65 is the default.

use crate::model::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

impl Default for WhitePoint {
    fn default() -> Self {
        D65
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant D50 (Horizon Light)
///
/// Correlated Color Temperature: ~5003K
pub const D50: WhitePoint = WhitePoint::new("D50", 0.9642, 1.0, 0.8251);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight)
pub const D55: WhitePoint = WhitePoint::new("D55", 0.9568, 1.0, 0.9214);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Correlated Color Temperature: ~6504K
/// Standard white point for sRGB.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.9505, 1.0, 1.0890);

/// CIE Standard Illuminant D75 (North Sky Daylight)
pub const D75: WhitePoint = WhitePoint::new("D75", 0.9497, 1.0, 1.2264);

/// CIE Standard Illuminant A (Incandescent)
pub const A: WhitePoint = WhitePoint::new("A", 1.0985, 1.0, 0.3558);

/// CIE Standard Illuminant E (Equal Energy)
pub const E: WhitePoint = WhitePoint::new("E", 1.0, 1.0, 1.0);

/// Get a standard white point by name
pub fn from_name(name: &str) -> Option<WhitePoint> {
    match name.to_uppercase().as_str() {
        "D50" => Some(D50),
        "D55" => Some(D55),
        "D65" => Some(D65),
        "D75" => Some(D75),
        "A" => Some(A),
        "E" => Some(E),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert!((D65.xyz.x - 0.9505).abs() < 0.001);
        assert!((D65.xyz.y - 1.0).abs() < 0.001);
        assert!((D65.xyz.z - 1.0890).abs() < 0.001);
    }

    #[test]
    fn test_default_is_d65() {
        assert_eq!(WhitePoint::default(), D65);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("D50"), Some(D50));
        assert_eq!(from_name("d65"), Some(D65));
        assert!(from_name("unknown").is_none());
    }
}
