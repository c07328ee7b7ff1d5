//! Transfer functions
//!
//! Decoding maps an encoded component [0,1] to the value fed into the
//! RGB → XYZ matrix.

/// sRGB gamma decode (encoded → linear)
///
/// Converts sRGB-encoded value [0,1] to linear light [0,1].
/// Uses the IEC 61966-2-1 transfer function.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// How RGB components are decoded before the XYZ matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferFunction {
    /// Components go into the matrix as they are
    #[default]
    Identity,
    /// Components are linearized with the sRGB curve first
    Srgb,
}

impl TransferFunction {
    /// Decode one component
    #[inline]
    pub fn decode(&self, encoded: f64) -> f64 {
        match self {
            Self::Identity => encoded,
            Self::Srgb => srgb_gamma_decode(encoded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_srgb_endpoints() {
        assert!(srgb_gamma_decode(0.0).abs() < EPSILON);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_linear_segment() {
        assert!((srgb_gamma_decode(0.04) - 0.04 / 12.92).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_is_monotonic() {
        let mut prev = -1.0;
        for i in 0..=255 {
            let v = srgb_gamma_decode(i as f64 / 255.0);
            assert!(v > prev);
            prev = v;
        }
    }

    #[test]
    fn test_identity() {
        assert_eq!(TransferFunction::default(), TransferFunction::Identity);
        assert_eq!(TransferFunction::Identity.decode(0.37), 0.37);
        assert_eq!(TransferFunction::Srgb.decode(0.37), srgb_gamma_decode(0.37));
    }
}
