//! Test pattern generation
//!
//! Provides sample sets of 8-bit RGB colors.

use palette::{FromColor, Hsv, Srgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation and value
    HueRamp,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Random colors with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Dark colors, where the LAB curve is linear
    Shadows,
}

impl TestPattern {
    /// Every pattern, with a fixed seed for the random one
    pub const ALL: [TestPattern; 6] = [
        Self::ColorCube,
        Self::HueRamp,
        Self::Grayscale,
        Self::Random(0x5EED),
        Self::SkinTones,
        Self::Shadows,
    ];
}

/// Generate `count` colors following a pattern
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<[u8; 3]> {
    match pattern {
        TestPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            (0..count).map(|i| corners[i % 8]).collect()
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f32 / count as f32) * 360.0;
                let hsv: Hsv = Hsv::new(hue, 1.0, 1.0);
                let rgb: Srgb = Srgb::from_color(hsv);
                let rgb: Srgb<u8> = rgb.into_format();
                [rgb.red, rgb.green, rgb.blue]
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f32 / count.max(2).saturating_sub(1) as f32) * 255.0).round() as u8;
                [v, v, v]
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count).map(|_| rng.r#gen::<[u8; 3]>()).collect()
        }
        TestPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            (0..count).map(|i| tones[i % 6]).collect()
        }
        TestPattern::Shadows => {
            let mut rng = ChaCha8Rng::seed_from_u64(0xDA4C);
            (0..count)
                .map(|_| [rng.gen_range(0..12), rng.gen_range(0..12), rng.gen_range(0..12)])
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lengths() {
        for pattern in TestPattern::ALL {
            assert_eq!(generate_pattern(pattern, 37).len(), 37, "{:?}", pattern);
        }
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = generate_pattern(TestPattern::Random(7), 64);
        let b = generate_pattern(TestPattern::Random(7), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_grayscale_spans_range() {
        let ramp = generate_pattern(TestPattern::Grayscale, 256);
        assert_eq!(ramp[0], [0, 0, 0]);
        assert_eq!(ramp[255], [255, 255, 255]);
        assert!(ramp.iter().all(|&[r, g, b]| r == g && g == b));
    }

    #[test]
    fn test_hue_ramp_starts_red() {
        let ramp = generate_pattern(TestPattern::HueRamp, 12);
        assert_eq!(ramp[0], [255, 0, 0]);
    }
}
