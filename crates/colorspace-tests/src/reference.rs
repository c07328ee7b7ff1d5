//! Reference implementation wrappers
//!
//! `palette` conversions, encoded with the same 8-bit channel layout as
//! colorspace-core so the outputs can be compared code value by code value.

use palette::{FromColor, Hsv, Lab, Srgb};

/// Steps in a full hue turn once stored at half-degree resolution
pub const HUE_STEPS: u8 = 180;

fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn to_srgb(rgb: [u8; 3]) -> Srgb {
    let [r, g, b] = rgb;
    Srgb::<u8>::new(r, g, b).into_format()
}

/// RGB → HSV through `palette::Hsv`
pub fn rgb_to_hsv_palette(rgb: [u8; 3]) -> [u8; 3] {
    let hsv: Hsv = Hsv::from_color(to_srgb(rgb));
    [
        quantize(hsv.hue.into_positive_degrees() / 2.0),
        quantize(hsv.saturation * 255.0),
        quantize(hsv.value * 255.0),
    ]
}

/// RGB → LAB through `palette::Lab` (sRGB linearization, D65)
pub fn rgb_to_lab_palette(rgb: [u8; 3]) -> [u8; 3] {
    let lab: Lab = Lab::from_color(to_srgb(rgb));
    [
        quantize(lab.l * 255.0 / 100.0),
        quantize(lab.a + 128.0),
        quantize(lab.b + 128.0),
    ]
}
