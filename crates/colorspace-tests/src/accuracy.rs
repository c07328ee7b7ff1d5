//! Channel difference statistics
//!
//! Outputs are compared in 8-bit code values. HSV hue is compared on its
//! circle, so a stored hue of 0 and one of 179 are one step apart.

use crate::reference::HUE_STEPS;

/// Statistics from a channel comparison
#[derive(Debug, Clone, Default)]
pub struct ChannelStats {
    /// Largest per-channel difference
    pub max: u8,
    /// Mean of the per-color largest difference
    pub mean: f64,
    /// Colors that differ in any channel
    pub mismatches: usize,
    /// Number of colors compared
    pub count: usize,
}

impl ChannelStats {
    /// Check if every color matched exactly
    pub fn is_exact(&self) -> bool {
        self.max == 0
    }

    /// Check if every channel is within `tolerance` code values
    pub fn within(&self, tolerance: u8) -> bool {
        self.max <= tolerance
    }
}

/// Largest per-channel difference between two colors
pub fn channel_diff(a: [u8; 3], b: [u8; 3]) -> u8 {
    a.iter().zip(b.iter()).map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0)
}

/// Like [`channel_diff`], with channel 0 treated as a stored HSV hue
pub fn hsv_diff(a: [u8; 3], b: [u8; 3]) -> u8 {
    let hue = a[0].abs_diff(b[0]);
    let hue = if hue <= HUE_STEPS { hue.min(HUE_STEPS - hue) } else { hue };
    hue.max(a[1].abs_diff(b[1])).max(a[2].abs_diff(b[2]))
}

/// Compare two equally long color lists with a difference function
pub fn compare_channels(
    actual: &[[u8; 3]],
    expected: &[[u8; 3]],
    diff: fn([u8; 3], [u8; 3]) -> u8,
) -> ChannelStats {
    assert_eq!(actual.len(), expected.len(), "color lists differ in length");

    let diffs: Vec<u8> = actual
        .iter()
        .zip(expected.iter())
        .map(|(a, e)| diff(*a, *e))
        .collect();

    if diffs.is_empty() {
        return ChannelStats::default();
    }

    ChannelStats {
        max: diffs.iter().copied().max().unwrap_or(0),
        mean: diffs.iter().map(|&d| d as f64).sum::<f64>() / diffs.len() as f64,
        mismatches: diffs.iter().filter(|&&d| d > 0).count(),
        count: diffs.len(),
    }
}
