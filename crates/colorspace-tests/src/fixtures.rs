//! Scenario fixtures
//!
//! Expected conversion results kept as JSON under `data/`. Colors in the
//! file go through the same validation as [`Color::new`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use colorspace_core::{Color, ColorSpace};
use serde::Deserialize;

/// One conversion and its expected outcome
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionCase {
    /// Input color
    pub input: Color,
    /// Requested target space
    pub target: ColorSpace,
    /// Expected output, or `None` when the conversion must be rejected
    pub expected: Option<Color>,
}

/// All fixtures in a scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct Scenarios {
    /// Conversions with exact expected outputs
    pub conversions: Vec<ConversionCase>,
    /// Colors that must fail validation, kept as raw JSON
    pub invalid_colors: Vec<serde_json::Value>,
    /// Color space names that must be rejected
    pub invalid_spaces: Vec<String>,
}

/// Path of the bundled scenario file
pub fn default_scenarios_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("scenarios.json")
}

/// Load scenarios from a JSON file
pub fn load_scenarios(path: impl AsRef<Path>) -> anyhow::Result<Scenarios> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenarios from {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}
