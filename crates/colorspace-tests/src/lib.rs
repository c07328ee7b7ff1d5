//! # colorspace-tests
//!
//! Parity and property testing for colorspace-core.
//!
//! This crate provides:
//! - Reference conversions computed with `palette`
//! - Seeded and structured sample generation
//! - Channel difference statistics
//! - JSON scenario fixtures
//!
//! ## Test Categories
//!
//! 1. **Scenarios**: exact expected outputs, loaded from `data/scenarios.json`
//! 2. **Parity**: agreement with `palette` within one code value
//! 3. **Properties**: identity and round-trip laws, full 8-bit cube sweeps

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelStats, compare_channels};
pub use fixtures::{Scenarios, load_scenarios};
pub use patterns::{TestPattern, generate_pattern};

/// Install a test logger once per test binary
///
/// Honors `RUST_LOG`; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
