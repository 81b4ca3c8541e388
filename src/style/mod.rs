//! Resolution of chart styling from platform defaults and host overrides.
//!
//! Resolution is pure defaulting: an override replaces the matching default,
//! anything unset keeps the density-scaled default. Range checks happen where
//! the values are consumed, in the layout passes.

mod overrides;
mod resolver;

pub use overrides::{AttributeValue, StyleOverrides};
pub use resolver::{BarChartStyle, LineChartStyle, PlatformDefaults, StyleResolver};

/// Converts density-independent pixels to physical pixels.
#[must_use]
pub fn dp_to_px(dp: f64, density: f64) -> f64 {
    dp * density
}
