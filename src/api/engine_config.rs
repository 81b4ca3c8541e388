use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::core::{Padding, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::model::ChartKind;
use crate::style::{PlatformDefaults, StyleOverrides};

/// Public engine bootstrap configuration.
///
/// This type is serializable so hosts can keep chart setup in a config file
/// instead of inventing an ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub kind: ChartKind,
    pub value_min: f64,
    pub value_max: f64,
    #[serde(default)]
    pub padding: Padding,
    /// Horizontal inset of the first and last label of line/scatter charts.
    #[serde(default)]
    pub border_spacing: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub style_overrides: StyleOverrides,
    #[serde(default)]
    pub platform: PlatformDefaults,
}

fn default_animation_duration_ms() -> u64 {
    1000
}

impl ChartEngineConfig {
    /// Creates a config with default padding, easing and style.
    #[must_use]
    pub fn new(viewport: Viewport, kind: ChartKind, value_min: f64, value_max: f64) -> Self {
        Self {
            viewport,
            kind,
            value_min,
            value_max,
            padding: Padding::default(),
            border_spacing: 0.0,
            easing: Easing::default(),
            animation_duration_ms: default_animation_duration_ms(),
            style_overrides: StyleOverrides::default(),
            platform: PlatformDefaults::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_border_spacing(mut self, border_spacing: f64) -> Self {
        self.border_spacing = border_spacing;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_style_overrides(mut self, overrides: StyleOverrides) -> Self {
        self.style_overrides = overrides;
        self
    }

    #[must_use]
    pub fn with_platform_defaults(mut self, platform: PlatformDefaults) -> Self {
        self.platform = platform;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("engine config: {err}")))
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("engine config: {err}")))
    }
}
