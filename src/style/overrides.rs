use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Raw attribute as read from a host theme or layout description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    /// Dimension already converted to pixels.
    Dimension(f64),
    /// Packed `0xAARRGGBB` color.
    Color(u32),
}

/// Host-supplied style values. `None` keeps the platform default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    #[serde(default)]
    pub bar_spacing: Option<f64>,
    #[serde(default)]
    pub set_spacing: Option<f64>,
    #[serde(default)]
    pub shadow_radius: Option<f64>,
    #[serde(default)]
    pub shadow_dx: Option<f64>,
    #[serde(default)]
    pub shadow_dy: Option<f64>,
    #[serde(default)]
    pub shadow_color: Option<Color>,
    #[serde(default)]
    pub dot_region_radius: Option<f64>,
}

impl StyleOverrides {
    /// Collects overrides from an ordered attribute map.
    ///
    /// Keys use the camelCase names of the JSON form. Unknown keys and values
    /// of the wrong kind are skipped with a warning.
    #[must_use]
    pub fn from_attributes(attributes: &IndexMap<String, AttributeValue>) -> Self {
        let mut overrides = Self::default();

        for (key, value) in attributes {
            match (key.as_str(), *value) {
                ("barSpacing", AttributeValue::Dimension(px)) => overrides.bar_spacing = Some(px),
                ("setSpacing", AttributeValue::Dimension(px)) => overrides.set_spacing = Some(px),
                ("shadowRadius", AttributeValue::Dimension(px)) => {
                    overrides.shadow_radius = Some(px);
                }
                ("shadowDx", AttributeValue::Dimension(px)) => overrides.shadow_dx = Some(px),
                ("shadowDy", AttributeValue::Dimension(px)) => overrides.shadow_dy = Some(px),
                ("dotRegionRadius", AttributeValue::Dimension(px)) => {
                    overrides.dot_region_radius = Some(px);
                }
                ("shadowColor", AttributeValue::Color(argb)) => {
                    overrides.shadow_color = Some(Color::from_argb(argb));
                }
                (
                    "barSpacing" | "setSpacing" | "shadowRadius" | "shadowDx" | "shadowDy"
                    | "dotRegionRadius" | "shadowColor",
                    _,
                ) => {
                    warn!(key = key.as_str(), ?value, "style attribute has wrong value kind");
                }
                _ => {
                    warn!(key = key.as_str(), "ignoring unknown style attribute");
                }
            }
        }

        overrides
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("style overrides: {err}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("style overrides: {err}")))
    }
}
