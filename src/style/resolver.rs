use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::model::{LineStyleBuilder, ScatterStyle};
use crate::render::{Color, Shadow};
use crate::style::{StyleOverrides, dp_to_px};

/// Named default dimensions in dp, plus the screen density used to scale them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDefaults {
    pub density: f64,
    pub bar_spacing_dp: f64,
    pub set_spacing_dp: f64,
    pub shadow_radius_dp: f64,
    pub shadow_dx_dp: f64,
    pub shadow_dy_dp: f64,
    pub dot_region_radius_dp: f64,
    pub dash_on_dp: f64,
    pub dash_off_dp: f64,
}

impl Default for PlatformDefaults {
    fn default() -> Self {
        Self {
            density: 1.0,
            bar_spacing_dp: 10.0,
            set_spacing_dp: 2.0,
            shadow_radius_dp: 0.0,
            shadow_dx_dp: 0.0,
            shadow_dy_dp: 0.0,
            dot_region_radius_dp: 20.0,
            dash_on_dp: 10.0,
            dash_off_dp: 10.0,
        }
    }
}

impl PlatformDefaults {
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    fn px(&self, dp: f64) -> f64 {
        dp_to_px(dp, self.density)
    }
}

/// Spacing and shadow parameters consumed by bar layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartStyle {
    /// Gap between neighbouring bar groups, in pixels.
    pub bar_spacing: f64,
    /// Gap between bars of the same group, in pixels.
    pub set_spacing: f64,
    pub shadow: Shadow,
}

impl BarChartStyle {
    #[must_use]
    pub fn with_bar_spacing(mut self, spacing: f64) -> Self {
        self.bar_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_set_spacing(mut self, spacing: f64) -> Self {
        self.set_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }
}

impl Default for BarChartStyle {
    fn default() -> Self {
        StyleResolver::default().resolve_bar(&StyleOverrides::default())
    }
}

/// Parameters consumed by line and scatter layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartStyle {
    /// Half side of the square hit region around each point.
    pub region_radius: f64,
    pub dash_on: f64,
    pub dash_off: f64,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        StyleResolver::default().resolve_line(&StyleOverrides::default())
    }
}

/// Resolves style values from platform defaults and host overrides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleResolver {
    defaults: PlatformDefaults,
}

impl StyleResolver {
    pub fn new(defaults: PlatformDefaults) -> ChartResult<Self> {
        if !defaults.density.is_finite() || defaults.density <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "screen density must be finite and > 0, got {}",
                defaults.density
            )));
        }
        Ok(Self { defaults })
    }

    #[must_use]
    pub fn defaults(&self) -> PlatformDefaults {
        self.defaults
    }

    #[must_use]
    pub fn resolve_bar(&self, overrides: &StyleOverrides) -> BarChartStyle {
        let d = &self.defaults;
        BarChartStyle {
            bar_spacing: overrides
                .bar_spacing
                .unwrap_or_else(|| d.px(d.bar_spacing_dp)),
            set_spacing: overrides
                .set_spacing
                .unwrap_or_else(|| d.px(d.set_spacing_dp)),
            shadow: Shadow {
                radius: overrides
                    .shadow_radius
                    .unwrap_or_else(|| d.px(d.shadow_radius_dp)),
                dx: overrides.shadow_dx.unwrap_or_else(|| d.px(d.shadow_dx_dp)),
                dy: overrides.shadow_dy.unwrap_or_else(|| d.px(d.shadow_dy_dp)),
                color: overrides.shadow_color.unwrap_or(Color::TRANSPARENT),
            },
        }
    }

    /// Scatter style with the default dot radius at this screen density.
    pub fn resolve_scatter(&self) -> ChartResult<ScatterStyle> {
        ScatterStyle::for_density(self.defaults.density)
    }

    /// Line style builder seeded with dp defaults at this screen density.
    pub fn line_style_builder(&self) -> ChartResult<LineStyleBuilder> {
        LineStyleBuilder::for_density(self.defaults.density)
    }

    #[must_use]
    pub fn resolve_line(&self, overrides: &StyleOverrides) -> LineChartStyle {
        let d = &self.defaults;
        LineChartStyle {
            region_radius: overrides
                .dot_region_radius
                .unwrap_or_else(|| d.px(d.dot_region_radius_dp)),
            dash_on: d.px(d.dash_on_dp),
            dash_off: d.px(d.dash_off_dp),
        }
    }
}
