use serde::Serialize;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;
use crate::style::dp_to_px;

pub const DEFAULT_LINE_THICKNESS_DP: f64 = 4.0;
pub const DEFAULT_DOTS_RADIUS_DP: f64 = 4.0;
pub const DEFAULT_DOTS_STROKE_THICKNESS_DP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DotStroke {
    pub enabled: bool,
    pub thickness: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dots {
    pub enabled: bool,
    pub color: Color,
    pub radius: f64,
    pub stroke: DotStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fill {
    pub enabled: bool,
    pub color: Color,
}

/// Validated styling of a line set.
///
/// Invariants:
/// - `line_thickness > 0`
/// - `dots.radius >= 0`
/// - `dots.stroke.thickness > 0` when the stroke is enabled
///
/// Values can only be produced through [`LineStyleBuilder::build`], which
/// enforces the invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    line_thickness: f64,
    line_color: Color,
    dashed: bool,
    smooth: bool,
    dots: Dots,
    fill: Fill,
}

impl LineStyle {
    #[must_use]
    pub fn builder() -> LineStyleBuilder {
        LineStyleBuilder::with_scale(1.0)
    }

    #[must_use]
    pub fn line_thickness(&self) -> f64 {
        self.line_thickness
    }

    #[must_use]
    pub fn line_color(&self) -> Color {
        self.line_color
    }

    #[must_use]
    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    #[must_use]
    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    #[must_use]
    pub fn dots(&self) -> Dots {
        self.dots
    }

    #[must_use]
    pub fn fill(&self) -> Fill {
        self.fill
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyleBuilder::with_scale(1.0).style
    }
}

#[derive(Debug, Clone)]
pub struct LineStyleBuilder {
    style: LineStyle,
}

impl LineStyleBuilder {
    /// Starts from the default style with dp dimensions scaled by `density`.
    pub fn for_density(density: f64) -> ChartResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "screen density must be finite and > 0, got {density}"
            )));
        }
        Ok(Self::with_scale(density))
    }

    fn with_scale(density: f64) -> Self {
        Self {
            style: LineStyle {
                line_thickness: dp_to_px(DEFAULT_LINE_THICKNESS_DP, density),
                line_color: Color::BLACK,
                dashed: false,
                smooth: false,
                dots: Dots {
                    enabled: false,
                    color: Color::BLACK,
                    radius: dp_to_px(DEFAULT_DOTS_RADIUS_DP, density),
                    stroke: DotStroke {
                        enabled: false,
                        thickness: dp_to_px(DEFAULT_DOTS_STROKE_THICKNESS_DP, density),
                        color: Color::BLACK,
                    },
                },
                fill: Fill {
                    enabled: false,
                    color: Color::BLACK,
                },
            },
        }
    }

    #[must_use]
    pub fn line_thickness(mut self, thickness: f64) -> Self {
        self.style.line_thickness = thickness;
        self
    }

    #[must_use]
    pub fn line_color(mut self, color: Color) -> Self {
        self.style.line_color = color;
        self
    }

    #[must_use]
    pub fn dashed(mut self, dashed: bool) -> Self {
        self.style.dashed = dashed;
        self
    }

    #[must_use]
    pub fn smooth(mut self, smooth: bool) -> Self {
        self.style.smooth = smooth;
        self
    }

    #[must_use]
    pub fn dots(mut self, enabled: bool) -> Self {
        self.style.dots.enabled = enabled;
        self
    }

    #[must_use]
    pub fn dots_color(mut self, color: Color) -> Self {
        self.style.dots.color = color;
        self
    }

    #[must_use]
    pub fn dots_radius(mut self, radius: f64) -> Self {
        self.style.dots.radius = radius;
        self
    }

    /// Sets the dot outline thickness and turns the outline on.
    #[must_use]
    pub fn dots_stroke_thickness(mut self, thickness: f64) -> Self {
        self.style.dots.stroke.enabled = true;
        self.style.dots.stroke.thickness = thickness;
        self
    }

    #[must_use]
    pub fn dots_stroke_color(mut self, color: Color) -> Self {
        self.style.dots.stroke.color = color;
        self
    }

    #[must_use]
    pub fn fill(mut self, enabled: bool) -> Self {
        self.style.fill.enabled = enabled;
        self
    }

    #[must_use]
    pub fn fill_color(mut self, color: Color) -> Self {
        self.style.fill.color = color;
        self
    }

    pub fn build(self) -> ChartResult<LineStyle> {
        let style = self.style;

        if !style.line_thickness.is_finite() || style.line_thickness <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "line thickness must be finite and > 0, got {}",
                style.line_thickness
            )));
        }
        if !style.dots.radius.is_finite() || style.dots.radius < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "dots radius must be finite and >= 0, got {}",
                style.dots.radius
            )));
        }
        if style.dots.stroke.enabled
            && (!style.dots.stroke.thickness.is_finite() || style.dots.stroke.thickness <= 0.0)
        {
            return Err(ChartError::InvalidConfig(format!(
                "dots stroke thickness must be finite and > 0, got {}",
                style.dots.stroke.thickness
            )));
        }
        for color in [
            style.line_color,
            style.dots.color,
            style.dots.stroke.color,
            style.fill.color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
        }

        Ok(style)
    }
}

/// Styling of a scatter set: every entry becomes one dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterStyle {
    radius: f64,
}

impl ScatterStyle {
    pub fn new(radius: f64) -> ChartResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "scatter dot radius must be finite and > 0, got {radius}"
            )));
        }
        Ok(Self { radius })
    }

    /// Default dot radius of `DEFAULT_DOTS_RADIUS_DP` scaled by `density`.
    pub fn for_density(density: f64) -> ChartResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "screen density must be finite and > 0, got {density}"
            )));
        }
        Self::new(dp_to_px(DEFAULT_DOTS_RADIUS_DP, density))
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Default radius at density 1. Use [`ScatterStyle::for_density`] on other
/// screens.
impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DOTS_RADIUS_DP,
        }
    }
}
