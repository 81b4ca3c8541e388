use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xff) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Pixel-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Drop shadow drawn under filled shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: Color,
}

impl Shadow {
    /// A shadow with zero radius is not drawn.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.radius > 0.0
    }
}

/// Filled axis-aligned rectangle in pixel space.
///
/// `top` is the y of the bar value and `bottom` the inner chart bottom, so
/// `top > bottom` is legal for values under the axis minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64, color: Color) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            color,
            shadow: None,
        }
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow.is_visible().then_some(shadow);
        self
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.left.is_finite()
            || !self.top.is_finite()
            || !self.right.is_finite()
            || !self.bottom.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if self.right < self.left {
            return Err(ChartError::InvalidData(
                "rect right edge must not precede left edge".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One piece of a pixel-space path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    Line {
        from: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        control1: Point,
        control2: Point,
        to: Point,
    },
}

impl PathSegment {
    #[must_use]
    pub fn start(self) -> Point {
        match self {
            Self::Line { from, .. } | Self::Cubic { from, .. } => from,
        }
    }

    #[must_use]
    pub fn end(self) -> Point {
        match self {
            Self::Line { to, .. } | Self::Cubic { to, .. } => to,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::Line { from, to } => from.is_finite() && to.is_finite(),
            Self::Cubic {
                from,
                control1,
                control2,
                to,
            } => from.is_finite() && control1.is_finite() && control2.is_finite() && to.is_finite(),
        }
    }
}

/// Stroke pattern applied to a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    /// Alternating on/off lengths in pixels.
    Dashed { on: f64, off: f64 },
}

/// Stroked open path, used for series lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub segments: Vec<PathSegment>,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub color: Color,
}

impl PathPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.segments.iter().any(|segment| !segment.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let LineStrokeStyle::Dashed { on, off } = self.stroke_style {
            if !(on > 0.0 && off >= 0.0) {
                return Err(ChartError::InvalidData(
                    "dash pattern needs on > 0 and off >= 0".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Closed filled path. The last segment ends where the first one starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPrimitive {
    pub segments: Vec<PathSegment>,
    pub color: Color,
}

impl FillPrimitive {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.start() == last.end(),
            _ => false,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.segments.iter().any(|segment| !segment.is_finite()) {
            return Err(ChartError::InvalidData(
                "fill coordinates must be finite".to_owned(),
            ));
        }
        if !self.is_closed() {
            return Err(ChartError::InvalidData("fill path must be closed".to_owned()));
        }
        self.color.validate()
    }
}

/// Outline ring drawn around a dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotStrokePrimitive {
    pub thickness: f64,
    pub color: Color,
}

/// Filled circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPrimitive {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub stroke: Option<DotStrokePrimitive>,
}

impl DotPrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "dot center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "dot radius must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.color.validate()?;
        }
        self.color.validate()
    }
}
