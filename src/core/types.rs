use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

/// Inner chart rectangle where entries are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartArea {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        if !left.is_finite() || !top.is_finite() || !right.is_finite() || !bottom.is_finite() {
            return Err(ChartError::InvalidData(
                "chart area bounds must be finite".to_owned(),
            ));
        }
        if right <= left || bottom <= top {
            return Err(ChartError::DegenerateLayout(format!(
                "chart area must have positive size, got {left}..{right} x {top}..{bottom}"
            )));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Derives the inner area by removing `padding` from the viewport.
    pub fn from_viewport(viewport: Viewport, padding: Padding) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(
            padding.left,
            padding.top,
            f64::from(viewport.width) - padding.right,
            f64::from(viewport.height) - padding.bottom,
        )
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}
