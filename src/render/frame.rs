use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{DotPrimitive, FillPrimitive, PathPrimitive, RectPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are listed in paint order within each bucket; backends paint
/// fills, then rects, then paths, then dots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub fills: Vec<FillPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub dots: Vec<DotPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            fills: Vec::new(),
            rects: Vec::new(),
            paths: Vec::new(),
            dots: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for fill in &self.fills {
            fill.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for dot in &self.dots {
            dot.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.rects.is_empty() && self.paths.is_empty() && self.dots.is_empty()
    }
}
