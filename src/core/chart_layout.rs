use serde::Serialize;

use crate::core::{BarLayout, LineLayout, RegionGrid, ScatterLayout, Viewport};
use crate::render::RenderFrame;

/// Output of one layout pass for any chart kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartLayout {
    Bar(BarLayout),
    Line(LineLayout),
    Scatter(ScatterLayout),
}

impl ChartLayout {
    #[must_use]
    pub fn regions(&self) -> &RegionGrid {
        match self {
            Self::Bar(layout) => &layout.regions,
            Self::Line(layout) => &layout.regions,
            Self::Scatter(layout) => &layout.regions,
        }
    }

    /// Flattens the per-set primitives into a frame, in set order.
    #[must_use]
    pub fn to_frame(&self, viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        match self {
            Self::Bar(layout) => {
                frame.rects = layout.bars.iter().flatten().copied().collect();
            }
            Self::Line(layout) => {
                for set in &layout.sets {
                    frame.fills.extend(set.fill.iter().cloned());
                    frame.paths.extend(set.line.iter().cloned());
                    frame.dots.extend(set.dots.iter().copied());
                }
            }
            Self::Scatter(layout) => {
                frame.dots = layout.dots.iter().flatten().copied().collect();
            }
        }
        frame
    }
}
