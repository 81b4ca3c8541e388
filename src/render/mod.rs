mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DotPrimitive, DotStrokePrimitive, FillPrimitive, LineStrokeStyle, PathPrimitive,
    PathSegment, Point, RectPrimitive, Shadow,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so rasterization stays
/// isolated from chart data and layout rules.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
