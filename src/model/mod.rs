mod chart_set;
mod entry;
mod line_style;

pub use chart_set::{ChartKind, ChartSet, SetKind, ensure_kind, validate_aligned};
pub use entry::Entry;
pub use line_style::{
    DEFAULT_DOTS_RADIUS_DP, DEFAULT_DOTS_STROKE_THICKNESS_DP, DEFAULT_LINE_THICKNESS_DP, DotStroke,
    Dots, Fill, LineStyle, LineStyleBuilder, ScatterStyle,
};
