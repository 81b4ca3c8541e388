pub mod bar_layout;
pub mod chart_layout;
pub mod labels;
pub mod line_layout;
mod projection;
pub mod region;
pub mod scale;
pub mod scatter_layout;
pub mod types;

pub use bar_layout::{BarLayout, BarLayoutEngine, BarMetrics, compute_bar_layout};
pub use chart_layout::ChartLayout;
pub use labels::LabelPositions;
pub use line_layout::{
    LineLayout, LineSetGeometry, SMOOTH_FACTOR, compute_line_layout, smooth_segments,
    straight_segments,
};
pub use projection::project_points;
pub use region::{Region, RegionGrid, RegionHit};
pub use scale::ValueAxis;
pub use scatter_layout::{ScatterLayout, compute_scatter_layout};
pub use types::{ChartArea, Padding, Viewport};
