use serde::Serialize;
use tracing::trace;

use crate::core::line_layout::check_region_radius;
use crate::core::projection::{check_label_count, project_points};
use crate::core::{LabelPositions, Region, RegionGrid, ValueAxis};
use crate::error::ChartResult;
use crate::model::{ChartKind, ChartSet, ensure_kind, validate_aligned};
use crate::render::DotPrimitive;
use crate::style::LineChartStyle;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterLayout {
    pub dots: Vec<Vec<DotPrimitive>>,
    pub regions: RegionGrid,
}

/// One dot per entry, painted with the entry color or else the set color.
pub fn compute_scatter_layout(
    sets: &[ChartSet],
    labels: &LabelPositions,
    axis: ValueAxis,
    chart_style: &LineChartStyle,
) -> ChartResult<ScatterLayout> {
    ensure_kind(sets, ChartKind::Scatter)?;
    let entry_count = validate_aligned(sets)?;
    check_label_count(labels, entry_count, 1)?;
    check_region_radius(chart_style.region_radius)?;

    let mut dots = Vec::with_capacity(sets.len());
    let mut regions = Vec::with_capacity(sets.len());
    for set in sets {
        let Some(style) = set.scatter_style().filter(|_| set.is_visible()) else {
            dots.push(Vec::new());
            regions.push(Vec::new());
            continue;
        };

        let points = project_points(set, labels, axis)?;
        regions.push(
            points
                .iter()
                .map(|point| Region::around(*point, chart_style.region_radius))
                .collect(),
        );
        dots.push(
            points
                .into_iter()
                .zip(set.entries())
                .map(|(center, entry)| DotPrimitive {
                    center,
                    radius: style.radius(),
                    color: entry.color().unwrap_or(set.color()),
                    stroke: None,
                })
                .collect(),
        );
    }

    trace!(sets = sets.len(), entries = entry_count, "scatter layout pass");

    Ok(ScatterLayout {
        dots,
        regions: RegionGrid::new(regions),
    })
}
