use serde::Serialize;
use tracing::trace;

use crate::core::projection::{check_label_count, project_points};
use crate::core::{LabelPositions, Region, RegionGrid, ValueAxis};
use crate::error::{ChartError, ChartResult};
use crate::model::{ChartKind, ChartSet, LineStyle, ensure_kind, validate_aligned};
use crate::render::{
    DotPrimitive, DotStrokePrimitive, FillPrimitive, LineStrokeStyle, PathPrimitive, PathSegment,
    Point,
};
use crate::style::LineChartStyle;

/// Share of the neighbour-to-neighbour vector used for Bezier control points.
pub const SMOOTH_FACTOR: f64 = 0.15;

/// Geometry of one line set.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LineSetGeometry {
    pub points: Vec<Point>,
    /// `None` for hidden sets and sets with fewer than two entries.
    pub line: Option<PathPrimitive>,
    pub fill: Option<FillPrimitive>,
    pub dots: Vec<DotPrimitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayout {
    pub sets: Vec<LineSetGeometry>,
    pub regions: RegionGrid,
}

/// Lays out every line set against the shared label ticks.
///
/// Regions are one square per entry, centred on its point.
pub fn compute_line_layout(
    sets: &[ChartSet],
    labels: &LabelPositions,
    axis: ValueAxis,
    chart_style: &LineChartStyle,
) -> ChartResult<LineLayout> {
    ensure_kind(sets, ChartKind::Line)?;
    let entry_count = validate_aligned(sets)?;
    check_label_count(labels, entry_count, 1)?;
    check_region_radius(chart_style.region_radius)?;

    let mut geometries = Vec::with_capacity(sets.len());
    let mut regions = Vec::with_capacity(sets.len());

    for set in sets {
        let Some(style) = set.line_style().filter(|_| set.is_visible()) else {
            geometries.push(LineSetGeometry::default());
            regions.push(Vec::new());
            continue;
        };

        let points = project_points(set, labels, axis)?;
        let segments = if style.is_smooth() {
            smooth_segments(&points)
        } else {
            straight_segments(&points)
        };

        let fill = (style.fill().enabled && !segments.is_empty())
            .then(|| fill_primitive(&segments, &points, axis.inner_bottom(), style));
        let line = (!segments.is_empty()).then(|| PathPrimitive {
            segments,
            stroke_width: style.line_thickness(),
            stroke_style: if style.is_dashed() {
                LineStrokeStyle::Dashed {
                    on: chart_style.dash_on,
                    off: chart_style.dash_off,
                }
            } else {
                LineStrokeStyle::Solid
            },
            color: style.line_color(),
        });

        regions.push(
            points
                .iter()
                .map(|point| Region::around(*point, chart_style.region_radius))
                .collect(),
        );
        geometries.push(LineSetGeometry {
            dots: dot_primitives(&points, style),
            points,
            line,
            fill,
        });
    }

    trace!(sets = sets.len(), entries = entry_count, "line layout pass");

    Ok(LineLayout {
        sets: geometries,
        regions: RegionGrid::new(regions),
    })
}

pub(crate) fn check_region_radius(radius: f64) -> ChartResult<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "region radius must be finite and >= 0, got {radius}"
        )));
    }
    Ok(())
}

#[must_use]
pub fn straight_segments(points: &[Point]) -> Vec<PathSegment> {
    points
        .windows(2)
        .map(|pair| PathSegment::Line {
            from: pair[0],
            to: pair[1],
        })
        .collect()
}

/// Cubic segments through every point.
///
/// The tangent at a point follows the vector between its two neighbours,
/// with indices clamped at both ends of the series.
#[must_use]
pub fn smooth_segments(points: &[Point]) -> Vec<PathSegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let last = points.len() - 1;
    let at = |index: isize| points[index.clamp(0, last as isize) as usize];

    (0..last)
        .map(|i| {
            let i = i as isize;
            let current = at(i);
            let next = at(i + 1);
            let previous = at(i - 1);
            let after_next = at(i + 2);

            PathSegment::Cubic {
                from: current,
                control1: Point::new(
                    current.x + SMOOTH_FACTOR * (next.x - previous.x),
                    current.y + SMOOTH_FACTOR * (next.y - previous.y),
                ),
                control2: Point::new(
                    next.x - SMOOTH_FACTOR * (after_next.x - current.x),
                    next.y - SMOOTH_FACTOR * (after_next.y - current.y),
                ),
                to: next,
            }
        })
        .collect()
}

fn fill_primitive(
    segments: &[PathSegment],
    points: &[Point],
    baseline_y: f64,
    style: &LineStyle,
) -> FillPrimitive {
    let first = points[0];
    let last = points[points.len() - 1];
    let last_base = Point::new(last.x, baseline_y);
    let first_base = Point::new(first.x, baseline_y);

    let mut closed = Vec::with_capacity(segments.len() + 3);
    closed.extend_from_slice(segments);
    closed.push(PathSegment::Line {
        from: last,
        to: last_base,
    });
    closed.push(PathSegment::Line {
        from: last_base,
        to: first_base,
    });
    closed.push(PathSegment::Line {
        from: first_base,
        to: first,
    });

    FillPrimitive {
        segments: closed,
        color: style.fill().color,
    }
}

fn dot_primitives(points: &[Point], style: &LineStyle) -> Vec<DotPrimitive> {
    let dots = style.dots();
    if !dots.enabled {
        return Vec::new();
    }

    let stroke = dots.stroke.enabled.then_some(DotStrokePrimitive {
        thickness: dots.stroke.thickness,
        color: dots.stroke.color,
    });
    points
        .iter()
        .map(|center| DotPrimitive {
            center: *center,
            radius: dots.radius,
            color: dots.color,
            stroke,
        })
        .collect()
}
