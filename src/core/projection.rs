use crate::core::{LabelPositions, ValueAxis};
use crate::error::{ChartError, ChartResult};
use crate::model::ChartSet;
use crate::render::Point;

/// Checks that there is one label position per entry and at least `required`.
pub(crate) fn check_label_count(
    labels: &LabelPositions,
    entry_count: usize,
    required: usize,
) -> ChartResult<()> {
    if labels.len() < required {
        return Err(ChartError::InsufficientLabelPositions {
            required,
            actual: labels.len(),
        });
    }
    if labels.len() != entry_count {
        return Err(ChartError::InvalidData(format!(
            "{} label positions for {entry_count} entries",
            labels.len()
        )));
    }
    Ok(())
}

/// Maps each entry of `set` to its pixel position.
///
/// Entry `i` sits at label tick `i` horizontally and at its value on `axis`
/// vertically. The caller has already matched the label count to the set.
pub fn project_points(
    set: &ChartSet,
    labels: &LabelPositions,
    axis: ValueAxis,
) -> ChartResult<Vec<Point>> {
    set.entries()
        .iter()
        .zip(labels.as_slice())
        .map(|(entry, x)| Ok(Point::new(*x, axis.value_to_pixel(entry.value())?)))
        .collect()
}
