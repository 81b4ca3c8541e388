use ordered_float::OrderedFloat;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::projection::check_label_count;
use crate::core::{LabelPositions, Region, RegionGrid, ValueAxis};
use crate::error::{ChartError, ChartResult};
use crate::model::{ChartKind, ChartSet, ensure_kind, validate_aligned};
use crate::render::RectPrimitive;
use crate::style::BarChartStyle;

/// Width of every bar and distance from a label tick to the left edge of its
/// bar group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarMetrics {
    pub bar_width: f64,
    pub drawing_offset: f64,
}

impl BarMetrics {
    /// Derives metrics for `set_count` bars per label from the first two ticks.
    ///
    /// The slot between `x0` and `x1` loses half a bar spacing and one set
    /// spacing per extra set; the rest is split evenly between the bars. The
    /// group is then centred on its tick.
    pub fn compute(set_count: usize, x0: f64, x1: f64, style: &BarChartStyle) -> ChartResult<Self> {
        if set_count == 0 {
            return Err(ChartError::DegenerateLayout(
                "bar layout needs at least one set".to_owned(),
            ));
        }
        if !x0.is_finite() || !x1.is_finite() || x1 <= x0 {
            return Err(ChartError::DegenerateLayout(format!(
                "label span must be positive, got {x0}..{x1}"
            )));
        }
        check_spacing("bar spacing", style.bar_spacing)?;
        check_spacing("set spacing", style.set_spacing)?;

        let n = set_count as f64;
        let bar_width =
            ((x1 - x0) - style.bar_spacing / 2.0 - style.set_spacing * (n - 1.0)) / n;
        if !bar_width.is_finite() || bar_width <= 0.0 {
            return Err(ChartError::DegenerateLayout(format!(
                "spacing leaves no room for bars (bar width {bar_width})"
            )));
        }

        let drawing_offset = if set_count % 2 == 0 {
            n * bar_width / 2.0 + (n - 1.0) * (style.set_spacing / 2.0)
        } else {
            n * bar_width / 2.0 + ((set_count - 1) / 2) as f64 * style.set_spacing
        };

        Ok(Self {
            bar_width,
            drawing_offset,
        })
    }

    /// Left edges of the bars of one group, in set order.
    #[must_use]
    pub fn group_lefts(
        &self,
        tick_x: f64,
        set_count: usize,
        set_spacing: f64,
    ) -> SmallVec<[f64; 4]> {
        let mut lefts = SmallVec::with_capacity(set_count);
        let mut x = tick_x - self.drawing_offset;
        for j in 0..set_count {
            lefts.push(x);
            x += self.bar_width;
            if j + 1 != set_count {
                x += set_spacing;
            }
        }
        lefts
    }
}

fn check_spacing(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Bars and hit regions of one layout pass, both indexed `[set][entry]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarLayout {
    pub metrics: BarMetrics,
    pub bars: Vec<Vec<RectPrimitive>>,
    pub regions: RegionGrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MetricsKey {
    set_count: usize,
    x0: OrderedFloat<f64>,
    x1: OrderedFloat<f64>,
    bar_spacing: OrderedFloat<f64>,
    set_spacing: OrderedFloat<f64>,
}

impl MetricsKey {
    fn new(set_count: usize, x0: f64, x1: f64, style: &BarChartStyle) -> Self {
        Self {
            set_count,
            x0: OrderedFloat(x0),
            x1: OrderedFloat(x1),
            bar_spacing: OrderedFloat(style.bar_spacing),
            set_spacing: OrderedFloat(style.set_spacing),
        }
    }
}

/// Bar layout with a metrics cache.
///
/// Metrics are keyed on every input they depend on, so a spacing or tick
/// change always recomputes them before the next pass.
#[derive(Debug, Clone, Default)]
pub struct BarLayoutEngine {
    cached: Option<(MetricsKey, BarMetrics)>,
}

impl BarLayoutEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    #[must_use]
    pub fn cached_metrics(&self) -> Option<BarMetrics> {
        self.cached.map(|(_, metrics)| metrics)
    }

    pub fn metrics(
        &mut self,
        set_count: usize,
        x0: f64,
        x1: f64,
        style: &BarChartStyle,
    ) -> ChartResult<BarMetrics> {
        let key = MetricsKey::new(set_count, x0, x1, style);
        if let Some((cached_key, metrics)) = self.cached {
            if cached_key == key {
                return Ok(metrics);
            }
        }

        let metrics = BarMetrics::compute(set_count, x0, x1, style)?;
        self.cached = Some((key, metrics));
        Ok(metrics)
    }

    /// Lays out one bar per entry per set.
    ///
    /// Bars span from the entry value down to the inner chart bottom. Each
    /// region is the exact rectangle of its bar.
    pub fn layout(
        &mut self,
        sets: &[ChartSet],
        labels: &LabelPositions,
        axis: ValueAxis,
        style: &BarChartStyle,
    ) -> ChartResult<BarLayout> {
        ensure_kind(sets, ChartKind::Bar)?;
        let entry_count = validate_aligned(sets)?;
        check_label_count(labels, entry_count, 2)?;

        let (x0, x1) = labels.first_pair()?;
        let set_count = sets.len();
        let metrics = self.metrics(set_count, x0, x1, style)?;
        let bottom = axis.inner_bottom();

        let mut bars: Vec<Vec<RectPrimitive>> = sets
            .iter()
            .map(|set| {
                if set.is_visible() {
                    Vec::with_capacity(entry_count)
                } else {
                    Vec::new()
                }
            })
            .collect();

        for (i, tick_x) in labels.as_slice().iter().enumerate() {
            let lefts = metrics.group_lefts(*tick_x, set_count, style.set_spacing);
            for (j, (set, left)) in sets.iter().zip(lefts).enumerate() {
                if !set.is_visible() {
                    continue;
                }
                let entry = &set.entries()[i];
                let top = axis.value_to_pixel(entry.value())?;
                let color = entry.color().unwrap_or(set.color());
                bars[j].push(
                    RectPrimitive::new(left, top, left + metrics.bar_width, bottom, color)
                        .with_shadow(style.shadow),
                );
            }
        }

        let regions = RegionGrid::new(
            bars.iter()
                .map(|set_bars| set_bars.iter().map(Region::from_rect).collect())
                .collect(),
        );

        trace!(
            sets = set_count,
            entries = entry_count,
            bar_width = metrics.bar_width,
            drawing_offset = metrics.drawing_offset,
            "bar layout pass"
        );

        Ok(BarLayout {
            metrics,
            bars,
            regions,
        })
    }
}

/// One-shot bar layout without metrics caching.
pub fn compute_bar_layout(
    sets: &[ChartSet],
    labels: &LabelPositions,
    axis: ValueAxis,
    style: &BarChartStyle,
) -> ChartResult<BarLayout> {
    BarLayoutEngine::new().layout(sets, labels, axis, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Shadow;

    fn style(bar_spacing: f64, set_spacing: f64) -> BarChartStyle {
        BarChartStyle::default()
            .with_bar_spacing(bar_spacing)
            .with_set_spacing(set_spacing)
    }

    #[test]
    fn cache_hits_for_unchanged_inputs_and_misses_on_spacing_change() {
        let mut engine = BarLayoutEngine::new();
        let first = engine
            .metrics(2, 100.0, 200.0, &style(10.0, 20.0))
            .expect("metrics");
        assert_eq!(engine.cached_metrics(), Some(first));

        let changed = engine
            .metrics(2, 100.0, 200.0, &style(10.0, 0.0))
            .expect("metrics");
        assert!((changed.bar_width - 47.5).abs() <= 1e-9);
        assert_eq!(engine.cached_metrics(), Some(changed));

        engine.invalidate();
        assert_eq!(engine.cached_metrics(), None);
    }

    #[test]
    fn group_lefts_skip_set_spacing_after_last_bar() {
        let metrics = BarMetrics {
            bar_width: 10.0,
            drawing_offset: 16.0,
        };
        let lefts = metrics.group_lefts(100.0, 3, 1.0);
        assert_eq!(lefts.as_slice(), &[84.0, 95.0, 106.0]);
    }

    #[test]
    fn zero_radius_shadow_is_dropped() {
        let rect = RectPrimitive::new(0.0, 0.0, 1.0, 1.0, crate::render::Color::BLACK).with_shadow(
            Shadow {
                radius: 0.0,
                dx: 1.0,
                dy: 1.0,
                color: crate::render::Color::BLACK,
            },
        );
        assert_eq!(rect.shadow, None);
    }
}
