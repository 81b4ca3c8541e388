use std::time::Duration;

use tracing::{debug, warn};

use crate::animation::{Animation, AnimationState};
use crate::api::ChartEngineConfig;
use crate::core::{
    BarLayoutEngine, ChartArea, ChartLayout, LabelPositions, RegionGrid, RegionHit, ValueAxis,
    compute_line_layout, compute_scatter_layout,
};
use crate::error::{ChartError, ChartResult};
use crate::model::{
    ChartKind, ChartSet, LineStyleBuilder, ScatterStyle, ensure_kind, validate_aligned,
};
use crate::render::Renderer;
use crate::style::{BarChartStyle, LineChartStyle, StyleOverrides, StyleResolver};

/// Headless chart view.
///
/// Owns the data sets, resolved style, label ticks and entry animation of one
/// chart and turns them into frames for a [`Renderer`]. Every call runs to
/// completion on the caller's thread.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    area: ChartArea,
    axis: ValueAxis,
    resolver: StyleResolver,
    bar_style: BarChartStyle,
    line_style: LineChartStyle,
    scatter_style: ScatterStyle,
    sets: Vec<ChartSet>,
    labels: Option<LabelPositions>,
    bar_layout: BarLayoutEngine,
    animation: Animation,
    regions: RegionGrid,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let area = ChartArea::from_viewport(config.viewport, config.padding)?;
        let axis = ValueAxis::new(config.value_min, config.value_max, area)?;
        let resolver = StyleResolver::new(config.platform)?;
        let animation = Animation::new(
            Duration::from_millis(config.animation_duration_ms),
            config.easing,
        )?;

        Ok(Self {
            renderer,
            config,
            area,
            axis,
            bar_style: resolver.resolve_bar(&config.style_overrides),
            line_style: resolver.resolve_line(&config.style_overrides),
            scatter_style: resolver.resolve_scatter()?,
            resolver,
            sets: Vec::new(),
            labels: None,
            bar_layout: BarLayoutEngine::new(),
            animation,
            regions: RegionGrid::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn chart_area(&self) -> ChartArea {
        self.area
    }

    #[must_use]
    pub fn value_axis(&self) -> ValueAxis {
        self.axis
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn sets(&self) -> &[ChartSet] {
        &self.sets
    }

    #[must_use]
    pub fn label_positions(&self) -> Option<&LabelPositions> {
        self.labels.as_ref()
    }

    #[must_use]
    pub fn bar_style(&self) -> BarChartStyle {
        self.bar_style
    }

    #[must_use]
    pub fn line_style(&self) -> LineChartStyle {
        self.line_style
    }

    /// Scatter style with the default dot radius at the configured density.
    #[must_use]
    pub fn default_scatter_style(&self) -> ScatterStyle {
        self.scatter_style
    }

    /// Line style builder seeded with dp defaults at the configured density.
    pub fn line_style_builder(&self) -> ChartResult<LineStyleBuilder> {
        self.resolver.line_style_builder()
    }

    /// Replaces all data sets and regenerates the label ticks.
    ///
    /// Bar charts put one tick in the middle of each equal slot; line and
    /// scatter charts spread ticks between the border spacings.
    pub fn set_data(&mut self, sets: Vec<ChartSet>) -> ChartResult<()> {
        let labels = self.validate_sets(&sets).and_then(|entry_count| {
            match self.config.kind {
                ChartKind::Bar => LabelPositions::centered_slots(self.area, entry_count),
                ChartKind::Line | ChartKind::Scatter => LabelPositions::evenly_spaced(
                    self.area,
                    entry_count,
                    self.config.border_spacing,
                ),
            }
        });
        let labels = labels.inspect_err(|err| warn!(error = %err, "rejected chart data"))?;

        debug!(
            sets = sets.len(),
            entries = labels.len(),
            kind = ?self.config.kind,
            "replace chart data"
        );
        self.sets = sets;
        self.labels = Some(labels);
        self.regions = RegionGrid::default();
        Ok(())
    }

    /// Uses tick positions computed by an external axis layout.
    pub fn set_label_positions(&mut self, positions: Vec<f64>) -> ChartResult<()> {
        let labels = LabelPositions::new(positions)?;
        let entry_count = self.sets.first().map_or(0, ChartSet::len);
        if labels.len() != entry_count {
            warn!(
                positions = labels.len(),
                entries = entry_count,
                "label positions do not match entry count"
            );
            return Err(ChartError::InvalidData(format!(
                "{} label positions for {entry_count} entries",
                labels.len()
            )));
        }
        self.labels = Some(labels);
        self.regions = RegionGrid::default();
        Ok(())
    }

    /// Replaces the values of one set, keeping its labels.
    pub fn update_values(&mut self, set_index: usize, values: &[f64]) -> ChartResult<()> {
        let set = self.sets.get_mut(set_index).ok_or_else(|| {
            ChartError::InvalidData(format!("no chart set at index {set_index}"))
        })?;
        set.update_values(values)?;
        self.regions = RegionGrid::default();
        debug!(set_index, "update set values");
        Ok(())
    }

    pub fn set_bar_spacing(&mut self, spacing: f64) {
        debug!(spacing, "set bar spacing");
        self.bar_style = self.bar_style.with_bar_spacing(spacing);
        self.regions = RegionGrid::default();
    }

    pub fn set_set_spacing(&mut self, spacing: f64) {
        debug!(spacing, "set set spacing");
        self.bar_style = self.bar_style.with_set_spacing(spacing);
        self.regions = RegionGrid::default();
    }

    /// Resolves style again from the platform defaults and new overrides.
    pub fn set_style_overrides(&mut self, overrides: StyleOverrides) {
        self.config.style_overrides = overrides;
        self.bar_style = self.resolver.resolve_bar(&overrides);
        self.line_style = self.resolver.resolve_line(&overrides);
        self.regions = RegionGrid::default();
        debug!(?overrides, "resolve style overrides");
    }

    #[must_use]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn start_animation(&mut self) {
        debug!(
            easing = %self.animation.easing(),
            duration_ms = self.config.animation_duration_ms,
            "start entry animation"
        );
        self.animation.start();
    }

    /// Advances the entry animation by one host frame.
    pub fn tick(&mut self, delta: Duration) -> f64 {
        self.animation.tick(delta)
    }

    pub fn cancel_animation(&mut self) {
        self.animation.cancel();
    }

    /// Share of the real values currently drawn.
    ///
    /// A chart whose animation never started is drawn at full value.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.animation.state() {
            AnimationState::Idle => 1.0,
            AnimationState::Running | AnimationState::Finished => self.animation.progress(),
        }
    }

    /// Computes primitives and regions for the current frame.
    ///
    /// While animating, values grow from the axis minimum towards their real
    /// value by the eased progress.
    pub fn layout(&mut self) -> ChartResult<ChartLayout> {
        let Some(labels) = self.labels.as_ref() else {
            return Err(ChartError::DegenerateLayout(
                "no chart data has been set".to_owned(),
            ));
        };

        let progress = self.progress();
        let animated;
        let sets: &[ChartSet] = if progress == 1.0 {
            &self.sets
        } else {
            animated = self
                .sets
                .iter()
                .map(|set| set.scaled_towards(self.config.value_min, progress))
                .collect::<Vec<_>>();
            &animated
        };

        let layout = match self.config.kind {
            ChartKind::Bar => ChartLayout::Bar(self.bar_layout.layout(
                sets,
                labels,
                self.axis,
                &self.bar_style,
            )?),
            ChartKind::Line => {
                ChartLayout::Line(compute_line_layout(sets, labels, self.axis, &self.line_style)?)
            }
            ChartKind::Scatter => ChartLayout::Scatter(compute_scatter_layout(
                sets,
                labels,
                self.axis,
                &self.line_style,
            )?),
        };

        self.regions = layout.regions().clone();
        Ok(layout)
    }

    /// Lays out the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let layout = self.layout()?;
        let frame = layout.to_frame(self.config.viewport);
        self.renderer.render(&frame)
    }

    /// Regions of the last layout pass.
    ///
    /// Any data, tick or style change clears them until the next layout.
    #[must_use]
    pub fn regions(&self) -> &RegionGrid {
        &self.regions
    }

    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<RegionHit> {
        self.regions.hit_test(x, y)
    }

    /// Value on the axis at pixel row `y`, e.g. under a touch point.
    pub fn value_at(&self, y: f64) -> ChartResult<f64> {
        self.axis.pixel_to_value(y)
    }

    fn validate_sets(&self, sets: &[ChartSet]) -> ChartResult<usize> {
        ensure_kind(sets, self.config.kind)?;
        let entry_count = validate_aligned(sets)?;
        let required = match self.config.kind {
            ChartKind::Bar => 2,
            ChartKind::Line | ChartKind::Scatter => 1,
        };
        if entry_count < required {
            return Err(ChartError::InsufficientLabelPositions {
                required,
                actual: entry_count,
            });
        }
        Ok(entry_count)
    }
}
