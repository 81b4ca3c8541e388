use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::model::{Entry, LineStyle, ScatterStyle};
use crate::render::Color;

/// Which chart family a set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Scatter,
}

/// Variant-specific styling carried by a set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SetKind {
    Bar,
    Line(LineStyle),
    Scatter(ScatterStyle),
}

impl SetKind {
    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        match self {
            Self::Bar => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Scatter(_) => ChartKind::Scatter,
        }
    }
}

/// Ordered, styled collection of entries sharing the label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    kind: SetKind,
    entries: Vec<Entry>,
    color: Color,
    visible: bool,
}

impl ChartSet {
    #[must_use]
    pub fn new(kind: SetKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            color: Color::BLACK,
            visible: true,
        }
    }

    #[must_use]
    pub fn bar() -> Self {
        Self::new(SetKind::Bar)
    }

    #[must_use]
    pub fn line(style: LineStyle) -> Self {
        Self::new(SetKind::Line(style))
    }

    #[must_use]
    pub fn scatter(style: ScatterStyle) -> Self {
        Self::new(SetKind::Scatter(style))
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn add_point(&mut self, label: impl Into<String>, value: f64) -> ChartResult<()> {
        self.entries.push(Entry::new(label, value)?);
        Ok(())
    }

    /// Appends a bar entry painted with its own color.
    pub fn add_bar(&mut self, label: impl Into<String>, value: f64, color: Color) -> ChartResult<()> {
        self.entries.push(Entry::new(label, value)?.with_color(color));
        Ok(())
    }

    /// Replaces every entry value in order, keeping labels and colors.
    ///
    /// Fails without touching the set when `values` has the wrong length or
    /// holds a non-finite number.
    pub fn update_values(&mut self, values: &[f64]) -> ChartResult<()> {
        if values.len() != self.entries.len() {
            return Err(ChartError::InvalidData(format!(
                "expected {} values, got {}",
                self.entries.len(),
                values.len()
            )));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "entry value must be finite".to_owned(),
            ));
        }
        for (entry, value) in self.entries.iter_mut().zip(values) {
            entry.set_value(*value)?;
        }
        Ok(())
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn kind(&self) -> &SetKind {
        &self.kind
    }

    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        self.kind.chart_kind()
    }

    #[must_use]
    pub fn line_style(&self) -> Option<&LineStyle> {
        match &self.kind {
            SetKind::Line(style) => Some(style),
            _ => None,
        }
    }

    #[must_use]
    pub fn scatter_style(&self) -> Option<&ScatterStyle> {
        match &self.kind {
            SetKind::Scatter(style) => Some(style),
            _ => None,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Smallest and largest entry value, or `None` for an empty set.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.entries.iter().fold(None, |range, entry| {
            let value = entry.value();
            Some(match range {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            })
        })
    }

    /// Copy of the set with every value multiplied by `progress`.
    #[must_use]
    pub fn scaled(&self, progress: f64) -> Self {
        self.scaled_towards(0.0, progress)
    }

    /// Copy of the set with every value moved `progress` of the way from
    /// `baseline` to its real value.
    #[must_use]
    pub fn scaled_towards(&self, baseline: f64, progress: f64) -> Self {
        Self {
            kind: self.kind,
            entries: self
                .entries
                .iter()
                .map(|entry| entry.scaled_towards(baseline, progress))
                .collect(),
            color: self.color,
            visible: self.visible,
        }
    }
}

/// Checks that `sets` can be drawn together.
///
/// Every set must hold the same number of entries as the first one, and entry
/// `i` must carry the same label in every set. Returns the shared entry count.
pub fn validate_aligned(sets: &[ChartSet]) -> ChartResult<usize> {
    let Some(first) = sets.first() else {
        return Err(ChartError::DegenerateLayout(
            "at least one chart set is required".to_owned(),
        ));
    };

    let expected = first.len();
    for (set_index, set) in sets.iter().enumerate().skip(1) {
        if set.len() != expected {
            return Err(ChartError::EntryCountMismatch {
                set_index,
                expected,
                actual: set.len(),
            });
        }
        for (entry_index, (reference, entry)) in
            first.entries().iter().zip(set.entries()).enumerate()
        {
            if reference.label() != entry.label() {
                return Err(ChartError::LabelMismatch {
                    set_index,
                    entry_index,
                    expected: reference.label().to_owned(),
                    actual: entry.label().to_owned(),
                });
            }
        }
    }

    Ok(expected)
}

/// Rejects any set whose variant differs from `kind`.
pub fn ensure_kind(sets: &[ChartSet], kind: ChartKind) -> ChartResult<()> {
    match sets.iter().position(|set| set.chart_kind() != kind) {
        Some(index) => Err(ChartError::InvalidData(format!(
            "set {index} is a {:?} set, expected {kind:?}",
            sets[index].chart_kind()
        ))),
        None => Ok(()),
    }
}
