use serde::Serialize;

use crate::animation::interpolate;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One labelled value of a chart set.
///
/// `color` is an optional per-entry override. Bar and scatter layouts paint it
/// instead of the set color; line layout ignores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    label: String,
    value: f64,
    color: Option<Color>,
}

impl Entry {
    pub fn new(label: impl Into<String>, value: f64) -> ChartResult<Self> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "entry value must be finite".to_owned(),
            ));
        }

        Ok(Self {
            label: label.into(),
            value,
            color: None,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub(crate) fn set_value(&mut self, value: f64) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "entry value must be finite".to_owned(),
            ));
        }
        self.value = value;
        Ok(())
    }

    /// Copy of this entry whose value sits `progress` of the way from
    /// `baseline` to the real value.
    #[must_use]
    pub fn scaled_towards(&self, baseline: f64, progress: f64) -> Self {
        Self {
            label: self.label.clone(),
            value: interpolate(baseline, self.value, progress),
            color: self.color,
        }
    }
}
