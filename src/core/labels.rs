use serde::Serialize;

use crate::core::ChartArea;
use crate::error::{ChartError, ChartResult};

/// Pixel x-positions of the label ticks, one per entry index.
///
/// Positions are finite and strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPositions {
    xs: Vec<f64>,
}

impl LabelPositions {
    pub fn new(xs: Vec<f64>) -> ChartResult<Self> {
        if xs.is_empty() {
            return Err(ChartError::InsufficientLabelPositions {
                required: 1,
                actual: 0,
            });
        }
        if xs.iter().any(|x| !x.is_finite()) {
            return Err(ChartError::InvalidData(
                "label positions must be finite".to_owned(),
            ));
        }
        if xs.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::InvalidData(
                "label positions must be strictly increasing".to_owned(),
            ));
        }
        Ok(Self { xs })
    }

    /// Spreads `count` ticks from `area.left + border` to `area.right - border`.
    ///
    /// A single tick sits at the horizontal center of the area.
    pub fn evenly_spaced(area: ChartArea, count: usize, border_spacing: f64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InsufficientLabelPositions {
                required: 1,
                actual: 0,
            });
        }
        if !border_spacing.is_finite() || border_spacing < 0.0 {
            return Err(ChartError::InvalidConfig(
                "border spacing must be finite and >= 0".to_owned(),
            ));
        }

        let start = area.left + border_spacing;
        let end = area.right - border_spacing;
        if count == 1 {
            return Self::new(vec![(area.left + area.right) * 0.5]);
        }
        if end <= start {
            return Err(ChartError::DegenerateLayout(
                "border spacing leaves no room for labels".to_owned(),
            ));
        }

        let step = (end - start) / (count - 1) as f64;
        Self::new((0..count).map(|i| start + step * i as f64).collect())
    }

    /// Places one tick at the center of each of `count` equal slots.
    ///
    /// This is the bar-chart arrangement: every group of bars gets a slot of
    /// the same width and half a slot of margin remains at both edges.
    pub fn centered_slots(area: ChartArea, count: usize) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InsufficientLabelPositions {
                required: 1,
                actual: 0,
            });
        }

        let slot = area.width() / count as f64;
        Self::new(
            (0..count)
                .map(|i| area.left + slot * (i as f64 + 0.5))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.xs.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the first two ticks, which define the per-label slot width.
    pub fn first_pair(&self) -> ChartResult<(f64, f64)> {
        match self.xs.as_slice() {
            [x0, x1, ..] => Ok((*x0, *x1)),
            _ => Err(ChartError::InsufficientLabelPositions {
                required: 2,
                actual: self.xs.len(),
            }),
        }
    }
}
