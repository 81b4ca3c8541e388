use serde::Serialize;

use crate::core::ChartArea;
use crate::error::{ChartError, ChartResult};

/// Maps entry values onto the vertical pixel range of a chart area.
///
/// `min` lands on `area.bottom` and `max` on `area.top`. Values outside the
/// range extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueAxis {
    min: f64,
    max: f64,
    top_px: f64,
    bottom_px: f64,
}

impl ValueAxis {
    pub fn new(min: f64, max: f64, area: ChartArea) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(format!(
                "value axis range must be finite with min < max, got {min}..{max}"
            )));
        }

        Ok(Self {
            min,
            max,
            top_px: area.top,
            bottom_px: area.bottom,
        })
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Pixel y of the inner chart bottom, the base of every bar and fill.
    #[must_use]
    pub fn inner_bottom(self) -> f64 {
        self.bottom_px
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.max - self.min;
        let normalized = (value - self.min) / span;
        Ok(self.bottom_px - normalized * (self.bottom_px - self.top_px))
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (self.bottom_px - pixel) / (self.bottom_px - self.top_px);
        Ok(self.min + normalized * (self.max - self.min))
    }
}
