use serde::{Deserialize, Serialize};

use crate::core::types::PlotArea;
use crate::error::{BarChartError, BarChartResult};

/// Default value-axis domain used when a series is empty or its maximum is
/// not positive, so the scale never degenerates to a zero span.
pub const FALLBACK_VALUE_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Linear value axis mapped onto the plot's vertical extent.
///
/// The domain start sits at the plot bottom and the domain end at the plot
/// top, matching the usual upward-growing bar orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> BarChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(BarChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits a `[0, max]` domain from raw values, falling back to
    /// [`FALLBACK_VALUE_DOMAIN`] when no positive maximum exists.
    pub fn from_values<I>(values: I) -> BarChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                return Err(BarChartError::InvalidData(
                    "values must be finite".to_owned(),
                ));
            }
            max = max.max(value);
        }

        if max > 0.0 {
            Self::new(0.0, max)
        } else {
            Self::new(FALLBACK_VALUE_DOMAIN.0, FALLBACK_VALUE_DOMAIN.1)
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value to a y pixel inside `plot` (domain start at the
    /// plot bottom, domain end at the plot top).
    pub fn value_to_pixel(self, value: f64, plot: PlotArea) -> BarChartResult<f64> {
        if !value.is_finite() {
            return Err(BarChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(plot.bottom() - normalized * plot.height)
    }

    pub fn pixel_to_value(self, pixel: f64, plot: PlotArea) -> BarChartResult<f64> {
        if !pixel.is_finite() {
            return Err(BarChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (plot.bottom() - pixel) / plot.height;
        Ok(self.domain_start + normalized * span)
    }
}
