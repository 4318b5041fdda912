use serde::{Deserialize, Serialize};

use crate::core::types::PlotArea;
use crate::error::{BarChartError, BarChartResult};

/// Categorical slot layout across the plot's horizontal extent.
///
/// Each of `len` bands gets an equal step; `padding_ratio` reserves the same
/// fraction of a step between bands (inner) and at both edges (outer), the
/// D3 band convention:
///
/// ```text
/// step      = width / (len - padding + 2 * padding)
/// bandwidth = step * (1 - padding)
/// slot(i)   = plot.left + step * (padding + i)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    len: usize,
    padding_ratio: f64,
}

impl BandScale {
    pub fn new(len: usize, padding_ratio: f64) -> BarChartResult<Self> {
        if !padding_ratio.is_finite() || !(0.0..1.0).contains(&padding_ratio) {
            return Err(BarChartError::InvalidData(
                "band padding ratio must be finite and in [0, 1)".to_owned(),
            ));
        }

        Ok(Self { len, padding_ratio })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn step(self, plot: PlotArea) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        plot.width / (self.len as f64 + self.padding_ratio)
    }

    #[must_use]
    pub fn bandwidth(self, plot: PlotArea) -> f64 {
        self.step(plot) * (1.0 - self.padding_ratio)
    }

    /// Left edge of slot `index`, or `None` when the index is out of range.
    #[must_use]
    pub fn slot_left(self, index: usize, plot: PlotArea) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        let step = self.step(plot);
        Some(plot.left + step * (self.padding_ratio + index as f64))
    }

    /// Center x of slot `index`, used for category labels.
    #[must_use]
    pub fn slot_center(self, index: usize, plot: PlotArea) -> Option<f64> {
        self.slot_left(index, plot)
            .map(|left| left + self.bandwidth(plot) * 0.5)
    }
}
