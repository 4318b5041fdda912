use serde::{Deserialize, Serialize};

use crate::core::band_scale::BandScale;
use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, PlotArea};
use crate::error::BarChartResult;

/// Deterministic pixel geometry for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn width(self) -> f64 {
        self.x_right - self.x_left
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x_left && x < self.x_right && y >= self.y_top && y < self.y_bottom
    }
}

/// Projects points into bar rectangles, one per point in slot order.
///
/// Each bar spans from the value axis baseline up to the sample value and
/// occupies the bandwidth of its slot. The baseline is clamped so bars for
/// values below the domain start still produce non-inverted rects.
pub fn project_bars(
    points: &[DataPoint],
    band: BandScale,
    value_scale: LinearScale,
    plot: PlotArea,
) -> BarChartResult<Vec<BarGeometry>> {
    let baseline_y = value_scale.value_to_pixel(value_scale.domain().0, plot)?;
    let bandwidth = band.bandwidth(plot);

    let mut bars = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        // Slot count always matches the point count, so the lookup cannot miss.
        let Some(x_left) = band.slot_left(index, plot) else {
            continue;
        };
        let y_value = value_scale.value_to_pixel(point.value, plot)?;
        bars.push(BarGeometry {
            x_left,
            x_right: x_left + bandwidth,
            y_top: y_value.min(baseline_y),
            y_bottom: y_value.max(baseline_y),
        });
    }

    Ok(bars)
}
