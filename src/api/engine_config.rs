use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, TransitionConfig, Viewport};
use crate::error::{BarChartError, BarChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Visual styling is set separately
/// through [`crate::api::ChartStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_band_padding_ratio")]
    pub band_padding_ratio: f64,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default = "default_tooltip_offset_px")]
    pub tooltip_offset_px: f64,
    /// Paints the toggle zones with translucent fills so their click areas
    /// are visible while tuning margins.
    #[serde(default)]
    pub debug_zones: bool,
}

impl BarChartConfig {
    /// Creates a config with default margins, padding, and transition tuning.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            band_padding_ratio: default_band_padding_ratio(),
            transition: TransitionConfig::default(),
            tooltip_offset_px: default_tooltip_offset_px(),
            debug_zones: false,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_band_padding_ratio(mut self, ratio: f64) -> Self {
        self.band_padding_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_transition_duration(mut self, duration_seconds: f64) -> Self {
        self.transition.duration_seconds = duration_seconds;
        self
    }

    #[must_use]
    pub fn with_tooltip_offset(mut self, offset_px: f64) -> Self {
        self.tooltip_offset_px = offset_px;
        self
    }

    #[must_use]
    pub fn with_debug_zones(mut self, enabled: bool) -> Self {
        self.debug_zones = enabled;
        self
    }

    /// Validates the config and returns the resulting plot area.
    pub fn validate(&self) -> BarChartResult<PlotArea> {
        if !(0.0..1.0).contains(&self.band_padding_ratio) || !self.band_padding_ratio.is_finite() {
            return Err(BarChartError::InvalidData(
                "band padding ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.transition.duration_seconds.is_finite() || self.transition.duration_seconds < 0.0 {
            return Err(BarChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if !self.tooltip_offset_px.is_finite() {
            return Err(BarChartError::InvalidData(
                "tooltip offset must be finite".to_owned(),
            ));
        }

        PlotArea::from_viewport(self.viewport, self.margins)
    }
}

fn default_band_padding_ratio() -> f64 {
    0.1
}

fn default_tooltip_offset_px() -> f64 {
    12.0
}
