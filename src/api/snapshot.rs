use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Margins, SortAxis, SortDirection, Viewport};
use crate::error::{BarChartError, BarChartResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::BarChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub margins: Margins,
    /// Points in their current display order.
    pub points: Vec<DataPoint>,
    pub value_direction: SortDirection,
    pub name_direction: SortDirection,
    pub value_domain: (f64, f64),
    pub hover: HoverState,
    /// Normalized progress of the in-flight transition, `None` when idle.
    pub transition_progress: Option<f64>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> BarChartResult<String> {
        serde_json::to_string(self)
            .map_err(|err| BarChartError::InvalidData(format!("snapshot serialization: {err}")))
    }

    pub fn from_json(json: &str) -> BarChartResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| BarChartError::InvalidData(format!("snapshot deserialization: {err}")))
    }
}

impl<R: Renderer> BarChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport(),
            margins: self.margins(),
            points: self.points().to_vec(),
            value_direction: self.sort_direction(SortAxis::Value),
            name_direction: self.sort_direction(SortAxis::Name),
            value_domain: self.value_domain(),
            hover: self.hover_state().clone(),
            transition_progress: self.transition.as_ref().map(|t| t.progress()),
        }
    }
}
