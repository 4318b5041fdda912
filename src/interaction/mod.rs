use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BarGeometry, Margins, PlotArea, SortAxis};

/// What a pointer position resolves to, in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The margin strip left of the value axis; a click toggles value sort.
    ToggleZone(SortAxis),
    /// A bar body, by index into the current series order.
    Bar(usize),
    Outside,
}

/// Axis-aligned pixel rectangle used for zone hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoneRect {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The two fixed toggle zones, derived from margins rather than bar geometry
/// so click targets stay large and stable regardless of data size.
#[must_use]
pub fn toggle_zones(plot: PlotArea, margins: Margins) -> SmallVec<[(SortAxis, ZoneRect); 2]> {
    let mut zones = SmallVec::new();
    zones.push((
        SortAxis::Value,
        ZoneRect {
            x: plot.left - margins.left,
            y: plot.top,
            width: margins.left,
            height: plot.height,
        },
    ));
    zones.push((
        SortAxis::Name,
        ZoneRect {
            x: plot.left,
            y: plot.bottom(),
            width: plot.width,
            height: margins.bottom,
        },
    ));
    zones
}

/// Resolves a pointer position against the toggle zones, then the bars.
#[must_use]
pub fn hit_test(plot: PlotArea, margins: Margins, bars: &[BarGeometry], x: f64, y: f64) -> HitTarget {
    for (axis, zone) in toggle_zones(plot, margins) {
        if zone.contains(x, y) {
            return HitTarget::ToggleZone(axis);
        }
    }

    for (index, bar) in bars.iter().enumerate() {
        if bar.contains(x, y) {
            return HitTarget::Bar(index);
        }
    }

    HitTarget::Outside
}

/// Floating label shown while the pointer rests over a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub name: Option<String>,
    pub value: Option<f64>,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            name: None,
            value: None,
        }
    }
}

/// Pointer state owned by the engine. Hover is pure presentation state and
/// never mutates the series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    cursor_x: f64,
    cursor_y: f64,
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(&self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.hover.x = x;
        self.hover.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover.visible = false;
        self.hover.name = None;
        self.hover.value = None;
    }

    pub fn set_hovered_bar(&mut self, bar: Option<(&str, f64)>) {
        match bar {
            Some((name, value)) => {
                self.hover.visible = true;
                self.hover.name = Some(name.to_owned());
                self.hover.value = Some(value);
            }
            None => self.on_pointer_leave(),
        }
    }
}
