use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, error, info};

use crate::core::{
    BandScale, BarGeometry, DataPoint, LinearScale, Margins, PlotArea, SeriesState, SlotTransition,
    SortAxis, SortDirection, Viewport, project_bars,
};
use crate::error::BarChartResult;
use crate::interaction::{HitTarget, HoverState, InteractionState, hit_test};
use crate::loader;
use crate::render::Renderer;

use super::{BarChartConfig, ChartStyle};

/// Main orchestration facade consumed by host applications.
///
/// `BarChartEngine` owns the series order, both sort directions, the scales,
/// pointer/hover state, and the reorder transition, and turns them into
/// renderer calls. All animation time is supplied by the host through
/// [`BarChartEngine::advance`].
pub struct BarChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) plot: PlotArea,
    pub(super) style: ChartStyle,
    pub(super) series: SeriesState,
    pub(super) band: BandScale,
    pub(super) value_scale: LinearScale,
    pub(super) interaction: InteractionState,
    pub(super) transition: Option<SlotTransition>,
}

impl<R: Renderer> BarChartEngine<R> {
    /// Creates an engine with an empty series.
    pub fn new(renderer: R, config: BarChartConfig) -> BarChartResult<Self> {
        let plot = config.validate()?;
        Ok(Self {
            renderer,
            config,
            plot,
            style: ChartStyle::default(),
            series: SeriesState::new(Vec::new())?,
            band: BandScale::new(0, config.band_padding_ratio)?,
            value_scale: LinearScale::from_values(std::iter::empty())?,
            interaction: InteractionState::default(),
            transition: None,
        })
    }

    /// Builds an engine from a TSV file, honoring the load contract: a load
    /// failure is reported once and short-circuits construction, so no render
    /// side effects can occur.
    pub fn from_tsv_path(
        renderer: R,
        config: BarChartConfig,
        path: impl AsRef<Path>,
    ) -> BarChartResult<Self> {
        let points = loader::load_tsv_path(path.as_ref()).map_err(|load_error| {
            error!(path = %path.as_ref().display(), error = %load_error, "series load failed");
            load_error
        })?;

        let mut engine = Self::new(renderer, config)?;
        engine.set_series(points)?;
        Ok(engine)
    }

    /// Replaces the series, keeping the given order as the unsorted baseline.
    ///
    /// Recomputes the band domain from the new order and the value domain as
    /// `[0, max(value)]` (with the documented fallback for empty or
    /// non-positive data), and drops any in-flight transition and hover state.
    pub fn set_series(&mut self, points: Vec<DataPoint>) -> BarChartResult<()> {
        let series = SeriesState::new(points)?;
        self.band = BandScale::new(series.len(), self.config.band_padding_ratio)?;
        self.value_scale = LinearScale::from_values(series.points().iter().map(|p| p.value))?;
        self.series = series;
        self.transition = None;
        self.interaction = InteractionState::default();
        info!(points = self.series.len(), "series initialized");
        Ok(())
    }

    /// Flips the value-sort direction and stably re-sorts by value.
    pub fn toggle_sort_by_value(&mut self) -> SortDirection {
        self.toggle_sort(SortAxis::Value)
    }

    /// Flips the name-sort direction and stably re-sorts by name.
    pub fn toggle_sort_by_name(&mut self) -> SortDirection {
        self.toggle_sort(SortAxis::Name)
    }

    /// Toggles one axis and retargets the reorder transition.
    ///
    /// When a transition is already running the new one starts from the
    /// current interpolated positions, so a rapid second toggle re-aims the
    /// bars without a visual jump (last write wins).
    pub fn toggle_sort(&mut self, axis: SortAxis) -> SortDirection {
        let start = self.animated_slot_positions();
        let direction = self.series.toggle_sort(axis);
        let target = self.slot_positions();
        self.transition =
            SlotTransition::between(&start, &target, self.config.transition.duration_seconds);
        debug!(?axis, ?direction, animated = self.transition.is_some(), "sort toggled");
        direction
    }

    /// Routes a click through the toggle zones. Returns the axis that was
    /// toggled, or `None` when the click landed outside both zones (clicks on
    /// bars or the plot body deliberately do nothing).
    pub fn click(&mut self, x: f64, y: f64) -> Option<SortAxis> {
        let bars = self.bars_for_hit_test();
        match hit_test(self.plot, self.config.margins, &bars, x, y) {
            HitTarget::ToggleZone(axis) => {
                self.toggle_sort(axis);
                Some(axis)
            }
            HitTarget::Bar(_) | HitTarget::Outside => None,
        }
    }

    /// Updates cursor state and the hover tooltip. Hover is presentation-only
    /// and never mutates the series.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
        let bars = self.bars_for_hit_test();
        match hit_test(self.plot, self.config.margins, &bars, x, y) {
            HitTarget::Bar(index) => {
                let point = &self.series.points()[index];
                let value = point.value;
                let name = point.name.clone();
                self.interaction.set_hovered_bar(Some((&name, value)));
            }
            HitTarget::ToggleZone(_) | HitTarget::Outside => {
                self.interaction.set_hovered_bar(None);
            }
        }
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Advances the reorder transition. Returns `true` while more animation
    /// frames are pending.
    pub fn advance(&mut self, delta_seconds: f64) -> bool {
        match &mut self.transition {
            Some(transition) => {
                let active = transition.step(delta_seconds);
                if !active {
                    self.transition = None;
                }
                active
            }
            None => false,
        }
    }

    /// Completes any in-flight transition immediately at its target order.
    pub fn cancel_transition(&mut self) {
        if let Some(transition) = &mut self.transition {
            transition.cancel();
        }
        self.transition = None;
    }

    #[must_use]
    pub fn transition_active(&self) -> bool {
        self.transition.is_some()
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> BarChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Bar rectangles in current series order, with x positions taken from
    /// the in-flight transition when one is running.
    pub fn bar_geometry(&self) -> BarChartResult<Vec<BarGeometry>> {
        let mut bars = project_bars(self.series.points(), self.band, self.value_scale, self.plot)?;
        if let Some(transition) = &self.transition {
            for (bar, point) in bars.iter_mut().zip(self.series.points()) {
                if let Some(x_left) = transition.position_of(&point.name) {
                    let width = bar.width();
                    bar.x_left = x_left;
                    bar.x_right = x_left + width;
                }
            }
        }
        Ok(bars)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.series.points()
    }

    /// Current series order as names.
    #[must_use]
    pub fn order(&self) -> Vec<&str> {
        self.series.names().collect()
    }

    #[must_use]
    pub fn sort_direction(&self, axis: SortAxis) -> SortDirection {
        self.series.direction(axis)
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.config.margins
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> BarChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Static slot left-x per bar name for the current order.
    pub(super) fn slot_positions(&self) -> IndexMap<String, f64> {
        self.series
            .points()
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                self.band
                    .slot_left(index, self.plot)
                    .map(|x| (point.name.clone(), x))
            })
            .collect()
    }

    /// Slot positions as currently displayed: interpolated while a transition
    /// is running, static otherwise.
    fn animated_slot_positions(&self) -> IndexMap<String, f64> {
        match &self.transition {
            Some(transition) => transition.positions(),
            None => self.slot_positions(),
        }
    }

    /// Geometry for hit testing. The series is validated at construction, so
    /// projection cannot fail here; an empty set degrades to zone-only hits.
    fn bars_for_hit_test(&self) -> Vec<BarGeometry> {
        self.bar_geometry().unwrap_or_default()
    }
}
