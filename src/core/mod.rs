pub mod band_scale;
pub mod bars;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod transition;
pub mod types;

pub use band_scale::BandScale;
pub use bars::{BarGeometry, project_bars};
pub use scale::{FALLBACK_VALUE_DOMAIN, LinearScale};
pub use series::{SeriesState, SortAxis, SortDirection};
pub use ticks::linear_ticks;
pub use transition::{SlotTransition, TransitionConfig};
pub use types::{DataPoint, Margins, PlotArea, Viewport};
