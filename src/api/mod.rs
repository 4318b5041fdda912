mod engine;
mod engine_config;
mod frame_builder;
mod render_style;
mod snapshot;

pub use engine::BarChartEngine;
pub use engine_config::BarChartConfig;
pub use render_style::ChartStyle;
pub use snapshot::EngineSnapshot;
