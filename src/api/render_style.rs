use crate::error::BarChartResult;
use crate::render::Color;

/// Visual styling applied while building render frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub bar_fill: Color,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_length_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub tooltip_background: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    /// Fill for the value-sort zone when debug zones are enabled.
    pub value_zone_debug_fill: Color,
    /// Fill for the name-sort zone when debug zones are enabled.
    pub name_zone_debug_fill: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_fill: Color::rgb(0.27, 0.51, 0.71),
            axis_color: Color::rgb(0.2, 0.2, 0.2),
            axis_stroke_width: 1.0,
            tick_length_px: 6.0,
            label_color: Color::rgb(0.2, 0.2, 0.2),
            label_font_size_px: 12.0,
            tooltip_background: Color::rgba(1.0, 1.0, 1.0, 0.95),
            tooltip_text_color: Color::rgb(0.1, 0.1, 0.1),
            tooltip_font_size_px: 12.0,
            value_zone_debug_fill: Color::rgba(1.0, 0.0, 0.0, 0.10),
            name_zone_debug_fill: Color::rgba(0.0, 0.0, 1.0, 0.10),
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> BarChartResult<()> {
        self.bar_fill.validate()?;
        self.axis_color.validate()?;
        self.label_color.validate()?;
        self.tooltip_background.validate()?;
        self.tooltip_text_color.validate()?;
        self.value_zone_debug_fill.validate()?;
        self.name_zone_debug_fill.validate()?;

        for (field, value) in [
            ("axis stroke width", self.axis_stroke_width),
            ("tick length", self.tick_length_px),
            ("label font size", self.label_font_size_px),
            ("tooltip font size", self.tooltip_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::error::BarChartError::InvalidData(format!(
                    "{field} must be finite and > 0"
                )));
            }
        }

        Ok(())
    }
}
