use crate::core::ticks::{
    VALUE_AXIS_MAX_TICKS, VALUE_AXIS_MIN_TICKS, VALUE_AXIS_TARGET_SPACING_PX, tick_target_count,
};
use crate::core::{SortAxis, linear_ticks};
use crate::error::BarChartResult;
use crate::interaction::toggle_zones;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::BarChartEngine;

const TICK_LABEL_GAP_PX: f64 = 8.0;
const CATEGORY_LABEL_GAP_PX: f64 = 16.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
// Rough monospace-ish advance used to size the tooltip box without a text
// measurement backend.
const TOOLTIP_GLYPH_ADVANCE_RATIO: f64 = 0.6;

impl<R: Renderer> BarChartEngine<R> {
    /// Materializes the full deterministic scene for one draw pass.
    pub fn build_frame(&self) -> BarChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport());
        self.append_axis_primitives(&mut frame)?;
        self.append_bar_primitives(&mut frame)?;
        self.append_category_label_primitives(&mut frame)?;
        self.append_toggle_zone_primitives(&mut frame);
        self.append_tooltip_primitives(&mut frame);
        Ok(frame)
    }

    fn append_axis_primitives(&self, frame: &mut RenderFrame) -> BarChartResult<()> {
        let plot = self.plot;
        let style = self.style;

        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.bottom(),
            style.axis_stroke_width,
            style.axis_color,
        ));
        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            style.axis_stroke_width,
            style.axis_color,
        ));

        let target = tick_target_count(
            plot.height,
            VALUE_AXIS_TARGET_SPACING_PX,
            VALUE_AXIS_MIN_TICKS,
            VALUE_AXIS_MAX_TICKS,
        );
        for tick in linear_ticks(self.value_scale.domain(), target) {
            let y = self.value_scale.value_to_pixel(tick, plot)?;
            frame.lines.push(LinePrimitive::new(
                plot.left - style.tick_length_px,
                y,
                plot.left,
                y,
                style.axis_stroke_width,
                style.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_value(tick),
                plot.left - TICK_LABEL_GAP_PX,
                y + style.label_font_size_px * 0.35,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Right,
            ));
        }

        Ok(())
    }

    fn append_bar_primitives(&self, frame: &mut RenderFrame) -> BarChartResult<()> {
        let style = self.style;
        for bar in self.bar_geometry()? {
            frame.rects.push(RectPrimitive::new(
                bar.x_left,
                bar.y_top,
                bar.width(),
                bar.y_bottom - bar.y_top,
                style.bar_fill,
            ));
        }
        Ok(())
    }

    /// Category labels ride along with their bars while a transition runs.
    fn append_category_label_primitives(&self, frame: &mut RenderFrame) -> BarChartResult<()> {
        let style = self.style;
        let y = self.plot.bottom() + CATEGORY_LABEL_GAP_PX;
        for (bar, point) in self.bar_geometry()?.iter().zip(self.points()) {
            frame.texts.push(TextPrimitive::new(
                point.name.clone(),
                bar.x_left + bar.width() * 0.5,
                y,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn append_toggle_zone_primitives(&self, frame: &mut RenderFrame) {
        if !self.config.debug_zones {
            return;
        }

        for (axis, zone) in toggle_zones(self.plot, self.config.margins) {
            let fill = match axis {
                SortAxis::Value => self.style.value_zone_debug_fill,
                SortAxis::Name => self.style.name_zone_debug_fill,
            };
            frame
                .rects
                .push(RectPrimitive::new(zone.x, zone.y, zone.width, zone.height, fill));
        }
    }

    fn append_tooltip_primitives(&self, frame: &mut RenderFrame) {
        let hover = self.hover_state();
        if !hover.visible {
            return;
        }
        let (Some(name), Some(value)) = (hover.name.as_deref(), hover.value) else {
            return;
        };

        let style = self.style;
        let name_line = format!("name: {name}");
        let value_line = format!("value: {}", format_value(value));
        let widest_chars = name_line.chars().count().max(value_line.chars().count());

        let x = hover.x + self.config.tooltip_offset_px;
        let y = hover.y + self.config.tooltip_offset_px;
        let line_height = style.tooltip_font_size_px * 1.3;
        let box_width = widest_chars as f64 * style.tooltip_font_size_px * TOOLTIP_GLYPH_ADVANCE_RATIO
            + TOOLTIP_PADDING_PX * 2.0;
        let box_height = line_height * 2.0 + TOOLTIP_PADDING_PX * 2.0;

        frame.rects.push(RectPrimitive::new(
            x,
            y,
            box_width,
            box_height,
            style.tooltip_background,
        ));
        for (row, line) in [name_line, value_line].into_iter().enumerate() {
            frame.texts.push(TextPrimitive::new(
                line,
                x + TOOLTIP_PADDING_PX,
                y + TOOLTIP_PADDING_PX + line_height * (row as f64 + 0.75),
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Left,
            ));
        }
    }
}

/// Formats an axis or tooltip value: integers without a fraction, everything
/// else trimmed to a short decimal tail.
fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let mut text = format!("{value:.3}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}
