pub(crate) const VALUE_AXIS_TARGET_SPACING_PX: f64 = 40.0;
pub(crate) const VALUE_AXIS_MIN_TICKS: usize = 2;
pub(crate) const VALUE_AXIS_MAX_TICKS: usize = 12;

/// Picks a tick count from available axis span and a target pixel spacing.
pub(crate) fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Returns ascending tick values covering `domain` on a 1-2-5 step ladder.
///
/// The first tick is the smallest step multiple >= the domain start, so ticks
/// always land on round values inside the domain.
pub fn linear_ticks(domain: (f64, f64), target_count: usize) -> Vec<f64> {
    let (start, end) = domain;
    if !start.is_finite() || !end.is_finite() || end <= start || target_count < 2 {
        return Vec::new();
    }

    let step = nice_step((end - start) / (target_count.saturating_sub(1)) as f64);
    if step <= 0.0 {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let mut tick = (start / step).ceil() * step;
    while tick <= end + step * 1e-9 {
        // Snap near-zero accumulation error back onto the grid.
        ticks.push((tick / step).round() * step);
        tick += step;
    }
    ticks
}

/// Rounds a raw step up to the nearest 1, 2, or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
