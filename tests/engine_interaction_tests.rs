use barchart_rs::api::{BarChartConfig, BarChartEngine};
use barchart_rs::core::{DataPoint, SortAxis, SortDirection, Viewport};
use barchart_rs::render::NullRenderer;

fn build_engine() -> BarChartEngine<NullRenderer> {
    let renderer = NullRenderer::default();
    let config = BarChartConfig::new(Viewport::new(960, 500));
    let mut engine = BarChartEngine::new(renderer, config).expect("engine init");
    engine
        .set_series(vec![
            DataPoint::new("a", 3.0),
            DataPoint::new("b", 1.0),
            DataPoint::new("c", 2.0),
        ])
        .expect("series init");
    engine
}

#[test]
fn default_layout_reserves_margin_strips_for_the_toggle_zones() {
    let engine = build_engine();
    let plot = engine.plot_area();
    assert!((plot.left - 90.0).abs() <= 1e-12);
    assert!((plot.top - 20.0).abs() <= 1e-12);
    assert!((plot.width - 840.0).abs() <= 1e-12);
    assert!((plot.height - 410.0).abs() <= 1e-12);
}

#[test]
fn value_domain_fits_zero_to_max() {
    let engine = build_engine();
    let (start, end) = engine.value_domain();
    assert!((start - 0.0).abs() <= 1e-12);
    assert!((end - 3.0).abs() <= 1e-12);
}

#[test]
fn click_in_left_margin_toggles_value_sort() {
    let mut engine = build_engine();

    let toggled = engine.click(45.0, 200.0);
    assert_eq!(toggled, Some(SortAxis::Value));
    assert_eq!(
        engine.sort_direction(SortAxis::Value),
        SortDirection::Descending
    );
    // Order changes immediately; the transition only animates positions.
    assert_eq!(engine.order(), vec!["a", "c", "b"]);
    assert!(engine.transition_active());
}

#[test]
fn click_below_category_axis_toggles_name_sort() {
    let mut engine = build_engine();

    let toggled = engine.click(400.0, 450.0);
    assert_eq!(toggled, Some(SortAxis::Name));
    assert_eq!(
        engine.sort_direction(SortAxis::Name),
        SortDirection::Descending
    );
    assert_eq!(engine.order(), vec!["c", "b", "a"]);
}

#[test]
fn clicks_outside_both_zones_change_nothing() {
    let mut engine = build_engine();

    assert_eq!(engine.click(500.0, 200.0), None);
    assert_eq!(engine.click(950.0, 10.0), None);
    assert_eq!(engine.click(45.0, 480.0), None);

    assert_eq!(engine.order(), vec!["a", "b", "c"]);
    assert_eq!(
        engine.sort_direction(SortAxis::Value),
        SortDirection::Ascending
    );
    assert_eq!(
        engine.sort_direction(SortAxis::Name),
        SortDirection::Ascending
    );
    assert!(!engine.transition_active());
}

#[test]
fn zone_toggles_do_not_reset_each_other() {
    let mut engine = build_engine();

    engine.click(45.0, 200.0);
    engine.click(45.0, 200.0);
    engine.click(400.0, 450.0);

    assert_eq!(
        engine.sort_direction(SortAxis::Value),
        SortDirection::Ascending
    );
    assert_eq!(
        engine.sort_direction(SortAxis::Name),
        SortDirection::Descending
    );
}

#[test]
fn hovering_a_bar_shows_its_name_and_value() {
    let mut engine = build_engine();

    // Bar "b" (value 1) occupies the second slot; its top sits well below the
    // plot top, so a point in the slot's lower half lands on the bar.
    engine.pointer_move(500.0, 350.0);
    let hover = engine.hover_state();
    assert!(hover.visible);
    assert_eq!(hover.name.as_deref(), Some("b"));
    assert!((hover.value.expect("hovered value") - 1.0).abs() <= 1e-12);
    assert!((hover.x - 500.0).abs() <= 1e-12);
    assert!((hover.y - 350.0).abs() <= 1e-12);
}

#[test]
fn hover_follows_the_cursor_and_hides_on_leave() {
    let mut engine = build_engine();

    engine.pointer_move(500.0, 350.0);
    engine.pointer_move(510.0, 360.0);
    let hover = engine.hover_state();
    assert!(hover.visible);
    assert!((hover.x - 510.0).abs() <= 1e-12);

    engine.pointer_leave();
    let hover = engine.hover_state();
    assert!(!hover.visible);
    assert_eq!(hover.name, None);
    assert_eq!(hover.value, None);
}

#[test]
fn pointer_above_a_short_bar_is_not_a_hover() {
    let mut engine = build_engine();

    // Same slot as bar "b", but above its top edge.
    engine.pointer_move(500.0, 100.0);
    assert!(!engine.hover_state().visible);
}

#[test]
fn hover_never_mutates_the_series() {
    let mut engine = build_engine();

    engine.pointer_move(500.0, 350.0);
    engine.pointer_move(150.0, 300.0);
    engine.pointer_leave();

    assert_eq!(engine.order(), vec!["a", "b", "c"]);
    assert_eq!(
        engine.sort_direction(SortAxis::Value),
        SortDirection::Ascending
    );
}

#[test]
fn empty_series_renders_axes_without_bars() {
    let renderer = NullRenderer::default();
    let config = BarChartConfig::new(Viewport::new(960, 500));
    let mut engine = BarChartEngine::new(renderer, config).expect("engine init");
    engine.set_series(Vec::new()).expect("empty series");

    assert_eq!(engine.value_domain(), (0.0, 1.0));
    assert!(engine.bar_geometry().expect("geometry").is_empty());

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 0);
    assert!(renderer.last_line_count >= 2);
}

#[test]
fn bar_count_matches_point_count() {
    let mut engine = build_engine();
    assert_eq!(engine.bar_geometry().expect("geometry").len(), 3);

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_rect_count, 3);
}
