use timeline_rs::TimelineError;
use timeline_rs::api::{EventStyleVars, OBSERVED_ATTRIBUTES, TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{EventSpec, LayoutMetrics, PlotData, Viewport};
use timeline_rs::interaction::ZoomBounds;
use timeline_rs::render::NullRenderer;

fn new_engine() -> TimelineEngine<NullRenderer> {
    let layout = LayoutMetrics::new(500.0, Viewport::new(500, 120));
    TimelineEngine::new(NullRenderer::default(), TimelineEngineConfig::new(layout))
        .expect("engine init")
}

#[test]
fn engine_starts_on_widget_defaults() {
    let engine = new_engine();

    assert_eq!(engine.zoom(), 1.0);
    assert_eq!(engine.base_px_per_sec(), 50.0);
    assert_eq!(engine.nominal_duration(), 2.5);
    assert_eq!(engine.visible_range(), (0.0, 10.0));
    assert_eq!(engine.surface(), Viewport::new(500, 120));
}

#[test]
fn observed_attribute_names_form_the_host_contract() {
    assert_eq!(OBSERVED_ATTRIBUTES, ["duration", "pxPerSec", "position"]);
}

#[test]
fn set_zoom_stores_raw_value_and_clamps_only_the_slider() {
    let mut engine = new_engine();

    engine.set_zoom(5.0).expect("zoom beyond slider range");

    assert_eq!(engine.zoom(), 5.0);
    assert_eq!(engine.zoom_control().value(), 3.0);
    assert_eq!(engine.visible_range(), (0.0, 2.0));
}

#[test]
fn zoom_round_trip_restores_the_visible_range() {
    let mut engine = new_engine();
    let before = engine.visible_range();

    engine.set_zoom(2.0).expect("zoom in");
    engine.set_zoom(1.0).expect("zoom back");

    assert_eq!(engine.visible_range(), before);
}

#[test]
fn set_zoom_paints_every_time() {
    let mut engine = new_engine();

    engine.set_zoom(2.0).expect("zoom");
    engine.set_zoom(2.0).expect("same zoom again");

    assert_eq!(engine.into_renderer().frames_rendered, 2);
}

#[test]
fn apply_zoom_input_coerces_slider_text() {
    let mut engine = new_engine();

    let applied = engine.apply_zoom_input("2.5").expect("valid input");
    assert_eq!(applied, 2.5);
    assert_eq!(engine.zoom(), 2.5);

    let garbled = engine.apply_zoom_input("fast").expect("coerced input");
    assert!(garbled.is_nan());
    assert!(engine.zoom().is_nan());
}

#[test]
fn nan_zoom_flows_into_the_visible_range() {
    let mut engine = new_engine();

    engine.set_zoom(f64::NAN).expect("nan zoom still paints");

    let (start, end) = engine.visible_range();
    assert_eq!(start, 0.0);
    assert!(end.is_nan());
}

#[test]
fn surface_follows_layout_before_every_paint() {
    let mut engine = new_engine();
    engine.render().expect("first paint");

    engine
        .sync_layout(LayoutMetrics::new(320.0, Viewport::new(320, 90)))
        .expect("relayout");

    assert_eq!(engine.surface(), Viewport::new(320, 90));
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_surface, Some(Viewport::new(320, 90)));
}

#[test]
fn zero_area_layout_still_paints() {
    let mut engine = new_engine();

    engine
        .sync_layout(LayoutMetrics::new(0.0, Viewport::new(0, 0)))
        .expect("collapsed layout");

    assert_eq!(engine.visible_range(), (0.0, 0.0));
    assert_eq!(engine.into_renderer().last_surface, Some(Viewport::new(0, 0)));
}

#[test]
fn set_data_registers_series_and_paints() {
    let mut engine = new_engine();

    engine
        .set_data("left", PlotData::from_rows([[1.0], [2.0]]))
        .expect("set left");
    engine
        .set_data("right", PlotData::from_rows([[3.0], [4.0], [5.0]]))
        .expect("set right");
    engine
        .set_data("left", PlotData::from_rows([[9.0]]))
        .expect("replace left");

    assert_eq!(engine.data_keys().collect::<Vec<_>>(), ["left", "right"]);
    assert_eq!(engine.plot_data("left").map(PlotData::row_count), Some(1));
    assert!(engine.plot_data("missing").is_none());

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 3);
    assert_eq!(renderer.last_series_count, 2);
}

#[test]
fn add_event_defers_painting() {
    let mut engine = new_engine();

    engine.add_event(EventSpec::at(1.0, "quiet"));

    assert_eq!(engine.events().len(), 1);
    assert_eq!(engine.into_renderer().frames_rendered, 0);
}

#[test]
fn recurring_events_resolve_against_the_engine_duration() {
    let mut engine = new_engine();

    engine.add_event(EventSpec::at(6.0, "late").with_interval(2.0));
    assert!(engine.events().is_empty());

    engine.apply_attribute("duration", "10");
    engine.add_event(EventSpec::at(6.0, "late").with_interval(2.0));

    let positions: Vec<f64> = engine.events().iter().map(|e| e.position()).collect();
    assert_eq!(positions, [6.0, 8.0, 10.0]);
}

#[test]
fn observed_attributes_update_scale_inputs_without_painting() {
    let mut engine = new_engine();

    engine.apply_attribute("duration", "4");
    engine.apply_attribute("pxPerSec", "25");

    assert_eq!(engine.nominal_duration(), 4.0);
    assert_eq!(engine.base_px_per_sec(), 25.0);
    assert_eq!(engine.visible_range(), (0.0, 20.0));
    assert_eq!(engine.into_renderer().frames_rendered, 0);
}

#[test]
fn reserved_and_unknown_attributes_are_ignored() {
    let mut engine = new_engine();

    engine.apply_attribute("position", "3");
    engine.apply_attribute("data-madeup", "3");

    assert_eq!(engine.nominal_duration(), 2.5);
    assert_eq!(engine.base_px_per_sec(), 50.0);
}

#[test]
fn attribute_values_coerce_silently() {
    let mut engine = new_engine();

    engine.apply_attribute("duration", "");
    assert_eq!(engine.nominal_duration(), 0.0);

    engine.apply_attribute("duration", "oops");
    assert!(engine.nominal_duration().is_nan());
}

#[test]
fn controls_readout_formats_zoom_and_visible_end() {
    let engine = new_engine();

    let readout = engine.controls_readout();

    assert_eq!(readout.zoom_text, "1.0");
    assert_eq!(readout.visible_end_text, "10.00");
}

#[test]
fn style_vars_render_css_custom_properties() {
    let mut engine = new_engine();
    engine.set_zoom(2.0).expect("zoom");

    let vars = engine.style_vars();

    assert_eq!(vars.sec_width_px, 100.0);
    assert_eq!(
        vars.to_css_declarations(),
        "--tl-sec-width: 100px; --tl-content-length: 2.5"
    );
}

#[test]
fn event_style_vars_mirror_placement() {
    let mut engine = new_engine();
    engine.add_event(EventSpec::at(4.8, "block").with_duration(2.2));

    let vars = EventStyleVars::of(&engine.events()[0]);

    assert_eq!(
        vars.to_css_declarations(),
        "--tl-event-position: 4.8; --tl-event-duration: 2.2"
    );
}

#[test]
fn event_geometry_uses_the_live_scale() {
    let mut engine = new_engine();
    engine.add_event(EventSpec::at(2.0, "spot").with_duration(1.0));
    engine.set_zoom(2.0).expect("zoom");

    let geometry = engine.event_geometry(&engine.events()[0]);

    assert_eq!(geometry.left_px, 200.0);
    assert_eq!(geometry.width_px, 100.0);
}

#[test]
fn window_query_reads_placed_events() {
    let mut engine = new_engine();
    engine.apply_attribute("duration", "10");
    engine.add_event(EventSpec::at(0.0, "tick").with_interval(4.0));

    let hits = engine.events_in_window(3.9, 8.1);

    assert_eq!(hits.len(), 2);
}

#[test]
fn invalid_zoom_bounds_are_rejected_at_construction() {
    let layout = LayoutMetrics::new(500.0, Viewport::new(500, 120));
    let config = TimelineEngineConfig::new(layout).with_zoom_bounds(ZoomBounds {
        min: 3.0,
        max: 0.1,
        step: 0.1,
    });

    let err = TimelineEngine::new(NullRenderer::default(), config)
        .err()
        .expect("inverted bounds");
    assert!(matches!(err, TimelineError::InvalidData(_)));
}
