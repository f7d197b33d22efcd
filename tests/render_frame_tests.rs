use timeline_rs::core::{PlotData, Viewport};
use timeline_rs::render::{NullRenderer, RenderFrame, Renderer, SeriesSummary};

#[test]
fn fresh_frame_carries_no_series() {
    let frame = RenderFrame::new(Viewport::new(800, 120), 75.0, 2.5);

    assert!(frame.is_empty());
    assert_eq!(frame.surface, Viewport::new(800, 120));
    assert_eq!(frame.sec_width_px, 75.0);
    assert_eq!(frame.content_length_secs, 2.5);
}

#[test]
fn with_series_appends_in_registration_order() {
    let left = PlotData::from_rows([[1.0], [2.0]]);
    let frame = RenderFrame::new(Viewport::new(800, 120), 50.0, 2.5)
        .with_series(SeriesSummary::of("left", &left))
        .with_series(SeriesSummary::of("right", &PlotData::new()));

    assert!(!frame.is_empty());
    let keys: Vec<&str> = frame.series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["left", "right"]);
    assert_eq!(frame.series[0].row_count, 2);
    assert_eq!(frame.series[1].row_count, 0);
}

#[test]
fn null_renderer_records_each_frame() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(640, 90), 100.0, 4.0);

    renderer.render(&frame).expect("null render");
    renderer.render(&frame).expect("null render again");

    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_surface, Some(Viewport::new(640, 90)));
    assert_eq!(renderer.last_sec_width_px, 100.0);
}
