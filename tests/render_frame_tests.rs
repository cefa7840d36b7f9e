use approx::assert_relative_eq;
use chart_axes::api::{AxesOptions, LayoutReservation, OptionsHost};
use chart_axes::core::{Tick, TickLayout, Viewport};
use chart_axes::extensions::{AxesPlugin, ChartPlugin, DrawEvent, LayoutEvent, OverlayContainer};
use chart_axes::render::{Color, NullRenderer, RecordingCanvas, Renderer, TextHAlign};

#[test]
fn full_hook_cycle_produces_a_valid_overlay_frame() {
    let viewport = Viewport::new(640, 360);
    let mut plugin = AxesPlugin::new();
    let mut host = OptionsHost::new(AxesOptions::default()).with_num_axes(2);

    let mut reservation = LayoutReservation::new();
    plugin.layout(&mut LayoutEvent::new(&mut host, &mut reservation));
    let area = reservation.plot_area(viewport);

    let ticks = TickLayout::new(
        vec![Tick::labeled(0.25, "Q1"), Tick::grid_only(0.5), Tick::labeled(0.75, "Q3")],
        vec![
            Tick::labeled(0.0, "1.0"),
            Tick::labeled(1.0, "0.0"),
            Tick::labeled(0.5, "50%").on_axis(1),
        ],
    );
    let mut canvas = RecordingCanvas::new();
    let mut container = OverlayContainer::new();

    plugin.clear_chart();
    plugin.will_draw_chart(&mut DrawEvent {
        host: &host,
        ticks: &ticks,
        area,
        viewport,
        canvas: &mut canvas,
        container: &mut container,
    });

    let frame = plugin.compose_frame(viewport, canvas.strokes(), Color::BLACK);
    assert_eq!(frame.lines.len(), 3);
    assert_eq!(frame.texts.len(), 5);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("overlay frame is valid");
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_text_count, 5);

    let q1 = frame
        .texts
        .iter()
        .find(|text| text.text == "Q1")
        .expect("x label");
    assert_eq!(q1.h_align, TextHAlign::Center);
    assert_relative_eq!(q1.x, area.x + 0.25 * area.w);
    assert_relative_eq!(q1.y, area.y + area.h + 3.0);
}

#[test]
fn hidden_labels_are_left_out_of_the_frame() {
    let viewport = Viewport::new(400, 300);
    let host = OptionsHost::new(AxesOptions::default());
    let area = LayoutReservation::new().plot_area(viewport);
    let mut plugin = AxesPlugin::new();
    let mut canvas = RecordingCanvas::new();
    let mut container = OverlayContainer::new();

    for ticks in [
        TickLayout::new(vec![Tick::labeled(0.2, "a"), Tick::labeled(0.8, "b")], Vec::new()),
        TickLayout::new(vec![Tick::labeled(0.5, "c")], Vec::new()),
    ] {
        canvas.clear();
        plugin.clear_chart();
        plugin.will_draw_chart(&mut DrawEvent {
            host: &host,
            ticks: &ticks,
            area,
            viewport,
            canvas: &mut canvas,
            container: &mut container,
        });
    }

    let frame = plugin.compose_frame(viewport, canvas.strokes(), Color::BLACK);
    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["c"]);
    assert_eq!(frame.lines.len(), 2);
}

#[test]
fn frames_with_invalid_viewport_are_rejected() {
    let plugin = AxesPlugin::new();
    let frame = plugin.compose_frame(Viewport::new(0, 300), &[], Color::BLACK);
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
}
