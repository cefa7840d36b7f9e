#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use chart_axes::AxesError;
use chart_axes::api::{AxesOptions, LayoutReservation, OptionsHost};
use chart_axes::core::{Tick, TickLayout, Viewport};
use chart_axes::extensions::{AxesPlugin, ChartPlugin, DrawEvent, LayoutEvent, OverlayContainer};
use chart_axes::render::{
    CairoAxisCanvas, CairoContextRenderer, CairoRenderer, Color, RecordingCanvas, Renderer,
};

fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
    let stride = surface.stride() as usize;
    let data = surface.data().expect("surface data");
    let offset = y * stride + x * 4;
    [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, AxesError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_composed_axes_frame() {
    let viewport = Viewport::new(640, 360);
    let mut host = OptionsHost::new(AxesOptions::default()).with_num_axes(2);
    let mut plugin = AxesPlugin::new();

    let mut reservation = LayoutReservation::new();
    plugin.layout(&mut LayoutEvent::new(&mut host, &mut reservation));
    let area = reservation.plot_area(viewport);

    let ticks = TickLayout::new(
        vec![Tick::labeled(0.25, "Q1"), Tick::labeled(0.75, "Q3")],
        vec![Tick::labeled(0.5, "50"), Tick::labeled(0.5, "5%").on_axis(1)],
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

    let mut renderer = CairoRenderer::new(640, 360).expect("renderer");
    renderer.render(&frame).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 3);
    assert_eq!(stats.texts_drawn, 4);
}

#[test]
fn cairo_axis_canvas_strokes_on_external_context_without_clearing() {
    let viewport = Viewport::new(200, 120);
    let mut surface = ImageSurface::create(Format::ARgb32, 200, 120).expect("surface");
    {
        let context = Context::new(&surface).expect("context");
        context.set_source_rgb(1.0, 0.0, 0.0);
        context.rectangle(150.0, 10.0, 20.0, 20.0);
        context.fill().expect("fill marker");
    }
    surface.flush();
    let marker_before = pixel(&mut surface, 160, 20);

    let options = AxesOptions::default().with_global_overrides(chart_axes::api::AxisOverrides {
        axis_line_width: Some(2.0),
        ..Default::default()
    });
    let host = OptionsHost::new(options);
    let mut reservation = LayoutReservation::new();
    reservation.reserve_space_left(40.0);
    reservation.reserve_space_bottom(20.0);
    let area = reservation.plot_area(viewport);
    let ticks = TickLayout::new(vec![Tick::labeled(0.5, "mid")], Vec::new());
    let mut plugin = AxesPlugin::new();
    let mut container = OverlayContainer::new();

    {
        let context = Context::new(&surface).expect("context");
        let mut canvas = CairoAxisCanvas::new(&context);
        plugin.will_draw_chart(&mut DrawEvent {
            host: &host,
            ticks: &ticks,
            area,
            viewport,
            canvas: &mut canvas,
            container: &mut container,
        });

        let mut renderer = CairoRenderer::new(200, 120).expect("renderer");
        renderer.set_clear_color(None).expect("no clear");
        let frame = plugin.compose_frame(viewport, &[], Color::BLACK);
        renderer
            .render_on_cairo_context(&context, &frame)
            .expect("render labels on context");
        assert_eq!(renderer.last_stats().texts_drawn, 1);
    }
    surface.flush();

    // Y baseline at x = 40.5, x baseline at y = 99.5.
    assert_ne!(pixel(&mut surface, 40, 50)[3], 0);
    assert_ne!(pixel(&mut surface, 100, 99)[3], 0);
    assert_eq!(pixel(&mut surface, 10, 10)[3], 0);
    assert_eq!(pixel(&mut surface, 160, 20), marker_before);
}
