use chart_axes::AxesError;
use chart_axes::api::{AxesOptions, LayoutReservation, OptionsHost};
use chart_axes::core::{AxisId, PlotArea, Viewport};
use chart_axes::extensions::{AxesPlugin, ChartPlugin, LayoutEvent};

fn run_layout(plugin: &mut AxesPlugin, host: &mut OptionsHost) -> LayoutReservation {
    let mut reservation = LayoutReservation::new();
    let mut event = LayoutEvent::new(host, &mut reservation);
    plugin.layout(&mut event);
    reservation
}

#[test]
fn default_layout_reserves_left_and_bottom() {
    let mut plugin = AxesPlugin::new();
    let mut host = OptionsHost::new(AxesOptions::default());

    let reservation = run_layout(&mut plugin, &mut host);

    assert_eq!(reservation.left, 56.0);
    assert_eq!(reservation.bottom, 20.0);
    assert_eq!(reservation.right, 0.0);
    assert_eq!(reservation.top, 0.0);
    assert_eq!(
        reservation.plot_area(Viewport::new(400, 300)),
        PlotArea::new(56.0, 0.0, 344.0, 280.0)
    );
    assert!(host.errors().is_empty());
}

#[test]
fn second_value_axis_reserves_right_margin() {
    let mut plugin = AxesPlugin::new();
    let mut host = OptionsHost::new(AxesOptions::default()).with_num_axes(2);

    let reservation = run_layout(&mut plugin, &mut host);

    assert_eq!(reservation.right, 56.0);
    assert!(host.errors().is_empty());
}

#[test]
fn disabled_second_axis_reserves_nothing_on_the_right() {
    let mut plugin = AxesPlugin::new();
    let mut host = OptionsHost::new(AxesOptions::default().with_draw_axis(AxisId::Y2, false))
        .with_num_axes(2);

    let reservation = run_layout(&mut plugin, &mut host);

    assert_eq!(reservation.right, 0.0);
    assert_eq!(reservation.left, 56.0);
}

#[test]
fn third_value_axis_reports_one_error_and_skips_reservation() {
    let mut plugin = AxesPlugin::new();
    let mut host = OptionsHost::new(AxesOptions::default()).with_num_axes(3);

    let reservation = run_layout(&mut plugin, &mut host);

    assert_eq!(reservation.right, 0.0);
    assert_eq!(host.errors(), &[AxesError::TooManyYAxes { count: 3 }]);
    assert_eq!(
        host.errors()[0].to_string(),
        "Only two y-axes are supported at this time. (Trying to use 3)"
    );
}

#[test]
fn explicit_x_axis_height_overrides_font_derived_height() {
    let mut plugin = AxesPlugin::new();

    let mut host = OptionsHost::new(AxesOptions::default().with_x_axis_height(Some(40.0)));
    assert_eq!(run_layout(&mut plugin, &mut host).bottom, 40.0);

    let mut host = OptionsHost::new(AxesOptions::default().with_x_axis_height(Some(0.0)));
    assert_eq!(run_layout(&mut plugin, &mut host).bottom, 20.0);
}

#[test]
fn disabled_axes_reserve_nothing() {
    let mut plugin = AxesPlugin::new();
    let options = AxesOptions::default()
        .with_draw_axis(AxisId::X, false)
        .with_draw_axis(AxisId::Y, false);
    let mut host = OptionsHost::new(options);

    let reservation = run_layout(&mut plugin, &mut host);

    assert_eq!(reservation, LayoutReservation::default());
}
