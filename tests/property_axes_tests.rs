use chart_axes::api::{AxesOptions, OptionsHost};
use chart_axes::core::{AxisId, PlotArea, Tick, TickLayout, Viewport};
use chart_axes::extensions::{AxesPlugin, ChartPlugin, DrawEvent, OverlayContainer};
use chart_axes::render::RecordingCanvas;
use proptest::prelude::*;

fn tick_strategy(max_axis: usize) -> impl Strategy<Value = Tick> {
    (0.0f64..=1.0, prop::option::of("[a-z0-9]{1,6}"), 0..=max_axis)
        .prop_map(|(pos, label, axis)| Tick { pos, label, axis })
}

fn frame_strategy() -> impl Strategy<Value = TickLayout> {
    (
        prop::collection::vec(tick_strategy(0), 0..12),
        prop::collection::vec(tick_strategy(2), 0..12),
    )
        .prop_map(|(xticks, yticks)| TickLayout::new(xticks, yticks))
}

fn labeled_count(ticks: &[Tick], axis_index: Option<usize>) -> usize {
    ticks
        .iter()
        .filter(|tick| tick.label.is_some())
        .filter(|tick| axis_index.is_none_or(|index| tick.axis == index))
        .count()
}

proptest! {
    #[test]
    fn pools_only_grow_and_track_visible_ticks(
        frames in prop::collection::vec(frame_strategy(), 1..8)
    ) {
        let viewport = Viewport::new(640, 400);
        let area = PlotArea::new(56.0, 0.0, 528.0, 380.0);
        let host = OptionsHost::new(AxesOptions::default()).with_num_axes(2);
        let mut plugin = AxesPlugin::new();
        let mut container = OverlayContainer::new();
        let mut high_water = [0usize; 3];

        for ticks in &frames {
            let mut canvas = RecordingCanvas::new();
            plugin.clear_chart();
            plugin.will_draw_chart(&mut DrawEvent {
                host: &host,
                ticks,
                area,
                viewport,
                canvas: &mut canvas,
                container: &mut container,
            });

            let expected = [
                (AxisId::X, labeled_count(&ticks.xticks, None)),
                (AxisId::Y, labeled_count(&ticks.yticks, Some(0))),
                (AxisId::Y2, labeled_count(&ticks.yticks, Some(1))),
            ];
            for (slot, (axis, visible)) in expected.into_iter().enumerate() {
                let pool = plugin.pool(axis);
                high_water[slot] = high_water[slot].max(visible);
                prop_assert!(pool.used() <= pool.len());
                prop_assert_eq!(pool.len(), high_water[slot]);
                prop_assert_eq!(pool.visible_count(), visible);
                prop_assert_eq!(container.child_count(axis), pool.len());
            }
            prop_assert_eq!(canvas.save_depth(), 0);
        }
    }

    #[test]
    fn x_labels_stay_inside_canvas(ticks in prop::collection::vec(tick_strategy(0), 1..16)) {
        let viewport = Viewport::new(300, 200);
        let area = PlotArea::new(0.0, 0.0, 300.0, 180.0);
        let host = OptionsHost::new(AxesOptions::default());
        let layout = TickLayout::new(ticks, Vec::new());
        let mut plugin = AxesPlugin::new();
        let mut canvas = RecordingCanvas::new();
        let mut container = OverlayContainer::new();

        plugin.will_draw_chart(&mut DrawEvent {
            host: &host,
            ticks: &layout,
            area,
            viewport,
            canvas: &mut canvas,
            container: &mut container,
        });

        for label in plugin.pool(AxisId::X).labels() {
            let left = label.left_px.expect("placed label");
            prop_assert!(left >= 0.0);
            prop_assert!(left + label.width_px <= viewport.width_px());
        }
    }
}
