use std::fmt;

use tracing::{debug, trace};

use crate::api::AxisOptions;
use crate::core::{AxisId, PlotArea, Tick, Viewport};
use crate::error::AxesError;
use crate::extensions::{
    ChartPlugin, DrawEvent, LabelContainer, LabelPool, LabelPools, LayoutEvent, VerticalAnchor,
};
use crate::render::{AxisCanvas, Color, LinePrimitive, RenderFrame, TextHAlign};

pub const AXES_PLUGIN_ID: &str = "axes";

/// Extra room a value-axis label needs below its font box before it is
/// anchored to the canvas bottom instead.
const VALUE_LABEL_BOTTOM_SLACK_PX: f64 = 3.0;

/// Draws axis baselines and tick labels for the x, y and y2 axes.
///
/// It does not draw grid lines spanning the plot area. Labels are pooled per
/// axis and reused across frames: a draw pass hands out labels in tick
/// order and hides whatever is left over.
#[derive(Debug, Default)]
pub struct AxesPlugin {
    pools: LabelPools,
}

impl AxesPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pool(&self, axis: AxisId) -> &LabelPool {
        self.pools.get(axis)
    }

    /// Resets every pool cursor so the next pass starts reusing labels.
    pub fn detach_labels(&mut self) {
        self.pools.detach_all();
    }

    /// Reports the margins every drawn axis needs.
    pub fn reserve_space(&self, event: &mut LayoutEvent<'_>) {
        let y = event.host().axis_options(AxisId::Y);
        if y.draw_axis {
            event.reserve_space_left(y.value_axis_margin());
        }

        let x = event.host().axis_options(AxisId::X);
        if x.draw_axis {
            let height = match event.host().x_axis_height() {
                Some(height) if height > 0.0 => height,
                _ => x.axis_label_font_size + 2.0 * x.axis_tick_size,
            };
            event.reserve_space_bottom(height);
        }

        let num_axes = event.host().num_axes();
        if num_axes == 2 {
            let y2 = event.host().axis_options(AxisId::Y2);
            if y2.draw_axis {
                event.reserve_space_right(y2.value_axis_margin());
            }
        } else if num_axes > 2 {
            event.report_error(&AxesError::TooManyYAxes { count: num_axes });
        }
    }

    /// Positions labels for the current ticks and strokes the baselines.
    pub fn render(&mut self, event: &mut DrawEvent<'_>) {
        let host = event.host;
        let x_options = host.axis_options(AxisId::X);
        let y_options = host.axis_options(AxisId::Y);
        let y2_options = host.axis_options(AxisId::Y2);

        if !x_options.draw_axis && !y_options.draw_axis && !y2_options.draw_axis {
            trace!("all axes disabled, skipping axes pass");
            return;
        }

        let area = event.area;
        let viewport = event.viewport;
        let canvas = &mut *event.canvas;
        let container = &mut *event.container;

        canvas.save();

        if y_options.draw_axis {
            if !event.ticks.yticks.is_empty() {
                self.place_value_labels(
                    &event.ticks.yticks,
                    [y_options, y2_options],
                    area,
                    viewport,
                    container,
                );
                self.nudge_bottom_value_label(y_options.axis_label_font_size, viewport);
            }

            let axis_x = if host.draw_axes_at_zero() {
                let ratio = unit_ratio_or(host.to_percent_x_coord(0.0), 0.0);
                half_up(area.x + ratio * area.w)
            } else {
                half_up(area.x)
            };
            stroke_segment(
                canvas,
                y_options,
                (axis_x, half_down(area.y)),
                (axis_x, half_down(area.bottom())),
            );

            if host.num_axes() == 2 {
                let axis_x = half_down(area.right());
                stroke_segment(
                    canvas,
                    y2_options,
                    (axis_x, half_down(area.y)),
                    (axis_x, half_down(area.bottom())),
                );
            }
        }

        if x_options.draw_axis {
            self.place_x_labels(&event.ticks.xticks, x_options, area, viewport, container);

            let axis_y = if host.draw_axes_at_zero() {
                let ratio = unit_ratio_or(host.to_percent_y_coord(0.0, 0), 1.0);
                half_down(area.y + ratio * area.h)
            } else {
                half_down(area.bottom())
            };
            stroke_segment(
                canvas,
                x_options,
                (half_up(area.x), axis_y),
                (half_up(area.right()), axis_y),
            );
        }

        for axis in AxisId::ALL {
            self.pools.get_mut(axis).hide_unused();
        }

        canvas.restore();

        debug!(
            x_labels = self.pools.get(AxisId::X).visible_count(),
            y_labels = self.pools.get(AxisId::Y).visible_count(),
            y2_labels = self.pools.get(AxisId::Y2).visible_count(),
            "axes pass complete"
        );
    }

    /// Collects recorded baseline strokes and every visible label into a
    /// frame any `Renderer` can draw.
    #[must_use]
    pub fn compose_frame(
        &self,
        viewport: Viewport,
        strokes: &[LinePrimitive],
        label_color: Color,
    ) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        frame.lines.extend_from_slice(strokes);
        frame.texts.extend(
            self.pools
                .iter()
                .flat_map(LabelPool::labels)
                .filter_map(|label| label.to_text_primitive(viewport, label_color)),
        );
        frame
    }

    fn place_value_labels(
        &mut self,
        ticks: &[Tick],
        options: [AxisOptions; 2],
        area: PlotArea,
        viewport: Viewport,
        container: &mut dyn LabelContainer,
    ) {
        let canvas_height = viewport.height_px();

        for tick in ticks {
            // Ticks without text only carry a grid line.
            let Some(text) = tick.label.as_deref() else {
                continue;
            };
            let Some(axis) = AxisId::from_value_axis_index(tick.axis) else {
                trace!(axis_index = tick.axis, "skipping tick on unsupported value axis");
                continue;
            };
            let axis_options = options[tick.axis];
            let font_size = axis_options.axis_label_font_size;
            let y = area.y + tick.pos * area.h;

            let label = self.pools.get_mut(axis).acquire(container);
            label.update(axis_options, text);

            let top = (y - font_size / 2.0).max(0.0);
            label.vertical = if top + font_size + VALUE_LABEL_BOTTOM_SLACK_PX > canvas_height {
                Some(VerticalAnchor::Bottom(0.0))
            } else {
                Some(VerticalAnchor::Top(top))
            };

            if axis == AxisId::Y {
                label.left_px = Some(
                    area.x - axis_options.axis_label_width - axis_options.axis_tick_size,
                );
                label.text_align = TextHAlign::Right;
            } else {
                label.left_px = Some(area.right() + axis_options.axis_tick_size);
                label.text_align = TextHAlign::Left;
            }
        }
    }

    /// The lowest y label often overlaps the leftmost x label; lift it by
    /// half a line when it sits that close to the canvas bottom.
    fn nudge_bottom_value_label(&mut self, font_size: f64, viewport: Viewport) {
        let Some(label) = self.pools.get_mut(AxisId::Y).first_used_mut() else {
            return;
        };
        let Some(VerticalAnchor::Top(top)) = label.vertical else {
            return;
        };
        let top = top.trunc();
        if top + font_size > viewport.height_px() - font_size {
            label.vertical = Some(VerticalAnchor::Top(top - font_size / 2.0));
        }
    }

    fn place_x_labels(
        &mut self,
        ticks: &[Tick],
        options: AxisOptions,
        area: PlotArea,
        viewport: Viewport,
        container: &mut dyn LabelContainer,
    ) {
        let canvas_width = viewport.width_px();
        let label_width = options.axis_label_width;
        let y = area.bottom();

        for tick in ticks {
            let Some(text) = tick.label.as_deref() else {
                continue;
            };
            let x = area.x + tick.pos * area.w;

            let label = self.pools.get_mut(AxisId::X).acquire(container);
            label.update(options, text);

            let mut left = x - label_width / 2.0;
            let mut align = TextHAlign::Center;
            if left + label_width > canvas_width {
                left = canvas_width - label_width;
                align = TextHAlign::Right;
            }
            if left < 0.0 {
                left = 0.0;
                align = TextHAlign::Left;
            }

            label.left_px = Some(left);
            label.text_align = align;
            label.vertical = Some(VerticalAnchor::Top(y + options.axis_tick_size));
        }
    }
}

impl fmt::Display for AxesPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Axes Plugin")
    }
}

impl ChartPlugin for AxesPlugin {
    fn id(&self) -> &str {
        AXES_PLUGIN_ID
    }

    fn layout(&mut self, event: &mut LayoutEvent<'_>) {
        self.reserve_space(event);
    }

    fn clear_chart(&mut self) {
        self.detach_labels();
    }

    fn will_draw_chart(&mut self, event: &mut DrawEvent<'_>) {
        self.render(event);
    }
}

/// Snaps a vertical line's x onto a pixel center.
#[must_use]
pub fn half_up(value: f64) -> f64 {
    round_half_up(value) + 0.5
}

/// Snaps a horizontal line's y onto a pixel center.
#[must_use]
pub fn half_down(value: f64) -> f64 {
    round_half_up(value) - 0.5
}

/// Rounds `.5` ties toward positive infinity, also for negative values.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn unit_ratio_or(ratio: f64, fallback: f64) -> f64 {
    if (0.0..=1.0).contains(&ratio) {
        ratio
    } else {
        fallback
    }
}

fn stroke_segment(
    canvas: &mut dyn AxisCanvas,
    options: AxisOptions,
    from: (f64, f64),
    to: (f64, f64),
) {
    canvas.set_stroke_color(options.axis_line_color);
    canvas.set_line_width(options.axis_line_width);
    canvas.begin_path();
    canvas.move_to(from.0, from.1);
    canvas.line_to(to.0, to.1);
    canvas.close_path();
    canvas.stroke();
}
