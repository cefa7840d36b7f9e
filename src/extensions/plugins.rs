use crate::api::{ChartHost, LayoutReservation};
use crate::core::{PlotArea, TickLayout, Viewport};
use crate::error::AxesError;
use crate::extensions::LabelContainer;
use crate::render::AxisCanvas;

/// Layout-pass event: lets a plugin carve margins out of the canvas.
pub struct LayoutEvent<'a> {
    host: &'a mut dyn ChartHost,
    reservation: &'a mut LayoutReservation,
}

impl<'a> LayoutEvent<'a> {
    pub fn new(host: &'a mut dyn ChartHost, reservation: &'a mut LayoutReservation) -> Self {
        Self { host, reservation }
    }

    #[must_use]
    pub fn host(&self) -> &dyn ChartHost {
        &*self.host
    }

    pub fn report_error(&mut self, error: &AxesError) {
        self.host.report_error(error);
    }

    pub fn reserve_space_left(&mut self, px: f64) {
        self.reservation.reserve_space_left(px);
    }

    pub fn reserve_space_right(&mut self, px: f64) {
        self.reservation.reserve_space_right(px);
    }

    pub fn reserve_space_top(&mut self, px: f64) {
        self.reservation.reserve_space_top(px);
    }

    pub fn reserve_space_bottom(&mut self, px: f64) {
        self.reservation.reserve_space_bottom(px);
    }
}

/// Draw-pass event. Everything here is borrowed for the duration of the hook.
pub struct DrawEvent<'a> {
    pub host: &'a dyn ChartHost,
    pub ticks: &'a TickLayout,
    pub area: PlotArea,
    pub viewport: Viewport,
    pub canvas: &'a mut dyn AxisCanvas,
    pub container: &'a mut dyn LabelContainer,
}

/// Lifecycle hooks a chart plugin can implement.
///
/// The host calls `layout` before computing the plot area, `clear_chart`
/// when the chart is wiped, and `will_draw_chart` before series are drawn.
pub trait ChartPlugin {
    fn id(&self) -> &str;

    fn layout(&mut self, _event: &mut LayoutEvent<'_>) {}

    fn clear_chart(&mut self) {}

    fn will_draw_chart(&mut self, _event: &mut DrawEvent<'_>) {}
}
