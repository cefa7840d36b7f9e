use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{PlotArea, Viewport};

/// Margins reserved around the plot area during the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutReservation {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl LayoutReservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve_space_left(&mut self, px: f64) {
        self.left += sanitize_margin("left", px);
    }

    pub fn reserve_space_right(&mut self, px: f64) {
        self.right += sanitize_margin("right", px);
    }

    pub fn reserve_space_top(&mut self, px: f64) {
        self.top += sanitize_margin("top", px);
    }

    pub fn reserve_space_bottom(&mut self, px: f64) {
        self.bottom += sanitize_margin("bottom", px);
    }

    /// Canvas rectangle left after removing every reserved margin.
    #[must_use]
    pub fn plot_area(self, viewport: Viewport) -> PlotArea {
        PlotArea::new(
            self.left,
            self.top,
            (viewport.width_px() - self.left - self.right).max(0.0),
            (viewport.height_px() - self.top - self.bottom).max(0.0),
        )
    }
}

fn sanitize_margin(edge: &'static str, px: f64) -> f64 {
    if px.is_finite() && px >= 0.0 {
        px
    } else {
        warn!(edge, px, "ignoring invalid layout reservation");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_shrinks_by_reserved_margins() {
        let mut reservation = LayoutReservation::new();
        reservation.reserve_space_left(56.0);
        reservation.reserve_space_bottom(20.0);
        reservation.reserve_space_right(-4.0);

        let area = reservation.plot_area(Viewport::new(400, 300));
        assert_eq!(area, PlotArea::new(56.0, 0.0, 344.0, 280.0));
    }

    #[test]
    fn plot_area_never_goes_negative() {
        let mut reservation = LayoutReservation::new();
        reservation.reserve_space_left(300.0);
        reservation.reserve_space_right(300.0);
        assert_eq!(reservation.plot_area(Viewport::new(400, 300)).w, 0.0);
    }
}
