use smallvec::SmallVec;
use tracing::warn;

use crate::core::AxisId;
use crate::error::AxesError;

use super::{AxesOptions, AxisOptions};

/// Everything the axes plugin reads from the charting engine that hosts it.
///
/// Option lookups are made on every hook call, so hosts may change options
/// between frames.
pub trait ChartHost {
    fn axis_options(&self, axis: AxisId) -> AxisOptions;

    /// Explicit x-axis height, if configured.
    fn x_axis_height(&self) -> Option<f64>;

    fn draw_axes_at_zero(&self) -> bool;

    /// Number of value axes the chart is configured with.
    fn num_axes(&self) -> usize;

    /// Fraction of the plot width (0 = left edge) at which `value` sits.
    fn to_percent_x_coord(&self, value: f64) -> f64;

    /// Fraction of the plot height (0 = top edge) at which `value` sits on
    /// value axis `axis`.
    fn to_percent_y_coord(&self, value: f64, axis: usize) -> f64;

    /// Non-fatal error channel.
    fn report_error(&mut self, error: &AxesError);
}

/// `ChartHost` backed by static options and linear value ranges.
///
/// Suits headless rendering and hosts that keep their own options in
/// `AxesOptions`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsHost {
    pub options: AxesOptions,
    num_axes: usize,
    x_range: (f64, f64),
    y_ranges: SmallVec<[(f64, f64); 2]>,
    errors: Vec<AxesError>,
}

impl OptionsHost {
    #[must_use]
    pub fn new(options: AxesOptions) -> Self {
        Self {
            options,
            num_axes: 1,
            x_range: (0.0, 1.0),
            y_ranges: SmallVec::from_slice(&[(0.0, 1.0)]),
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_num_axes(mut self, num_axes: usize) -> Self {
        self.num_axes = num_axes;
        self
    }

    #[must_use]
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = (min, max);
        self
    }

    /// Sets the value range of value axis `axis`; unset axes map to NaN.
    #[must_use]
    pub fn with_y_range(mut self, axis: usize, min: f64, max: f64) -> Self {
        if self.y_ranges.len() <= axis {
            self.y_ranges.resize(axis + 1, (f64::NAN, f64::NAN));
        }
        self.y_ranges[axis] = (min, max);
        self
    }

    #[must_use]
    pub fn errors(&self) -> &[AxesError] {
        &self.errors
    }
}

impl ChartHost for OptionsHost {
    fn axis_options(&self, axis: AxisId) -> AxisOptions {
        self.options.axis(axis)
    }

    fn x_axis_height(&self) -> Option<f64> {
        self.options.x_axis_height
    }

    fn draw_axes_at_zero(&self) -> bool {
        self.options.draw_axes_at_zero
    }

    fn num_axes(&self) -> usize {
        self.num_axes
    }

    fn to_percent_x_coord(&self, value: f64) -> f64 {
        let (min, max) = self.x_range;
        (value - min) / (max - min)
    }

    fn to_percent_y_coord(&self, value: f64, axis: usize) -> f64 {
        match self.y_ranges.get(axis) {
            Some(&(min, max)) => (max - value) / (max - min),
            None => f64::NAN,
        }
    }

    fn report_error(&mut self, error: &AxesError) {
        warn!(error = %error, "axes plugin reported a configuration error");
        self.errors.push(error.clone());
    }
}
