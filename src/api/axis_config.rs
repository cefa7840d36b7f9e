use serde::{Deserialize, Serialize};

use crate::core::AxisId;
use crate::error::{AxesError, AxesResult};
use crate::render::Color;

pub const DEFAULT_AXIS_LABEL_FONT_SIZE_PX: f64 = 14.0;
pub const DEFAULT_VALUE_AXIS_LABEL_WIDTH_PX: f64 = 50.0;
pub const DEFAULT_X_AXIS_LABEL_WIDTH_PX: f64 = 60.0;
pub const DEFAULT_AXIS_TICK_SIZE_PX: f64 = 3.0;
pub const DEFAULT_AXIS_LINE_WIDTH_PX: f64 = 0.3;

/// Fully resolved options for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub draw_axis: bool,
    pub axis_label_font_size: f64,
    pub axis_label_width: f64,
    pub axis_tick_size: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
}

impl AxisOptions {
    /// Built-in defaults; the x axis gets wider labels than value axes.
    #[must_use]
    pub fn builtin(axis: AxisId) -> Self {
        let axis_label_width = match axis {
            AxisId::X => DEFAULT_X_AXIS_LABEL_WIDTH_PX,
            AxisId::Y | AxisId::Y2 => DEFAULT_VALUE_AXIS_LABEL_WIDTH_PX,
        };
        Self {
            draw_axis: true,
            axis_label_font_size: DEFAULT_AXIS_LABEL_FONT_SIZE_PX,
            axis_label_width,
            axis_tick_size: DEFAULT_AXIS_TICK_SIZE_PX,
            axis_line_color: Color::BLACK,
            axis_line_width: DEFAULT_AXIS_LINE_WIDTH_PX,
        }
    }

    /// Margin a value axis needs beside the plot area.
    #[must_use]
    pub fn value_axis_margin(self) -> f64 {
        self.axis_label_width + 2.0 * self.axis_tick_size
    }

    pub fn validate(self) -> AxesResult<()> {
        for (name, value) in [
            ("axis_label_width", self.axis_label_width),
            ("axis_tick_size", self.axis_tick_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AxesError::InvalidData(format!(
                    "axis option `{name}` must be finite and >= 0"
                )));
            }
        }
        // Labels and baselines are drawn with these, so zero is not drawable.
        for (name, value) in [
            ("axis_label_font_size", self.axis_label_font_size),
            ("axis_line_width", self.axis_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AxesError::InvalidData(format!(
                    "axis option `{name}` must be finite and > 0"
                )));
            }
        }
        self.axis_line_color.validate()
    }

    fn apply(mut self, overrides: &AxisOverrides) -> Self {
        if let Some(value) = overrides.draw_axis {
            self.draw_axis = value;
        }
        if let Some(value) = overrides.axis_label_font_size {
            self.axis_label_font_size = value;
        }
        if let Some(value) = overrides.axis_label_width {
            self.axis_label_width = value;
        }
        if let Some(value) = overrides.axis_tick_size {
            self.axis_tick_size = value;
        }
        if let Some(value) = overrides.axis_line_color {
            self.axis_line_color = value;
        }
        if let Some(value) = overrides.axis_line_width {
            self.axis_line_width = value;
        }
        self
    }
}

/// Partial axis options. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_axis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line_width: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerAxisOverrides {
    pub x: AxisOverrides,
    pub y: AxisOverrides,
    pub y2: AxisOverrides,
}

impl PerAxisOverrides {
    #[must_use]
    pub fn get(&self, axis: AxisId) -> &AxisOverrides {
        match axis {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
            AxisId::Y2 => &self.y2,
        }
    }

    pub fn get_mut(&mut self, axis: AxisId) -> &mut AxisOverrides {
        match axis {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
            AxisId::Y2 => &mut self.y2,
        }
    }
}

/// Axes plugin configuration.
///
/// Per-axis lookups resolve in three layers: the axis' own overrides, then
/// chart-wide overrides, then built-in defaults. This type is serializable so
/// hosts can persist the axis setup next to the rest of their chart options.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesOptions {
    #[serde(flatten)]
    pub global: AxisOverrides,
    pub axes: PerAxisOverrides,
    /// Explicit height reserved for the x axis. Unset or zero falls back to
    /// a height derived from the x label font size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_height: Option<f64>,
    /// Draw baselines through the zero value instead of at the plot edge.
    pub draw_axes_at_zero: bool,
}

impl AxesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn axis(&self, axis: AxisId) -> AxisOptions {
        AxisOptions::builtin(axis)
            .apply(&self.global)
            .apply(self.axes.get(axis))
    }

    #[must_use]
    pub fn with_axis_overrides(mut self, axis: AxisId, overrides: AxisOverrides) -> Self {
        *self.axes.get_mut(axis) = overrides;
        self
    }

    #[must_use]
    pub fn with_global_overrides(mut self, overrides: AxisOverrides) -> Self {
        self.global = overrides;
        self
    }

    #[must_use]
    pub fn with_draw_axis(mut self, axis: AxisId, draw_axis: bool) -> Self {
        self.axes.get_mut(axis).draw_axis = Some(draw_axis);
        self
    }

    #[must_use]
    pub fn with_x_axis_height(mut self, x_axis_height: Option<f64>) -> Self {
        self.x_axis_height = x_axis_height;
        self
    }

    #[must_use]
    pub fn with_draw_axes_at_zero(mut self, enabled: bool) -> Self {
        self.draw_axes_at_zero = enabled;
        self
    }

    pub fn validate(&self) -> AxesResult<()> {
        for axis in AxisId::ALL {
            self.axis(axis).validate().map_err(|err| match err {
                AxesError::InvalidData(message) => {
                    AxesError::InvalidData(format!("axis `{axis}`: {message}"))
                }
                other => other,
            })?;
        }
        if let Some(height) = self.x_axis_height {
            if !height.is_finite() || height < 0.0 {
                return Err(AxesError::InvalidData(
                    "x_axis_height must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}
