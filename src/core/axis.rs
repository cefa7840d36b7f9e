use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three axes a chart can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    /// Primary value axis, left of the plot area.
    Y,
    /// Secondary value axis, right of the plot area.
    Y2,
    /// Horizontal axis below the plot area.
    X,
}

impl AxisId {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Y2];

    /// Maps a tick's axis index onto a value axis. Only two are supported.
    #[must_use]
    pub fn from_value_axis_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Y),
            1 => Some(Self::Y2),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Y => "y",
            Self::Y2 => "y2",
            Self::X => "x",
        }
    }

    /// Class list applied to label elements created for this axis.
    #[must_use]
    pub fn label_class_name(self) -> &'static str {
        match self {
            Self::X => "axis-label",
            Self::Y => "axis-label axis-label-y",
            Self::Y2 => "axis-label axis-label-y2",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Tick computed by the host.
///
/// `pos` is the fractional offset along the plot area: left to right for
/// the x axis, top to bottom for value axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub pos: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub axis: usize,
}

impl Tick {
    #[must_use]
    pub fn labeled(pos: f64, label: impl Into<String>) -> Self {
        Self {
            pos,
            label: Some(label.into()),
            axis: 0,
        }
    }

    /// Tick that only contributes a grid line.
    #[must_use]
    pub fn grid_only(pos: f64) -> Self {
        Self {
            pos,
            label: None,
            axis: 0,
        }
    }

    #[must_use]
    pub fn on_axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }
}

/// Tick arrays produced by the host layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickLayout {
    #[serde(default)]
    pub xticks: Vec<Tick>,
    #[serde(default)]
    pub yticks: Vec<Tick>,
}

impl TickLayout {
    #[must_use]
    pub fn new(xticks: Vec<Tick>, yticks: Vec<Tick>) -> Self {
        Self { xticks, yticks }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xticks.is_empty() && self.yticks.is_empty()
    }
}
