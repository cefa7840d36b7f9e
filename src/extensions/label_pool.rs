use tracing::trace;

use crate::api::AxisOptions;
use crate::core::{AxisId, Viewport};
use crate::render::{Color, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelDisplay {
    Visible,
    Hidden,
}

/// Vertical placement of a label inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    /// Offset of the label's top edge from the canvas top.
    Top(f64),
    /// Offset of the label's bottom edge from the canvas bottom.
    Bottom(f64),
}

/// Absolutely positioned overlay label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    pub class_name: &'static str,
    pub display: LabelDisplay,
    pub font_size_px: f64,
    pub width_px: f64,
    pub text: String,
    pub vertical: Option<VerticalAnchor>,
    pub left_px: Option<f64>,
    pub text_align: TextHAlign,
}

impl LabelElement {
    #[must_use]
    pub fn new(axis: AxisId) -> Self {
        Self {
            class_name: axis.label_class_name(),
            display: LabelDisplay::Visible,
            font_size_px: 0.0,
            width_px: 0.0,
            text: String::new(),
            vertical: None,
            left_px: None,
            text_align: match axis {
                AxisId::X => TextHAlign::Center,
                AxisId::Y | AxisId::Y2 => TextHAlign::Left,
            },
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.display == LabelDisplay::Visible
    }

    /// Applies the current axis options and text, and shows the label.
    pub fn update(&mut self, options: AxisOptions, text: &str) {
        self.font_size_px = options.axis_label_font_size;
        self.width_px = options.axis_label_width;
        self.display = LabelDisplay::Visible;
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    pub fn hide(&mut self) {
        self.display = LabelDisplay::Hidden;
    }

    /// Resolves a visible label into a text draw command.
    ///
    /// `x` is the alignment anchor inside the label box and `y` its top edge.
    #[must_use]
    pub fn to_text_primitive(&self, viewport: Viewport, color: Color) -> Option<TextPrimitive> {
        if !self.is_visible() || self.text.is_empty() {
            return None;
        }

        let left = self.left_px.unwrap_or(0.0);
        let x = match self.text_align {
            TextHAlign::Left => left,
            TextHAlign::Center => left + self.width_px / 2.0,
            TextHAlign::Right => left + self.width_px,
        };
        let y = match self.vertical {
            Some(VerticalAnchor::Top(top)) => top,
            Some(VerticalAnchor::Bottom(bottom)) => {
                viewport.height_px() - bottom - self.font_size_px
            }
            None => 0.0,
        };

        Some(TextPrimitive::new(
            self.text.clone(),
            x,
            y,
            self.font_size_px,
            color,
            self.text_align,
        ))
    }
}

/// Receives label elements the moment they are created.
///
/// Stands in for the overlay container positioned over the canvas.
pub trait LabelContainer {
    fn append_label(&mut self, axis: AxisId, index: usize, label: &LabelElement);
}

/// Container that records which labels were mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayContainer {
    children: Vec<(AxisId, usize)>,
}

impl OverlayContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn children(&self) -> &[(AxisId, usize)] {
        &self.children
    }

    #[must_use]
    pub fn child_count(&self, axis: AxisId) -> usize {
        self.children
            .iter()
            .filter(|(child_axis, _)| *child_axis == axis)
            .count()
    }
}

impl LabelContainer for OverlayContainer {
    fn append_label(&mut self, axis: AxisId, index: usize, _label: &LabelElement) {
        self.children.push((axis, index));
    }
}

/// Grow-only set of reusable labels for one axis.
///
/// Labels before `used` were handed out since the last detach; the rest are
/// spare and get hidden at the end of a draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPool {
    axis: AxisId,
    labels: Vec<LabelElement>,
    used: usize,
}

impl LabelPool {
    #[must_use]
    pub fn new(axis: AxisId) -> Self {
        Self {
            axis,
            labels: Vec::new(),
            used: 0,
        }
    }

    #[must_use]
    pub fn axis(&self) -> AxisId {
        self.axis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn used(&self) -> usize {
        self.used
    }

    #[must_use]
    pub fn labels(&self) -> &[LabelElement] {
        &self.labels
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_visible()).count()
    }

    /// First label when it was handed out in the current pass.
    pub fn first_used_mut(&mut self) -> Option<&mut LabelElement> {
        if self.used == 0 {
            return None;
        }
        self.labels.first_mut()
    }

    /// Next unused label, or `None` when the pool is exhausted.
    pub fn take_unused(&mut self) -> Option<&mut LabelElement> {
        let label = self.labels.get_mut(self.used)?;
        self.used += 1;
        Some(label)
    }

    /// Hands out a label, creating and mounting a new one if needed.
    pub fn acquire(&mut self, container: &mut dyn LabelContainer) -> &mut LabelElement {
        if self.used >= self.labels.len() {
            let index = self.labels.len();
            let label = LabelElement::new(self.axis);
            container.append_label(self.axis, index, &label);
            self.labels.push(label);
            trace!(axis = %self.axis, index, "created axis label");
        }
        let index = self.used;
        self.used += 1;
        &mut self.labels[index]
    }

    /// Resets the cursor; labels stay allocated.
    pub fn detach(&mut self) {
        self.used = 0;
    }

    /// Hides every label not handed out since the last detach.
    pub fn hide_unused(&mut self) {
        while let Some(label) = self.take_unused() {
            label.hide();
        }
    }
}

/// The three per-axis pools.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPools {
    x: LabelPool,
    y: LabelPool,
    y2: LabelPool,
}

impl Default for LabelPools {
    fn default() -> Self {
        Self {
            x: LabelPool::new(AxisId::X),
            y: LabelPool::new(AxisId::Y),
            y2: LabelPool::new(AxisId::Y2),
        }
    }
}

impl LabelPools {
    #[must_use]
    pub fn get(&self, axis: AxisId) -> &LabelPool {
        match axis {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
            AxisId::Y2 => &self.y2,
        }
    }

    pub fn get_mut(&mut self, axis: AxisId) -> &mut LabelPool {
        match axis {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
            AxisId::Y2 => &mut self.y2,
        }
    }

    pub fn detach_all(&mut self) {
        for axis in AxisId::ALL {
            self.get_mut(axis).detach();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelPool> {
        [&self.x, &self.y, &self.y2].into_iter()
    }
}
