use smallvec::SmallVec;
use tracing::trace;

use crate::render::{Color, LinePrimitive};

/// Stroke-oriented subset of a 2D drawing context.
///
/// The axes plugin only strokes baselines, so this is all a host has to
/// provide. Calls mirror the usual path API: state is bracketed with
/// `save`/`restore` and a path is built between `begin_path` and `stroke`.
pub trait AxisCanvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
}

/// One recorded drawing-context call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    Save,
    Restore,
    SetStrokeColor(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StrokeState {
    color: Color,
    line_width: f64,
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SubPath {
    points: SmallVec<[(f64, f64); 4]>,
    closed: bool,
}

/// Drawing context that records calls and resolves strokes into lines.
///
/// Used by headless hosts and tests; `strokes()` feeds the overlay
/// `RenderFrame`.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
    state: StrokeState,
    saved: Vec<StrokeState>,
    path: Vec<SubPath>,
    strokes: Vec<LinePrimitive>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    #[must_use]
    pub fn strokes(&self) -> &[LinePrimitive] {
        &self.strokes
    }

    /// Nesting depth of unmatched `save` calls.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops recorded calls and strokes, keeping the current stroke state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.path.clear();
        self.strokes.clear();
    }

    fn current_subpath(&mut self) -> Option<&mut SubPath> {
        self.path.last_mut().filter(|subpath| !subpath.closed)
    }
}

impl AxisCanvas for RecordingCanvas {
    fn save(&mut self) {
        self.commands.push(CanvasCommand::Save);
        self.saved.push(self.state);
    }

    fn restore(&mut self) {
        self.commands.push(CanvasCommand::Restore);
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => trace!("restore without matching save ignored"),
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(CanvasCommand::SetStrokeColor(color));
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(CanvasCommand::SetLineWidth(width));
        self.state.line_width = width;
    }

    fn begin_path(&mut self) {
        self.commands.push(CanvasCommand::BeginPath);
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::MoveTo { x, y });
        let mut subpath = SubPath::default();
        subpath.points.push((x, y));
        self.path.push(subpath);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(CanvasCommand::LineTo { x, y });
        match self.current_subpath() {
            Some(subpath) => subpath.points.push((x, y)),
            None => {
                let mut subpath = SubPath::default();
                subpath.points.push((x, y));
                self.path.push(subpath);
            }
        }
    }

    fn close_path(&mut self) {
        self.commands.push(CanvasCommand::ClosePath);
        if let Some(subpath) = self.current_subpath() {
            subpath.closed = true;
        }
    }

    fn stroke(&mut self) {
        self.commands.push(CanvasCommand::Stroke);
        let StrokeState { color, line_width } = self.state;
        for subpath in &self.path {
            for pair in subpath.points.windows(2) {
                let (x1, y1) = pair[0];
                let (x2, y2) = pair[1];
                self.strokes
                    .push(LinePrimitive::new(x1, y1, x2, y2, line_width, color));
            }
            // A closed two-point path retraces its only segment.
            if subpath.closed && subpath.points.len() > 2 {
                let (x1, y1) = subpath.points[subpath.points.len() - 1];
                let (x2, y2) = subpath.points[0];
                self.strokes
                    .push(LinePrimitive::new(x1, y1, x2, y2, line_width, color));
            }
        }
    }
}
