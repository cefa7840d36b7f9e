mod canvas;
mod frame;
mod null_renderer;
mod primitives;

pub use canvas::{AxisCanvas, CanvasCommand, RecordingCanvas};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};

use crate::error::AxesResult;

/// Contract implemented by any overlay rendering backend.
///
/// Backends receive a fully resolved `RenderFrame`, so drawing code stays
/// isolated from label pooling and option lookup.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AxesResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoAxisCanvas, CairoContextRenderer, CairoRenderStats, CairoRenderer};
