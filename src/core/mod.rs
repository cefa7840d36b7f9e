pub mod axis;
pub mod types;

pub use axis::{AxisId, Tick, TickLayout};
pub use types::{PlotArea, Viewport};
