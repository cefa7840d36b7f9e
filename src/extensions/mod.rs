//! Chart plugins and the hook contracts they implement.

pub mod axes;
mod label_pool;
mod plugins;

pub use axes::{AXES_PLUGIN_ID, AxesPlugin, half_down, half_up};
pub use label_pool::{
    LabelContainer, LabelDisplay, LabelElement, LabelPool, LabelPools, OverlayContainer,
    VerticalAnchor,
};
pub use plugins::{ChartPlugin, DrawEvent, LayoutEvent};
