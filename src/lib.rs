//! chart-axes: axis baselines and tick labels for charting engines.
//!
//! The crate ships one plugin, [`AxesPlugin`], which a host engine drives
//! through the [`extensions::ChartPlugin`] hooks. The host supplies ticks,
//! geometry and options through [`api::ChartHost`]; the plugin reserves axis
//! margins, keeps pooled overlay labels positioned and strokes the baselines
//! on an [`render::AxisCanvas`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{AxesOptions, ChartHost, OptionsHost};
pub use error::{AxesError, AxesResult};
pub use extensions::AxesPlugin;
