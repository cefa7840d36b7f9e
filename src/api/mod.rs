//! Host-facing configuration and contracts.

mod axis_config;
mod host;
mod json_contract;
mod layout;

pub use axis_config::{
    AxesOptions, AxisOptions, AxisOverrides, DEFAULT_AXIS_LABEL_FONT_SIZE_PX,
    DEFAULT_AXIS_LINE_WIDTH_PX, DEFAULT_AXIS_TICK_SIZE_PX, DEFAULT_VALUE_AXIS_LABEL_WIDTH_PX,
    DEFAULT_X_AXIS_LABEL_WIDTH_PX, PerAxisOverrides,
};
pub use host::{ChartHost, OptionsHost};
pub use json_contract::{AXES_OPTIONS_JSON_SCHEMA_V1, AxesOptionsJsonContractV1};
pub use layout::LayoutReservation;
