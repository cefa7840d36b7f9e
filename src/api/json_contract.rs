use serde::{Deserialize, Serialize};

use crate::error::{AxesError, AxesResult};

use super::AxesOptions;

pub const AXES_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: AxesOptions,
}

impl AxesOptions {
    pub fn to_json_pretty(&self) -> AxesResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AxesError::InvalidData(format!("failed to serialize axes options: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> AxesResult<String> {
        let payload = AxesOptionsJsonContractV1 {
            schema_version: AXES_OPTIONS_JSON_SCHEMA_V1,
            options: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxesError::InvalidData(format!("failed to serialize axes options contract v1: {e}"))
        })
    }

    /// Parses validated options from JSON.
    ///
    /// Accepts both the bare options object and the versioned v1 contract.
    pub fn from_json_str(input: &str) -> AxesResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| AxesError::InvalidData(format!("failed to parse axes options json: {e}")))?;

        let options = if value.get("schema_version").is_some() {
            let payload: AxesOptionsJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    AxesError::InvalidData(format!("failed to parse axes options contract: {e}"))
                })?;
            if payload.schema_version != AXES_OPTIONS_JSON_SCHEMA_V1 {
                return Err(AxesError::InvalidData(format!(
                    "unsupported axes options schema version: {}",
                    payload.schema_version
                )));
            }
            payload.options
        } else {
            serde_json::from_value(value).map_err(|e| {
                AxesError::InvalidData(format!("failed to parse axes options json: {e}"))
            })?
        };

        options.validate()?;
        Ok(options)
    }
}
