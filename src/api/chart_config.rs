use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::SettingValue;
use crate::error::{ChartError, ChartResult};

use super::ChartContext;
use super::component::ChartComponent;
use super::registry::ComponentRegistry;

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Persisted chart definition naming its chart type as a string.
///
/// The `chart_type` key is resolved through a [`ComponentRegistry`], so any
/// registered variant is reachable from saved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub chart_type: String,
    /// Absent means "unset"; an empty string is an explicit title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reader_title: Option<String>,
    #[serde(default)]
    pub settings: IndexMap<String, SettingValue>,
    /// Logical field to data-source field overrides.
    #[serde(default)]
    pub data_fields: IndexMap<String, String>,
}

impl ChartConfigJsonContractV1 {
    #[must_use]
    pub fn new(chart_type: impl Into<String>) -> Self {
        Self {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            chart_type: chart_type.into(),
            reader_title: None,
            settings: IndexMap::new(),
            data_fields: IndexMap::new(),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config payload: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

/// Rebuilds a component from a persisted definition.
///
/// Runs the full lifecycle: name-driven construction, explicit values from
/// the config, then the internal defaults pass. The returned component is
/// ready for use.
pub fn instantiate_from_config(
    registry: &ComponentRegistry,
    ctx: &ChartContext,
    config: &ChartConfigJsonContractV1,
) -> ChartResult<Box<dyn ChartComponent>> {
    let mut component = registry.instantiate(&config.chart_type, ctx)?;
    let core = component.core_mut();
    for (logical, source) in &config.data_fields {
        core.set_data_field(logical.clone(), source.clone());
    }
    for (name, value) in &config.settings {
        core.settings_mut().set(name.clone(), value.clone());
    }
    if let Some(title) = &config.reader_title {
        core.set_reader_title(title.clone());
    }
    component.apply_internal_defaults();
    Ok(component)
}
