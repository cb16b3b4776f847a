use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use crate::core::Table;

use super::{Chart, ChartMetadata, ChartOptions, ColorMap, EdgeSet};

pub const CHART_PAYLOAD_JSON_SCHEMA_V1: u32 = 1;

/// Everything the renderer reads from a chart, in one serializable value.
///
/// Parsing checks that `dimensionality` is the column count of `nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ChartPayloadParts")]
pub struct ChartPayload {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub dataset_path: String,
    pub should_load_dataset: bool,
    pub title: String,
    pub dimensionality: usize,
    #[serde(default)]
    pub nodes: Option<Table>,
    pub first_edges: EdgeSet,
    pub second_edges: EdgeSet,
    #[serde(default)]
    pub extras: Vec<Value>,
    #[serde(default)]
    pub color_map: Option<ColorMap>,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub metadata: ChartMetadata,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartPayloadParts {
    id: String,
    #[serde(default)]
    parent_id: Option<String>,
    dataset_path: String,
    should_load_dataset: bool,
    title: String,
    dimensionality: usize,
    #[serde(default)]
    nodes: Option<Table>,
    first_edges: EdgeSet,
    second_edges: EdgeSet,
    #[serde(default)]
    extras: Vec<Value>,
    #[serde(default)]
    color_map: Option<ColorMap>,
    #[serde(default)]
    options: ChartOptions,
    #[serde(default)]
    metadata: ChartMetadata,
}

impl TryFrom<ChartPayloadParts> for ChartPayload {
    type Error = ChartError;

    fn try_from(parts: ChartPayloadParts) -> ChartResult<Self> {
        let columns = parts.nodes.as_ref().map_or(0, Table::column_count);
        if parts.dimensionality != columns {
            return Err(ChartError::InvalidData(format!(
                "dimensionality {} does not match {columns} node columns",
                parts.dimensionality
            )));
        }
        parts.options.validate()?;
        Ok(Self {
            id: parts.id,
            parent_id: parts.parent_id,
            dataset_path: parts.dataset_path,
            should_load_dataset: parts.should_load_dataset,
            title: parts.title,
            dimensionality: parts.dimensionality,
            nodes: parts.nodes,
            first_edges: parts.first_edges,
            second_edges: parts.second_edges,
            extras: parts.extras,
            color_map: parts.color_map,
            options: parts.options,
            metadata: parts.metadata,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayloadJsonContractV1 {
    pub schema_version: u32,
    pub chart: ChartPayload,
}

impl ChartPayload {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartPayloadJsonContractV1 {
            schema_version: CHART_PAYLOAD_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart payload contract v1: {e}"))
        })
    }

    /// Accepts either a bare payload or a versioned contract document.
    ///
    /// Documents carrying `schema_version` are read as contracts; anything
    /// else is read as a bare payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart payload json: {e}"))
        })?;
        if document.get("schema_version").is_none() {
            return serde_json::from_value(document).map_err(|e| {
                ChartError::InvalidData(format!("invalid chart payload: {e}"))
            });
        }
        let contract: ChartPayloadJsonContractV1 = serde_json::from_value(document).map_err(|e| {
            ChartError::InvalidData(format!("invalid chart payload contract: {e}"))
        })?;
        if contract.schema_version != CHART_PAYLOAD_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart payload schema version: {}",
                contract.schema_version
            )));
        }
        Ok(contract.chart)
    }
}

impl Chart {
    #[must_use]
    pub fn render_payload(&self) -> ChartPayload {
        ChartPayload {
            id: self.id().to_owned(),
            parent_id: self.parent_id().map(str::to_owned),
            dataset_path: self.dataset_path.clone(),
            should_load_dataset: self.should_load_dataset,
            title: self.title.clone(),
            dimensionality: self.dimensionality(),
            nodes: self.nodes().cloned(),
            first_edges: self.first_edges().clone(),
            second_edges: self.second_edges().clone(),
            extras: self.extras.clone(),
            color_map: self.color_map.clone(),
            options: self.options.clone(),
            metadata: self.metadata.clone(),
        }
    }

    pub fn render_payload_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.render_payload().to_json_contract_v1_pretty()
    }
}
