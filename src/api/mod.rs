//! Chart-level API: the chart record, its edge sets, the registry that
//! resolves parent links, and the entry point used by renderers.

mod chart;
mod chart_defaults;
mod edge_set;
mod entry;
mod json_contract;
mod options;
mod registry;

pub use chart::{Chart, ColorMap, SharedChart};
pub use chart_defaults::{ChartDefaults, DEFAULT_CHART_TITLE, DEFAULT_DATASET_PATH};
pub use edge_set::{EdgeProperties, EdgeSet, EdgeSlot};
pub use entry::{ChartArgs, prepare_chart};
pub use json_contract::{
    CHART_PAYLOAD_JSON_SCHEMA_V1, ChartPayload, ChartPayloadJsonContractV1,
};
pub use options::{ChartMetadata, ChartOptions, EdgeHighlightStyle, NodePosition};
pub use registry::ChartRegistry;
