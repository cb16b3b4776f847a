use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

use super::{ChartRegistry, SharedChart};

/// Opaque argument bundle forwarded by the host alongside a chart request.
///
/// The adapter does not interpret any of its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartArgs(Map<String, Value>);

impl ChartArgs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        match serde_json::from_str::<Value>(input)? {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Ok(Self::default()),
            _ => Err(ChartError::InvalidData(
                "chart arguments must be a json object".to_owned(),
            )),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the chart a renderer asked for.
///
/// The chart is registered under `chart_id`, flagged for dataset loading with
/// the registry's default dataset path, and fed `dataset_json` right away
/// when it is non-empty. A dataset that fails to parse is reported as `Err`;
/// the chart stays registered with its defaults.
pub fn prepare_chart(
    registry: &mut ChartRegistry,
    dataset_json: Option<&str>,
    chart_id: &str,
    parent_id: Option<&str>,
    args: &ChartArgs,
) -> ChartResult<SharedChart> {
    debug!(chart_id, ?parent_id, arg_count = args.len(), "prepare chart");
    let dataset_path = registry.defaults().dataset_path.clone();
    let chart = registry.create_chart(chart_id, parent_id);
    {
        let mut state = chart.borrow_mut();
        state.dataset_path = dataset_path;
        state.should_load_dataset = true;
        if let Some(dataset_json) = dataset_json.filter(|json| !json.is_empty()) {
            state.load_dataset(dataset_json)?;
        }
    }
    Ok(chart)
}
