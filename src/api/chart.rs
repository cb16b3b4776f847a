use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::core::Table;
use crate::error::ChartResult;

use super::{ChartDefaults, ChartMetadata, ChartOptions, EdgeSet, EdgeSlot};

/// Shared handle to a registered chart.
pub type SharedChart = Rc<RefCell<Chart>>;

/// Category label -> color.
pub type ColorMap = IndexMap<String, String>;

/// In-memory record describing one renderable chart.
///
/// Charts are created through [`super::ChartRegistry::create_chart`], which
/// registers them before handing them out.
#[derive(Debug)]
pub struct Chart {
    id: String,
    parent_id: Option<String>,
    parent: Option<SharedChart>,

    /// Where the caller should fetch dataset content from, if it still has to.
    pub dataset_path: String,
    pub should_load_dataset: bool,

    raw_nodes: Option<Table>,
    nodes: Option<Table>,
    nodes_json: Option<String>,

    first_edges: EdgeSet,
    second_edges: EdgeSet,

    pub title: String,
    dimensionality: usize,
    pub extras: Vec<Value>,
    pub color_map: Option<ColorMap>,
    pub options: ChartOptions,
    pub metadata: ChartMetadata,
}

impl Chart {
    pub(crate) fn new(
        id: String,
        parent_id: Option<String>,
        parent: Option<SharedChart>,
        defaults: &ChartDefaults,
    ) -> Self {
        Self {
            id,
            parent_id,
            parent,
            dataset_path: String::new(),
            should_load_dataset: false,
            raw_nodes: None,
            nodes: None,
            nodes_json: None,
            first_edges: EdgeSet::new(defaults.first_edge_properties.clone()),
            second_edges: EdgeSet::new(defaults.second_edge_properties.clone()),
            title: defaults.title.clone(),
            dimensionality: 0,
            extras: Vec::new(),
            color_map: None,
            options: defaults.options.clone(),
            metadata: defaults.metadata.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// The chart registered under `parent_id` when this chart was created.
    ///
    /// `None` when no chart was registered under that id at the time. The
    /// link is held strongly: re-registering or evicting the parent id later
    /// does not change it.
    #[must_use]
    pub fn parent(&self) -> Option<SharedChart> {
        self.parent.clone()
    }

    /// Parses `dataset_json` into the node table.
    ///
    /// On success `nodes` is replaced and `dimensionality` becomes its column
    /// count. On failure the chart is left untouched.
    pub fn load_dataset(&mut self, dataset_json: &str) -> ChartResult<()> {
        let nodes = Table::from_json_str(dataset_json)?;
        debug!(
            chart_id = %self.id,
            rows = nodes.row_count(),
            columns = nodes.column_count(),
            "loaded dataset"
        );
        self.dimensionality = nodes.column_count();
        self.nodes = Some(nodes);
        self.nodes_json = None;
        Ok(())
    }

    #[must_use]
    pub fn nodes(&self) -> Option<&Table> {
        self.nodes.as_ref()
    }

    /// Nodes before metadata enrichment. Only the caller populates this.
    #[must_use]
    pub fn raw_nodes(&self) -> Option<&Table> {
        self.raw_nodes.as_ref()
    }

    pub fn set_raw_nodes(&mut self, raw_nodes: Table) {
        self.raw_nodes = Some(raw_nodes);
    }

    /// Last value produced by [`Chart::serialize_nodes`], if still current.
    #[must_use]
    pub fn nodes_json(&self) -> Option<&str> {
        self.nodes_json.as_deref()
    }

    /// Serializes `nodes` in records form and caches it as `nodes_json`.
    pub fn serialize_nodes(&mut self) -> ChartResult<Option<&str>> {
        let Some(nodes) = self.nodes.as_ref() else {
            return Ok(None);
        };
        self.nodes_json = Some(nodes.to_json_records_pretty()?);
        Ok(self.nodes_json.as_deref())
    }

    /// Column count of the node table; `0` until a dataset is loaded.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Two columns switch the renderer into scatterplot mode.
    #[must_use]
    pub fn is_scatterplot(&self) -> bool {
        self.dimensionality == 2
    }

    #[must_use]
    pub fn edge_set(&self, slot: EdgeSlot) -> &EdgeSet {
        match slot {
            EdgeSlot::First => &self.first_edges,
            EdgeSlot::Second => &self.second_edges,
        }
    }

    pub fn edge_set_mut(&mut self, slot: EdgeSlot) -> &mut EdgeSet {
        match slot {
            EdgeSlot::First => &mut self.first_edges,
            EdgeSlot::Second => &mut self.second_edges,
        }
    }

    #[must_use]
    pub fn first_edges(&self) -> &EdgeSet {
        &self.first_edges
    }

    #[must_use]
    pub fn second_edges(&self) -> &EdgeSet {
        &self.second_edges
    }

    #[must_use]
    pub fn color_for(&self, category: &str) -> Option<&str> {
        self.color_map
            .as_ref()
            .and_then(|colors| colors.get(category))
            .map(String::as_str)
    }
}
