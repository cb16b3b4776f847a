use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Table, convert_edge_table_to_json, edge_table_from_json_str};
use crate::error::{ChartError, ChartResult};

/// Addresses one of the two independent edge sets of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeSlot {
    First,
    Second,
}

/// Stroke style of an edge set, keyed the way the renderer reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeProperties {
    pub visible: bool,
    #[serde(rename = "strokeColor")]
    pub stroke_color: String,
    #[serde(rename = "stroke-width")]
    pub stroke_width: f64,
    pub opacity: f64,
}

impl EdgeProperties {
    pub const DEFAULT_STROKE_WIDTH: f64 = 0.10;
    pub const DEFAULT_OPACITY: f64 = 0.50;

    /// Hidden edges with the default width and opacity.
    #[must_use]
    pub fn new(stroke_color: impl Into<String>) -> Self {
        Self {
            visible: false,
            stroke_color: stroke_color.into(),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            opacity: Self::DEFAULT_OPACITY,
        }
    }

    #[must_use]
    pub fn first_default() -> Self {
        Self::new("blue")
    }

    #[must_use]
    pub fn second_default() -> Self {
        Self::new("black")
    }

    #[must_use]
    pub fn default_for(slot: EdgeSlot) -> Self {
        match slot {
            EdgeSlot::First => Self::first_default(),
            EdgeSlot::Second => Self::second_default(),
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.stroke_color.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "edge stroke color must not be empty".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "edge stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "edge opacity must be finite and within [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// A named, independently toggled collection of source -> target links.
///
/// `edges_json` always mirrors `edges`; both are replaced together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EdgeSetParts")]
pub struct EdgeSet {
    pub use_edges: bool,
    pub title: String,
    edges: Option<Table>,
    edges_json: Option<String>,
    #[serde(default)]
    pub bundle: bool,
    properties: EdgeProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeSetParts {
    use_edges: bool,
    title: String,
    edges: Option<Table>,
    edges_json: Option<String>,
    #[serde(default)]
    bundle: bool,
    properties: EdgeProperties,
}

impl TryFrom<EdgeSetParts> for EdgeSet {
    type Error = ChartError;

    fn try_from(parts: EdgeSetParts) -> ChartResult<Self> {
        parts.properties.validate()?;
        let edges_json = parts
            .edges
            .as_ref()
            .map(convert_edge_table_to_json)
            .transpose()?;
        if parts.edges_json.is_some() && parts.edges_json != edges_json {
            return Err(ChartError::InvalidData(
                "edgesJson does not match the edge table".to_owned(),
            ));
        }
        Ok(Self {
            use_edges: parts.use_edges,
            title: parts.title,
            edges: parts.edges,
            edges_json,
            bundle: parts.bundle,
            properties: parts.properties,
        })
    }
}

impl EdgeSet {
    #[must_use]
    pub fn new(properties: EdgeProperties) -> Self {
        Self {
            use_edges: false,
            title: String::new(),
            edges: None,
            edges_json: None,
            bundle: false,
            properties,
        }
    }

    /// Turns the set on and names it in the options pane.
    pub fn enable(&mut self, title: impl Into<String>) {
        self.use_edges = true;
        self.title = title.into();
    }

    pub fn disable(&mut self) {
        self.use_edges = false;
    }

    /// Replaces the edge table and regenerates its JSON form.
    ///
    /// The table must have exactly two columns: source id, target id.
    pub fn set_edges(&mut self, edges: Table) -> ChartResult<()> {
        let edges_json = convert_edge_table_to_json(&edges)?;
        debug!(edge_count = edges.row_count(), "set edge table");
        self.edges = Some(edges);
        self.edges_json = Some(edges_json);
        Ok(())
    }

    /// Parses an edge list document and installs it via [`EdgeSet::set_edges`].
    pub fn load_edges_json(&mut self, input: &str) -> ChartResult<()> {
        let edges = edge_table_from_json_str(input)?;
        self.set_edges(edges)
    }

    pub fn clear_edges(&mut self) {
        self.edges = None;
        self.edges_json = None;
    }

    #[must_use]
    pub fn edges(&self) -> Option<&Table> {
        self.edges.as_ref()
    }

    #[must_use]
    pub fn edges_json(&self) -> Option<&str> {
        self.edges_json.as_deref()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.as_ref().map_or(0, Table::row_count)
    }

    #[must_use]
    pub fn properties(&self) -> &EdgeProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: EdgeProperties) -> ChartResult<()> {
        properties.validate()?;
        self.properties = properties;
        Ok(())
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.properties.visible = visible;
    }
}
