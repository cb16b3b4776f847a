use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Style applied to edges the user highlights in the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeHighlightStyle {
    pub color: String,
    pub stroke_width: f64,
}

impl Default for EdgeHighlightStyle {
    fn default() -> Self {
        Self {
            color: "rgba(0,155,100,0.75)".to_owned(),
            stroke_width: 3.0,
        }
    }
}

/// Display toggles read by the renderer's options pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub show_tooltip: bool,
    pub default_node_size: f64,
    pub show_axis: bool,
    pub highlighted_edges: EdgeHighlightStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_tooltip: true,
            default_node_size: 4.0,
            show_axis: true,
            highlighted_edges: EdgeHighlightStyle::default(),
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.default_node_size.is_finite() || self.default_node_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "default node size must be finite and > 0".to_owned(),
            ));
        }
        let width = self.highlighted_edges.stroke_width;
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::InvalidData(
                "highlighted edge stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Where the chart was first placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub left: f64,
    pub top: f64,
}

impl Default for NodePosition {
    fn default() -> Self {
        Self {
            left: 100.0,
            top: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartMetadata {
    pub original_position: NodePosition,
    /// Source of the model that produced this chart, if the host keeps it.
    pub model_code: String,
}
