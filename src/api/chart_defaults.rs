use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{ChartMetadata, ChartOptions, EdgeProperties, EdgeSlot};

pub const DEFAULT_DATASET_PATH: &str = "datasets/your-dataset.json";
pub const DEFAULT_CHART_TITLE: &str = "Chart";

/// Initial values applied to every chart a registry creates.
///
/// Serializable so hosts can ship their defaults as JSON next to the
/// renderer; every field falls back to its built-in value when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefaults {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "EdgeProperties::first_default")]
    pub first_edge_properties: EdgeProperties,
    #[serde(default = "EdgeProperties::second_default")]
    pub second_edge_properties: EdgeProperties,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub metadata: ChartMetadata,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            title: default_title(),
            first_edge_properties: EdgeProperties::first_default(),
            second_edge_properties: EdgeProperties::second_default(),
            options: ChartOptions::default(),
            metadata: ChartMetadata::default(),
        }
    }
}

impl ChartDefaults {
    /// Parses and validates defaults from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let defaults: Self = serde_json::from_str(input)?;
        defaults.validate()?;
        Ok(defaults)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.first_edge_properties.validate()?;
        self.second_edge_properties.validate()?;
        self.options.validate()
    }

    /// Path hint handed to callers that still need to fetch the dataset.
    #[must_use]
    pub fn with_dataset_path(mut self, dataset_path: impl Into<String>) -> Self {
        self.dataset_path = dataset_path.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_edge_properties(
        mut self,
        slot: EdgeSlot,
        properties: EdgeProperties,
    ) -> ChartResult<Self> {
        properties.validate()?;
        match slot {
            EdgeSlot::First => self.first_edge_properties = properties,
            EdgeSlot::Second => self.second_edge_properties = properties,
        }
        Ok(self)
    }

    pub fn with_options(mut self, options: ChartOptions) -> ChartResult<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ChartMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn edge_properties(&self, slot: EdgeSlot) -> &EdgeProperties {
        match slot {
            EdgeSlot::First => &self.first_edge_properties,
            EdgeSlot::Second => &self.second_edge_properties,
        }
    }
}

fn default_dataset_path() -> String {
    DEFAULT_DATASET_PATH.to_owned()
}

fn default_title() -> String {
    DEFAULT_CHART_TITLE.to_owned()
}
