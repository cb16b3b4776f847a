//! chart-adapter: prepares chart data for front-end graph renderers.
//!
//! A chart carries a node table loaded from a JSON dataset, two optional
//! edge sets, and display configuration. Charts live in an explicit
//! [`ChartRegistry`] that resolves parent links by id.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Chart, ChartDefaults, ChartRegistry, SharedChart, prepare_chart};
pub use error::{ChartError, ChartResult};
