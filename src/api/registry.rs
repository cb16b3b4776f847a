use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};

use super::{Chart, ChartDefaults, SharedChart};

/// Explicit id -> chart mapping used to resolve parent links.
///
/// Single-threaded: handles are `Rc<RefCell<_>>` and the registry itself
/// needs external synchronization if a host shares it.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: IndexMap<String, SharedChart>,
    defaults: ChartDefaults,
}

impl ChartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_defaults(defaults: ChartDefaults) -> Self {
        Self {
            charts: IndexMap::new(),
            defaults,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &ChartDefaults {
        &self.defaults
    }

    /// Creates a chart with this registry's defaults and registers it under `id`.
    ///
    /// The parent is looked up once, now, and held strongly; an unknown
    /// `parent_id` leaves the chart without a parent. A chart already
    /// registered under `id` is replaced, which is how a chart is rebuilt
    /// once its dataset has been fetched. Children of the replaced chart, and
    /// a chart naming its own id as parent, keep the previous instance.
    pub fn create_chart(&mut self, id: impl Into<String>, parent_id: Option<&str>) -> SharedChart {
        let id = id.into();
        let parent = parent_id
            .and_then(|parent_id| self.charts.get(parent_id))
            .cloned();

        if let Some(parent_id) = parent_id.filter(|_| parent.is_none()) {
            debug!(chart_id = %id, parent_id, "parent chart is not registered");
        }

        let chart = Rc::new(RefCell::new(Chart::new(
            id.clone(),
            parent_id.map(str::to_owned),
            parent,
            &self.defaults,
        )));

        if self.charts.insert(id.clone(), Rc::clone(&chart)).is_some() {
            debug!(chart_id = %id, "replaced chart registered under the same id");
        } else {
            trace!(chart_id = %id, count = self.charts.len(), "registered chart");
        }
        chart
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<SharedChart> {
        self.charts.get(id).cloned()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.charts.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.charts.keys().map(String::as_str)
    }

    /// Evicts `id`. Children already linked to it keep their parent.
    pub fn remove(&mut self, id: &str) -> Option<SharedChart> {
        let removed = self.charts.shift_remove(id);
        if removed.is_some() {
            trace!(chart_id = id, count = self.charts.len(), "removed chart");
        }
        removed
    }

    /// Charts whose `parent_id` is `parent_id`, in registration order.
    ///
    /// Fails when a registered chart is currently borrowed mutably.
    pub fn children_of(&self, parent_id: &str) -> ChartResult<Vec<SharedChart>> {
        let mut children = Vec::new();
        for (id, chart) in &self.charts {
            let state = chart.try_borrow().map_err(|_| {
                ChartError::InvalidData(format!("chart `{id}` is borrowed mutably"))
            })?;
            if state.parent_id() == Some(parent_id) {
                children.push(Rc::clone(chart));
            }
        }
        Ok(children)
    }
}
