use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::json::to_indented_json;
use crate::core::table::Table;
use crate::error::{ChartError, ChartResult};

pub const EDGE_SOURCE_COLUMN: &str = "source";
pub const EDGE_TARGET_COLUMN: &str = "target";

/// One link in the renderer's edge format. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: Value,
    pub dst: Value,
}

impl EdgeRecord {
    fn from_cells(row: usize, cells: &[&Value]) -> ChartResult<Self> {
        match cells {
            [src, dst] => Ok(Self {
                src: (*src).clone(),
                dst: (*dst).clone(),
            }),
            _ => Err(ChartError::InvalidEdgeRow {
                row,
                len: cells.len(),
            }),
        }
    }
}

/// Formats `[source, target]` rows as a JSON array of `{"src", "dst"}`
/// objects, preserving row order, indented with four spaces.
///
/// Every row must hold exactly two cells.
pub fn convert_edges_to_json<R: AsRef<[Value]>>(rows: &[R]) -> ChartResult<String> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let cells: &[Value] = cells.as_ref();
            EdgeRecord::from_cells(row, &cells.iter().collect::<Vec<_>>())
        })
        .collect::<ChartResult<Vec<_>>>()?;
    to_indented_json(&records)
}

/// [`convert_edges_to_json`] over a two-column table.
pub fn convert_edge_table_to_json(edges: &Table) -> ChartResult<String> {
    if edges.column_count() != 2 {
        return Err(ChartError::InvalidEdgeTable {
            columns: edges.column_count(),
        });
    }
    let records = edges
        .rows()
        .enumerate()
        .map(|(row, cells)| EdgeRecord::from_cells(row, &cells))
        .collect::<ChartResult<Vec<_>>>()?;
    to_indented_json(&records)
}

/// Reads an edge list into a `source`/`target` table.
///
/// Accepts `[[source, target], ...]` as well as objects keyed
/// `source`/`target` or `src`/`dst`.
pub fn edge_table_from_json_str(input: &str) -> ChartResult<Table> {
    let document: Value = serde_json::from_str(input)?;
    let Value::Array(items) = document else {
        return Err(ChartError::InvalidData(
            "edge list must be a json array".to_owned(),
        ));
    };

    let rows = items
        .into_iter()
        .enumerate()
        .map(|(row, item)| match item {
            Value::Array(cells) if cells.len() == 2 => Ok(cells),
            Value::Array(cells) => Err(ChartError::InvalidEdgeRow {
                row,
                len: cells.len(),
            }),
            Value::Object(mut fields) => {
                let source = take_endpoint(&mut fields, EDGE_SOURCE_COLUMN, "src");
                let target = take_endpoint(&mut fields, EDGE_TARGET_COLUMN, "dst");
                match (source, target) {
                    (Some(source), Some(target)) => Ok(vec![source, target]),
                    _ => Err(ChartError::InvalidData(format!(
                        "edge {row} needs `source`/`target` or `src`/`dst` keys"
                    ))),
                }
            }
            _ => Err(ChartError::InvalidData(format!(
                "edge {row} must be a json array or object"
            ))),
        })
        .collect::<ChartResult<Vec<_>>>()?;

    Table::from_rows([EDGE_SOURCE_COLUMN, EDGE_TARGET_COLUMN], rows)
}

fn take_endpoint(fields: &mut Map<String, Value>, key: &str, alias: &str) -> Option<Value> {
    fields.remove(key).or_else(|| fields.remove(alias))
}
