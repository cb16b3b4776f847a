use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::json::to_indented_json;
use crate::error::{ChartError, ChartResult};

/// Explicit JSON layouts understood by [`Table::from_json_str_with_orient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableOrient {
    /// `[{"a": 1, "b": 2}, ...]`
    Records,
    /// `{"a": [1, ...], "b": [2, ...]}` or `{"a": {"r0": 1}, ...}`
    Columns,
    /// `[[1, 2], ...]`
    Values,
    /// `{"columns": [...], "data": [[...]], "index": [...]}`
    Split,
}

/// Column-oriented table of JSON cells.
///
/// Rows are entities and columns are attributes. Every column holds exactly
/// one cell per index label, and columns keep the order in which they first
/// appeared in the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableParts")]
pub struct Table {
    index: Vec<String>,
    columns: IndexMap<String, Vec<Value>>,
}

#[derive(Deserialize)]
struct TableParts {
    index: Vec<String>,
    columns: IndexMap<String, Vec<Value>>,
}

impl TryFrom<TableParts> for Table {
    type Error = ChartError;

    fn try_from(parts: TableParts) -> ChartResult<Self> {
        let row_count = parts.index.len();
        if let Some((name, cells)) = parts
            .columns
            .iter()
            .find(|(_, cells)| cells.len() != row_count)
        {
            return Err(ChartError::InvalidData(format!(
                "column `{name}` has {} cells, expected {row_count}",
                cells.len()
            )));
        }
        Ok(Self {
            index: parts.index,
            columns: parts.columns,
        })
    }
}

impl Table {
    /// Table with no rows and no columns.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a table from column labels and row vectors.
    ///
    /// Rows are labelled positionally (`"0"`, `"1"`, ...).
    pub fn from_rows<C, S>(columns: C, rows: Vec<Vec<Value>>) -> ChartResult<Self>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = columns.into_iter().map(Into::into).collect();
        let row_count = rows.len();
        let mut table_columns: IndexMap<String, Vec<Value>> = IndexMap::with_capacity(names.len());
        for name in &names {
            if table_columns
                .insert(name.clone(), Vec::with_capacity(row_count))
                .is_some()
            {
                return Err(ChartError::InvalidData(format!(
                    "duplicate column label `{name}`"
                )));
            }
        }

        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != names.len() {
                return Err(ChartError::InvalidData(format!(
                    "row {row} has {} cells, expected {}",
                    cells.len(),
                    names.len()
                )));
            }
            for (column, cell) in table_columns.values_mut().zip(cells) {
                column.push(cell);
            }
        }

        Ok(Self {
            index: positional_index(row_count),
            columns: table_columns,
        })
    }

    /// Parses a JSON dataset, inferring its layout from the document shape.
    ///
    /// Arrays are read as records, rows of values, or a single column of
    /// scalars. Objects are read column-wise, either as equal-length arrays
    /// or as label-keyed objects. Empty documents yield an empty table.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input)?;
        Self::from_json_value(document)
    }

    /// Same inference as [`Table::from_json_str`] over an already parsed value.
    pub fn from_json_value(document: Value) -> ChartResult<Self> {
        match document {
            Value::Array(items) => Self::from_array(items),
            Value::Object(fields) => Self::from_columns(fields),
            other => Err(ChartError::InvalidData(format!(
                "dataset must be a json array or object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parses a JSON dataset laid out as `orient`.
    pub fn from_json_str_with_orient(input: &str, orient: TableOrient) -> ChartResult<Self> {
        let document: Value = serde_json::from_str(input)?;
        match (orient, document) {
            (TableOrient::Records, Value::Array(items)) => Self::from_records(items),
            (TableOrient::Values, Value::Array(items)) => Self::from_values(items),
            (TableOrient::Columns, Value::Object(fields)) => Self::from_columns(fields),
            (TableOrient::Split, Value::Object(fields)) => Self::from_split(fields),
            (orient, other) => Err(ChartError::InvalidData(format!(
                "{orient:?} layout cannot be read from a json {}",
                json_kind(&other)
            ))),
        }
    }

    fn from_array(items: Vec<Value>) -> ChartResult<Self> {
        if items.is_empty() {
            return Ok(Self::empty());
        }
        if items.iter().all(Value::is_object) {
            return Self::from_records(items);
        }
        if items.iter().all(Value::is_array) {
            return Self::from_values(items);
        }
        if items.iter().all(is_scalar) {
            let rows = items.into_iter().map(|item| vec![item]).collect();
            return Self::from_rows(["0"], rows);
        }
        Err(ChartError::InvalidData(
            "dataset array mixes records, rows and scalar values".to_owned(),
        ))
    }

    fn from_records(items: Vec<Value>) -> ChartResult<Self> {
        let row_count = items.len();
        let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
        for (row, item) in items.into_iter().enumerate() {
            let record = match item {
                Value::Object(record) => record,
                other => {
                    return Err(ChartError::InvalidData(format!(
                        "record {row} must be a json object, found {}",
                        json_kind(&other)
                    )));
                }
            };
            for (name, cell) in record {
                columns
                    .entry(name)
                    .or_insert_with(|| vec![Value::Null; row])
                    .push(cell);
            }
            // Keys absent from this record.
            for column in columns.values_mut() {
                column.resize(row + 1, Value::Null);
            }
        }

        Ok(Self {
            index: positional_index(row_count),
            columns,
        })
    }

    fn from_values(items: Vec<Value>) -> ChartResult<Self> {
        let mut rows = items
            .into_iter()
            .enumerate()
            .map(|(row, item)| match item {
                Value::Array(cells) => Ok(cells),
                other => Err(ChartError::InvalidData(format!(
                    "row {row} must be a json array, found {}",
                    json_kind(&other)
                ))),
            })
            .collect::<ChartResult<Vec<_>>>()?;

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for cells in &mut rows {
            cells.resize(width, Value::Null);
        }
        Self::from_rows((0..width).map(|column| column.to_string()), rows)
    }

    fn from_columns(fields: Map<String, Value>) -> ChartResult<Self> {
        if fields.is_empty() {
            return Ok(Self::empty());
        }
        if fields.values().all(Value::is_array) {
            return Self::from_column_arrays(fields);
        }
        if fields.values().all(Value::is_object) {
            return Self::from_column_objects(fields);
        }
        if fields.values().all(is_scalar) {
            return Err(ChartError::InvalidData(
                "dataset object holds only scalar values; columns need arrays or objects"
                    .to_owned(),
            ));
        }
        Err(ChartError::InvalidData(
            "dataset object mixes array, object and scalar columns".to_owned(),
        ))
    }

    fn from_column_arrays(fields: Map<String, Value>) -> ChartResult<Self> {
        let mut row_count: Option<usize> = None;
        let mut columns = IndexMap::with_capacity(fields.len());
        for (name, value) in fields {
            let Value::Array(cells) = value else {
                return Err(ChartError::InvalidData(format!(
                    "column `{name}` must be a json array"
                )));
            };
            match row_count {
                Some(expected) if expected != cells.len() => {
                    return Err(ChartError::InvalidData(format!(
                        "column `{name}` has {} cells, expected {expected}",
                        cells.len()
                    )));
                }
                Some(_) => {}
                None => row_count = Some(cells.len()),
            }
            columns.insert(name, cells);
        }

        Ok(Self {
            index: positional_index(row_count.unwrap_or(0)),
            columns,
        })
    }

    fn from_column_objects(fields: Map<String, Value>) -> ChartResult<Self> {
        let mut labels: IndexSet<String> = IndexSet::new();
        let mut keyed = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            let Value::Object(cells) = value else {
                return Err(ChartError::InvalidData(format!(
                    "column `{name}` must be a json object"
                )));
            };
            labels.extend(cells.keys().cloned());
            keyed.push((name, cells));
        }

        let columns = keyed
            .into_iter()
            .map(|(name, mut cells)| {
                let column = labels
                    .iter()
                    .map(|label| cells.remove(label).unwrap_or(Value::Null))
                    .collect();
                (name, column)
            })
            .collect();

        Ok(Self {
            index: labels.into_iter().collect(),
            columns,
        })
    }

    fn from_split(fields: Map<String, Value>) -> ChartResult<Self> {
        #[derive(Deserialize)]
        struct SplitDocument {
            columns: Vec<Value>,
            data: Vec<Vec<Value>>,
            #[serde(default)]
            index: Option<Vec<Value>>,
        }

        let document: SplitDocument = serde_json::from_value(Value::Object(fields))?;
        let mut table = Self::from_rows(document.columns.iter().map(label_of), document.data)?;
        if let Some(index) = document.index {
            if index.len() != table.row_count() {
                return Err(ChartError::InvalidData(format!(
                    "split index has {} labels, expected {}",
                    index.len(),
                    table.row_count()
                )));
            }
            table.index = index.iter().map(label_of).collect();
        }
        Ok(table)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `true` when the table has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    #[must_use]
    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.columns.get(column).and_then(|cells| cells.get(row))
    }

    /// Cells of row `row` in column order.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<&Value>> {
        self.columns
            .values()
            .map(|cells| cells.get(row))
            .collect::<Option<Vec<_>>>()
            .filter(|_| row < self.row_count())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.row_count()).map(move |row| {
            self.columns
                .values()
                .map(|cells| &cells[row])
                .collect()
        })
    }

    /// Rows as JSON objects keyed by column label.
    #[must_use]
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows()
            .map(|cells| {
                self.columns
                    .keys()
                    .cloned()
                    .zip(cells.into_iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Records form, pretty printed with four-space indentation.
    pub fn to_json_records_pretty(&self) -> ChartResult<String> {
        to_indented_json(&self.to_records())
    }
}

fn positional_index(row_count: usize) -> Vec<String> {
    (0..row_count).map(|row| row.to_string()).collect()
}

fn is_scalar(value: &Value) -> bool {
    !(value.is_array() || value.is_object())
}

fn label_of(value: &Value) -> String {
    match value {
        Value::String(label) => label.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn records_fill_missing_keys_with_null() {
        let table = Table::from_json_str(r#"[{"a":1},{"b":2,"a":3}]"#).expect("records");
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(table.column("b"), Some(&[Value::Null, json!(2)][..]));
        assert_eq!(table.cell(1, "a"), Some(&json!(3)));
    }

    #[test]
    fn column_objects_union_their_row_labels() {
        let table =
            Table::from_json_str(r#"{"x":{"r0":1,"r1":2},"y":{"r1":5,"r2":6}}"#).expect("columns");
        assert_eq!(table.index(), ["r0", "r1", "r2"]);
        assert_eq!(table.column("x"), Some(&[json!(1), json!(2), Value::Null][..]));
        assert_eq!(table.column("y"), Some(&[Value::Null, json!(5), json!(6)][..]));
    }

    #[test]
    fn row_out_of_range_is_none() {
        let table = Table::from_rows(["a"], vec![vec![json!(1)]]).expect("table");
        assert_eq!(table.row(0), Some(vec![&json!(1)]));
        assert_eq!(table.row(1), None);
    }

    #[test]
    fn deserialize_rejects_ragged_columns() {
        let result: Result<Table, _> =
            serde_json::from_str(r#"{"index":["0","1"],"columns":{"a":[1]}}"#);
        assert!(result.is_err());
    }
}
