pub mod edges;
pub mod json;
pub mod table;

pub use edges::{
    EDGE_SOURCE_COLUMN, EDGE_TARGET_COLUMN, EdgeRecord, convert_edge_table_to_json,
    convert_edges_to_json, edge_table_from_json_str,
};
pub use json::{JSON_INDENT, to_indented_json};
pub use table::{Table, TableOrient};
