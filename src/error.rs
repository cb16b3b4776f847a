use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid edge row {row}: expected 2 elements, found {len}")]
    InvalidEdgeRow { row: usize, len: usize },

    #[error("invalid edge table: expected 2 columns, found {columns}")]
    InvalidEdgeTable { columns: usize },
}
