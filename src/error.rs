use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("source dataset unavailable: {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("schema mismatch at column {position}: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        position: usize,
        expected: String,
        found: Option<String>,
    },

    #[error("cannot coerce {column} value {value:?} at row {row} to a number")]
    TypeCoercion {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
