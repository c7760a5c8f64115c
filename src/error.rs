use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TallyError>;

/// Why one input line was rejected. Never fatal: the batch continues and the
/// line is simply dropped from aggregation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least {required} fields, found {found}")]
    TooFewFields { required: usize, found: usize },

    #[error("field '{field}' has non-numeric value '{value}'")]
    BadNumber { field: &'static str, value: String },
}
