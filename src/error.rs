use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniversleError {
    /// Target selection was attempted over an empty institution list.
    #[error("institution list is empty")]
    EmptyDataset,

    /// Malformed dataset file or unsupported dataset format.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// JSON decoding failure while loading a dataset.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV decoding failure while loading a dataset.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
