use thiserror::Error;

/// Failure to load the catalog source.
///
/// Fatal to the session: there is no partial-load recovery. The caller
/// decides how to surface it (the GUI shows a banner and keeps any
/// previously loaded catalog untouched).
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("unrecognized orphan flag {value:?} in data row {row}")]
    InvalidOrphanFlag { row: usize, value: String },
}

pub type Result<T> = std::result::Result<T, DataLoadError>;
