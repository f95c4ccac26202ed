//! Catalog ingestion: reads the tabular drug-candidate source into an
//! immutable in-memory record store.

pub mod csv_catalog;
pub mod error;

pub use csv_catalog::{REQUIRED_COLUMNS, load_catalog, read_records};
pub use error::{DataLoadError, Result};
