//! Application state management.
//!
//! Runtime state for the GUI:
//!
//! - **AppState**: root state (loaded catalog, settings, transient errors)
//! - **CatalogState**: the loaded record store plus this session's
//!   filter/navigation state
//!
//! The record store is immutable once loaded. Filter and view state are
//! owned by the embedded `catalog_core::Session` and mutated only through
//! its transitions; the views report actions and the app applies them.

mod app_state;

pub use app_state::{AppState, CatalogState};
