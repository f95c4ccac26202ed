//! Application-level state.

use std::path::{Path, PathBuf};

use catalog_core::Session;
use catalog_ingest::load_catalog;
use catalog_model::{FilterState, Record};

use crate::settings::Settings;

/// A loaded catalog plus this session's filter/navigation state.
pub struct CatalogState {
    /// Source file the catalog was loaded from.
    pub path: PathBuf,
    /// The record store; read-only after load.
    pub records: Vec<Record>,
    /// Sorted unique categories, for the multi-select options.
    pub category_options: Vec<String>,
    /// Filter and view state, owned exclusively by this session.
    pub session: Session,
}

impl CatalogState {
    /// Load a catalog file and start a session with every category
    /// pre-selected (the UI-layer "show everything" default).
    pub fn load(path: &Path) -> Result<Self, catalog_ingest::DataLoadError> {
        let records = load_catalog(path)?;
        let category_options = catalog_core::category_options(&records);
        let session = Session::with_filter(FilterState::with_all_categories(&records));
        Ok(Self {
            path: path.to_path_buf(),
            records,
            category_options,
            session,
        })
    }
}

/// Top-level application state.
#[derive(Default)]
pub struct AppState {
    /// Loaded catalog (None until a file is opened).
    pub catalog: Option<CatalogState>,
    /// Application settings (persisted).
    pub settings: Settings,
    /// Last load failure, shown as a banner until the next successful load.
    pub load_error: Option<String>,
}

impl AppState {
    /// Create new app state with loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            catalog: None,
            settings,
            load_error: None,
        }
    }

    /// Load a catalog file.
    ///
    /// On failure the previous catalog (if any) is kept untouched and the
    /// error is surfaced through `load_error`; a load failure is fatal only
    /// to the attempted load, never to the running session.
    pub fn load_catalog(&mut self, path: &Path) {
        match CatalogState::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    records = catalog.records.len(),
                    categories = catalog.category_options.len(),
                    "catalog loaded"
                );
                self.catalog = Some(catalog);
                self.load_error = None;
                self.remember_recent(path);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load catalog");
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Close the current catalog and return to the home screen.
    pub fn close_catalog(&mut self) {
        self.catalog = None;
        self.load_error = None;
    }

    fn remember_recent(&mut self, path: &Path) {
        let path = path.to_path_buf();
        self.settings.recent_catalogs.retain(|p| p != &path);
        self.settings.recent_catalogs.insert(0, path);
        if self.settings.recent_catalogs.len() > 10 {
            self.settings.recent_catalogs.truncate(10);
        }
    }
}
