//! The view-state machine for one interactive browsing session.
//!
//! A [`Session`] is the exclusive owner of the filter and navigation state;
//! no other component writes them. The record store is passed in by shared
//! reference and may be shared read-only across sessions. Every transition
//! completes synchronously before the next user action is processed.
//!
//! Detail selection is identity-addressed: `Detail` holds a [`RecordId`],
//! never a position in the filtered sequence. Every filter mutation runs
//! reconciliation before returning: a selection that survived the new filter
//! is kept, one that did not falls back to the list view. Rejected
//! transitions are silent no-ops (debug-level log at most), since they are
//! benign races between UI state and data state.

use catalog_model::{FilterState, OrphanChoice, Record, RecordId, SelectOutcome, ViewState};
use std::collections::BTreeSet;

use crate::filter;

/// Filter and navigation state for one session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    filter: FilterState,
    view: ViewState,
}

impl Session {
    /// Fresh session: orphan `All`, empty category selection, list view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session starting from a prepared filter (e.g. the UI's default-all
    /// category pre-population).
    pub fn with_filter(filter: FilterState) -> Self {
        Self {
            filter,
            view: ViewState::List,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The ordered filtered subsequence under the current filter.
    pub fn filtered<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        filter::apply(records, &self.filter)
    }

    /// The record behind an open detail view, resolved by identity.
    pub fn selected_record<'a>(&self, records: &'a [Record]) -> Option<&'a Record> {
        let id = self.view.selected()?;
        records.iter().find(|r| r.id == id)
    }

    // ========================================================================
    // Navigation transitions
    // ========================================================================

    /// Open the detail view for `id`.
    ///
    /// Valid only when `id` is in the current filtered sequence. A stale id
    /// (e.g. a click racing a just-applied filter change) is rejected as a
    /// no-op and the state stays where it was.
    pub fn select(&mut self, records: &[Record], id: RecordId) -> SelectOutcome {
        if filter::contains_id(records, &self.filter, id) {
            self.view = ViewState::Detail(id);
            SelectOutcome::Opened
        } else {
            tracing::debug!(%id, "select rejected: id not in filtered set");
            SelectOutcome::Stale
        }
    }

    /// Return to the list view. No-op when already there.
    pub fn back(&mut self) {
        self.view = ViewState::List;
    }

    // ========================================================================
    // Filter mutations (each reconciles before returning)
    // ========================================================================

    pub fn set_orphan(&mut self, records: &[Record], choice: OrphanChoice) {
        self.filter.orphan = choice;
        self.reconcile(records);
    }

    pub fn set_categories(&mut self, records: &[Record], categories: BTreeSet<String>) {
        self.filter.categories = categories;
        self.reconcile(records);
    }

    /// Add or remove one category from the selection.
    pub fn toggle_category(&mut self, records: &[Record], category: &str) {
        if !self.filter.categories.remove(category) {
            self.filter.categories.insert(category.to_string());
        }
        self.reconcile(records);
    }

    /// Select every category present in the catalog.
    pub fn select_all_categories(&mut self, records: &[Record]) {
        self.filter.categories = filter::category_options(records).into_iter().collect();
        self.reconcile(records);
    }

    /// Clear the category selection. The filtered set becomes empty.
    pub fn clear_categories(&mut self, records: &[Record]) {
        self.filter.categories.clear();
        self.reconcile(records);
    }

    /// Re-validate an open detail selection against the current filter.
    ///
    /// Runs synchronously as part of every filter mutation, never deferred.
    fn reconcile(&mut self, records: &[Record]) {
        if let ViewState::Detail(id) = self.view
            && !filter::contains_id(records, &self.filter, id)
        {
            tracing::debug!(%id, "selection filtered out, returning to list view");
            self.view = ViewState::List;
        }
    }
}
