//! Navigation state: filtered list vs. single-record detail.

use crate::record::RecordId;
use serde::{Deserialize, Serialize};

/// Which view the user is looking at.
///
/// `Detail` holds the selected record's stable identity, never its position
/// in the filtered sequence. The owning session guarantees the id is present
/// in the current filtered set, falling back to `List` when a filter change
/// removes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    /// The filtered summary list.
    #[default]
    List,
    /// Detail view for one record.
    Detail(RecordId),
}

impl ViewState {
    /// The selected record id, if a detail view is open.
    pub fn selected(&self) -> Option<RecordId> {
        match self {
            ViewState::List => None,
            ViewState::Detail(id) => Some(*id),
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, ViewState::Detail(_))
    }
}

/// Outcome of a `select` transition.
///
/// A stale selection (id not in the current filtered set, e.g. a click that
/// raced a filter change) is a benign no-op reported as a value, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The detail view was opened.
    Opened,
    /// The id was not in the filtered set; state is unchanged.
    Stale,
}
