//! Catalog records and their stable identity.
//!
//! A [`RecordId`] is assigned once when the catalog is loaded and never
//! recomputed afterwards. Selection and navigation address records by this
//! identity, never by a position inside a filtered subset, because positions
//! shift whenever the filter changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity of a catalog record.
///
/// Assigned sequentially at load time from the source row order. Unique for
/// the lifetime of the loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orphan drug designation as recorded in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrphanFlag {
    Yes,
    No,
}

impl OrphanFlag {
    /// Returns the canonical value as it appears in the source table.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrphanFlag::Yes => "Yes",
            OrphanFlag::No => "No",
        }
    }
}

impl fmt::Display for OrphanFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrphanFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("yes") => Ok(OrphanFlag::Yes),
            v if v.eq_ignore_ascii_case("no") => Ok(OrphanFlag::No),
            other => Err(format!("unrecognized orphan flag: {other:?}")),
        }
    }
}

/// One drug candidate entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Stable identity, assigned at load time.
    pub id: RecordId,
    pub drug_name: String,
    pub disease: String,
    pub orphan: OrphanFlag,
    /// Open but typically small categorical value (e.g. "StuffThatWorks").
    pub category: String,
    /// Display string; the source column mixes numeric and formatted values.
    pub total_score: String,
    /// Long-form summary, absent for some candidates.
    pub one_pager: Option<String>,
    /// Long-form supporting references, absent for some candidates.
    pub studies: Option<String>,
}

impl Record {
    /// 1-Pager content, or the defined placeholder when absent.
    pub fn one_pager_text(&self) -> &str {
        self.one_pager.as_deref().unwrap_or("No 1-Pager available.")
    }

    /// Studies content, or the defined placeholder when absent.
    pub fn studies_text(&self) -> &str {
        self.studies.as_deref().unwrap_or("No Studies available.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orphan_flag_parses_case_insensitively() {
        assert_eq!("Yes".parse::<OrphanFlag>(), Ok(OrphanFlag::Yes));
        assert_eq!("no".parse::<OrphanFlag>(), Ok(OrphanFlag::No));
        assert_eq!(" YES ".parse::<OrphanFlag>(), Ok(OrphanFlag::Yes));
        assert!("maybe".parse::<OrphanFlag>().is_err());
        assert!("".parse::<OrphanFlag>().is_err());
    }

    #[test]
    fn record_id_displays_with_hash_prefix() {
        assert_eq!(RecordId(7).to_string(), "#7");
    }
}
