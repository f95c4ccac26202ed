//! Settings types and configuration for the catalog GUI.
//!
//! All user-configurable settings live here:
//! - General preferences (dark mode)
//! - Display settings (card grid layout, visible summary fields)
//! - Recent catalog files

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,

    /// Recent catalog files (persisted for convenience).
    #[serde(default)]
    pub recent_catalogs: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            display: DisplaySettings::default(),
            recent_catalogs: Vec::new(),
        }
    }
}

// ============================================================================
// General Settings
// ============================================================================

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

// ============================================================================
// Display Settings
// ============================================================================

/// Summary fields that can be shown on a card.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum CardField {
    Disease,
    Orphan,
    Category,
    TotalScore,
}

impl CardField {
    /// All fields, in card display order.
    pub const fn all() -> &'static [CardField] {
        &[Self::Disease, Self::Orphan, Self::Category, Self::TotalScore]
    }

    /// Display label for UI.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Disease => "Disease",
            Self::Orphan => "Orphan",
            Self::Category => "Category",
            Self::TotalScore => "Total Score",
        }
    }
}

/// Card grid layout configuration.
///
/// A single parameterized renderer covers every layout; there are no
/// per-width rendering variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Cards per row in the browse grid.
    pub columns_per_row: usize,
    /// Summary fields shown on each card.
    pub visible_fields: BTreeSet<CardField>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            columns_per_row: 1,
            visible_fields: CardField::all().iter().copied().collect(),
        }
    }
}

impl DisplaySettings {
    /// Columns clamped to a sane grid width.
    pub fn effective_columns(&self) -> usize {
        self.columns_per_row.clamp(1, 4)
    }

    pub fn shows(&self, field: CardField) -> bool {
        self.visible_fields.contains(&field)
    }
}
