//! Tests for settings types and TOML round-tripping.

use catalog_gui::settings::{CardField, DisplaySettings, GeneralSettings, Settings};
use std::collections::BTreeSet;
use std::path::PathBuf;

fn display_with_columns(columns_per_row: usize) -> DisplaySettings {
    DisplaySettings {
        columns_per_row,
        ..DisplaySettings::default()
    }
}

#[test]
fn default_settings_show_every_card_field() {
    let settings = Settings::default();
    assert!(!settings.general.dark_mode);
    assert_eq!(settings.display.columns_per_row, 1);
    for field in CardField::all() {
        assert!(settings.display.shows(*field));
    }
    assert!(settings.recent_catalogs.is_empty());
}

#[test]
fn effective_columns_are_clamped() {
    assert_eq!(display_with_columns(0).effective_columns(), 1);
    assert_eq!(display_with_columns(12).effective_columns(), 4);
    assert_eq!(display_with_columns(3).effective_columns(), 3);
}

#[test]
fn settings_round_trip_through_toml() {
    let visible_fields: BTreeSet<CardField> =
        [CardField::Category, CardField::TotalScore].into_iter().collect();
    let settings = Settings {
        general: GeneralSettings { dark_mode: true },
        display: DisplaySettings {
            columns_per_row: 2,
            visible_fields,
        },
        recent_catalogs: vec![PathBuf::from("/tmp/data.csv")],
    };

    let toml_str = toml::to_string_pretty(&settings).expect("serialize settings");
    let round: Settings = toml::from_str(&toml_str).expect("deserialize settings");

    assert!(round.general.dark_mode);
    assert_eq!(round.display.columns_per_row, 2);
    assert!(!round.display.shows(CardField::Disease));
    assert!(round.display.shows(CardField::Category));
    assert_eq!(round.recent_catalogs, settings.recent_catalogs);
}

#[test]
fn unknown_and_missing_fields_fall_back_to_defaults() {
    // Older settings files may miss sections entirely.
    let round: Settings = toml::from_str("[general]\ndark_mode = true\n").expect("parse");
    assert!(round.general.dark_mode);
    assert_eq!(round.display.columns_per_row, 1);
    for field in CardField::all() {
        assert!(round.display.shows(*field));
    }
}
