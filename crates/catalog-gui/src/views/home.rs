//! Home screen view
//!
//! Catalog file selection with a short explanation of how the candidate
//! list was assembled.

use crate::state::AppState;
use crate::theme::spacing;
use egui::{RichText, Ui};
use std::path::PathBuf;

/// Action reported by the home screen.
pub enum HomeAction {
    None,
    /// Open the native file picker.
    PickFile,
    /// Load a specific catalog file (from the recent list).
    Load(PathBuf),
}

/// Home screen view
pub struct HomeView;

impl HomeView {
    /// Render the home screen.
    pub fn show(ui: &mut Ui, state: &AppState) -> HomeAction {
        let mut action = HomeAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL);

            ui.heading(RichText::new("Drug Candidate Catalog").size(32.0));
            ui.add_space(spacing::SM);
            ui.label(
                RichText::new("Browse and filter potential drug candidates for 5052B")
                    .weak()
                    .size(14.0),
            );

            ui.add_space(spacing::XL);

            ui.label(RichText::new("How This Was Made").strong().size(16.0));
            ui.add_space(spacing::SM);
            ui.label(
                "Candidates were gathered through three routes: off-label drugs with \
                 high patient-reported success rates (StuffThatWorks), drug-supplement \
                 combinations with plausible synergy, and emerging targets from novel \
                 pathway exploration. Each entry carries a total score plus optional \
                 long-form notes and supporting studies.",
            );

            ui.add_space(spacing::XL);
            ui.separator();
            ui.add_space(spacing::MD);

            if ui
                .button(format!(
                    "{} Open Catalog...",
                    egui_phosphor::regular::FOLDER_OPEN
                ))
                .clicked()
            {
                action = HomeAction::PickFile;
            }
            ui.add_space(spacing::XS);
            ui.label(
                RichText::new(format!(
                    "CSV with columns: {}",
                    catalog_ingest::REQUIRED_COLUMNS.join(", ")
                ))
                .weak()
                .small(),
            );

            // Recent catalogs
            if !state.settings.recent_catalogs.is_empty() {
                ui.add_space(spacing::XL);
                ui.label(
                    RichText::new(format!(
                        "{} Recent Catalogs",
                        egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE
                    ))
                    .strong(),
                );
                ui.add_space(spacing::SM);

                for path in &state.settings.recent_catalogs {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str())
                        && ui
                            .button(format!("{} {}", egui_phosphor::regular::FILE_CSV, name))
                            .clicked()
                    {
                        action = HomeAction::Load(path.clone());
                    }
                }
            }
        });

        action
    }
}
