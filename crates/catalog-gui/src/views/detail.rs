//! Detail view: one record's summary plus its long-form content.

use crate::theme::{colors, spacing};
use catalog_model::Record;
use egui::{RichText, Ui};

/// Detail screen view
pub struct DetailView;

impl DetailView {
    /// Render the detail view. Returns `true` when back navigation was
    /// requested.
    pub fn show(ui: &mut Ui, record: &Record) -> bool {
        let mut back = false;

        if ui
            .button(format!(
                "{} Back to list",
                egui_phosphor::regular::ARROW_LEFT
            ))
            .clicked()
        {
            back = true;
        }
        ui.add_space(spacing::MD);

        ui.heading(RichText::new(&record.drug_name).size(28.0));
        ui.label(RichText::new(format!("Disease: {}", record.disease)).weak());
        ui.horizontal(|ui| {
            ui.label(format!("Orphan: {}", record.orphan));
            ui.label(format!("Category: {}", record.category));
        });
        ui.label(
            RichText::new(format!("Total Score: {}", record.total_score))
                .color(colors::SCORE)
                .strong()
                .size(18.0),
        );

        ui.add_space(spacing::MD);
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(spacing::SM);
            ui.label(RichText::new("1-Pager").strong().size(16.0));
            ui.add_space(spacing::XS);
            // Placeholder text when the source had no content; never blank.
            ui.label(record.one_pager_text());

            ui.add_space(spacing::MD);
            ui.label(RichText::new("Studies").strong().size(16.0));
            ui.add_space(spacing::XS);
            ui.label(record.studies_text());
        });

        back
    }
}
