//! Browse view: filter controls plus the filtered card grid.
//!
//! All filter mutations are reported as actions and applied by the app
//! through the session's transitions, so reconciliation always runs.

use crate::settings::{CardField, DisplaySettings};
use crate::state::CatalogState;
use crate::theme::{colors, spacing};
use catalog_model::{OrphanChoice, Record, RecordId};
use egui::{RichText, Ui};

/// Action reported by the browse view.
pub enum BrowseAction {
    None,
    /// Open the detail view for a record.
    Select(RecordId),
    SetOrphan(OrphanChoice),
    ToggleCategory(String),
    SelectAllCategories,
    ClearCategories,
    CloseCatalog,
}

/// Browse screen view
pub struct BrowseView;

impl BrowseView {
    /// Render filters and the card grid.
    ///
    /// `settings_changed` is set when a display option was edited so the
    /// app can persist settings.
    pub fn show(
        ui: &mut Ui,
        catalog: &CatalogState,
        display: &mut DisplaySettings,
        settings_changed: &mut bool,
    ) -> BrowseAction {
        let mut action = BrowseAction::None;

        ui.horizontal(|ui| {
            ui.heading(
                catalog
                    .path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("Catalog"),
            );
            ui.label(
                RichText::new(format!("{} candidates", catalog.records.len()))
                    .weak()
                    .small(),
            );
            if ui
                .button(format!("{} Close", egui_phosphor::regular::X))
                .clicked()
            {
                action = BrowseAction::CloseCatalog;
            }
        });
        ui.add_space(spacing::SM);

        if let Some(filter_action) = Self::show_filters(ui, catalog) {
            action = filter_action;
        }
        Self::show_display_options(ui, display, settings_changed);

        ui.add_space(spacing::MD);
        ui.separator();
        ui.add_space(spacing::SM);

        let filtered = catalog.session.filtered(&catalog.records);
        ui.label(RichText::new("Filtered Results").strong().size(16.0));
        ui.add_space(spacing::SM);

        if filtered.is_empty() {
            // Valid terminal display state, not a failure.
            ui.label(
                RichText::new(format!(
                    "{} No results found for the selected filters.",
                    egui_phosphor::regular::INFO
                ))
                .color(ui.visuals().warn_fg_color),
            );
            return action;
        }

        let columns = display.effective_columns();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for chunk in filtered.chunks(columns) {
                ui.columns(columns, |cols| {
                    for (idx, record) in chunk.iter().enumerate() {
                        if let Some(id) = Self::show_card(&mut cols[idx], record, display) {
                            action = BrowseAction::Select(id);
                        }
                    }
                });
                ui.add_space(spacing::SM);
            }
        });

        action
    }

    /// Orphan selector and category multi-select.
    fn show_filters(ui: &mut Ui, catalog: &CatalogState) -> Option<BrowseAction> {
        let mut action = None;
        let filter = catalog.session.filter();

        ui.label(RichText::new("Filters").strong().size(16.0));
        ui.add_space(spacing::XS);

        ui.horizontal(|ui| {
            let mut orphan = filter.orphan;
            egui::ComboBox::from_label("Orphan")
                .selected_text(orphan.display_name())
                .show_ui(ui, |ui| {
                    for choice in OrphanChoice::all() {
                        ui.selectable_value(&mut orphan, *choice, choice.display_name());
                    }
                });
            if orphan != filter.orphan {
                action = Some(BrowseAction::SetOrphan(orphan));
            }
        });

        ui.add_space(spacing::XS);
        ui.horizontal_wrapped(|ui| {
            ui.label("Category:");
            for category in &catalog.category_options {
                let mut selected = filter.categories.contains(category);
                if ui.checkbox(&mut selected, category).changed() {
                    action = Some(BrowseAction::ToggleCategory(category.clone()));
                }
            }
            if ui.small_button("Select all").clicked() {
                action = Some(BrowseAction::SelectAllCategories);
            }
            if ui.small_button("Clear").clicked() {
                action = Some(BrowseAction::ClearCategories);
            }
        });

        action
    }

    fn show_display_options(
        ui: &mut Ui,
        display: &mut DisplaySettings,
        settings_changed: &mut bool,
    ) {
        egui::CollapsingHeader::new("Display")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Cards per row:");
                    if ui
                        .add(egui::Slider::new(&mut display.columns_per_row, 1..=4))
                        .changed()
                    {
                        *settings_changed = true;
                    }
                });
                ui.horizontal_wrapped(|ui| {
                    ui.label("Card fields:");
                    for field in CardField::all() {
                        let mut shown = display.shows(*field);
                        if ui.checkbox(&mut shown, field.display_name()).changed() {
                            if shown {
                                display.visible_fields.insert(*field);
                            } else {
                                display.visible_fields.remove(field);
                            }
                            *settings_changed = true;
                        }
                    }
                });
            });
    }

    /// Render a single candidate card. Returns the record id when the
    /// view-detail action was clicked.
    fn show_card(ui: &mut Ui, record: &Record, display: &DisplaySettings) -> Option<RecordId> {
        let mut selected = None;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .corner_radius(8.0)
            .inner_margin(spacing::MD)
            .show(ui, |ui| {
                ui.heading(&record.drug_name);

                if display.shows(CardField::Disease) {
                    ui.label(
                        RichText::new(format!("Disease: {}", record.disease))
                            .weak()
                            .small(),
                    );
                }
                if display.shows(CardField::Orphan) {
                    ui.label(RichText::new(format!("Orphan: {}", record.orphan)).small());
                }
                if display.shows(CardField::Category) {
                    ui.label(RichText::new(format!("Category: {}", record.category)).small());
                }
                if display.shows(CardField::TotalScore) {
                    ui.label(
                        RichText::new(format!("Total Score: {}", record.total_score))
                            .color(colors::SCORE)
                            .strong()
                            .size(16.0),
                    );
                }

                ui.add_space(spacing::XS);
                if ui
                    .button(format!("{} View More", egui_phosphor::regular::EYE))
                    .clicked()
                {
                    selected = Some(record.id);
                }
            });

        selected
    }
}
