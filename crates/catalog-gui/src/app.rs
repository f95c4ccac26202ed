//! Main application struct and eframe::App implementation

use crate::settings::{load_settings, save_settings};
use crate::state::{AppState, CatalogState};
use crate::views::{BrowseAction, BrowseView, DetailView, HomeAction, HomeView};
use catalog_model::ViewState;
use eframe::egui;
use egui::RichText;

/// Main application struct
pub struct CatalogApp {
    state: AppState,
}

impl CatalogApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);

        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.state.settings.general.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.handle_shortcuts(ctx);

        let mut settings_changed = false;

        // Top bar: app title and dark mode toggle
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Drug Candidate Catalog").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.state.settings.general.dark_mode {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        self.state.settings.general.dark_mode =
                            !self.state.settings.general.dark_mode;
                        settings_changed = true;
                    }
                });
            });
        });

        // Track view actions; navigation is applied after borrows end
        let mut home_action = HomeAction::None;
        let mut browse_action = BrowseAction::None;
        let mut detail_back = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.state.load_error {
                ui.label(
                    RichText::new(format!(
                        "{} Failed to load catalog: {error}",
                        egui_phosphor::regular::WARNING
                    ))
                    .color(ui.visuals().error_fg_color),
                );
                ui.add_space(crate::theme::spacing::SM);
            }

            match &self.state.catalog {
                None => {
                    home_action = HomeView::show(ui, &self.state);
                }
                Some(catalog) => match catalog.session.view() {
                    ViewState::List => {
                        browse_action = BrowseView::show(
                            ui,
                            catalog,
                            &mut self.state.settings.display,
                            &mut settings_changed,
                        );
                    }
                    ViewState::Detail(_) => {
                        // The session guarantees the id is in the filtered
                        // set, so resolution only misses if the store itself
                        // changed, which cannot happen mid-session.
                        if let Some(record) = catalog.session.selected_record(&catalog.records) {
                            detail_back = DetailView::show(ui, record);
                        }
                    }
                },
            }
        });

        match home_action {
            HomeAction::PickFile => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_file()
                {
                    tracing::info!("Opening catalog: {:?}", path);
                    self.state.load_catalog(&path);
                    settings_changed = true;
                }
            }
            HomeAction::Load(path) => {
                self.state.load_catalog(&path);
                settings_changed = true;
            }
            HomeAction::None => {}
        }

        let mut close_catalog = false;
        if let Some(catalog) = &mut self.state.catalog {
            Self::apply_browse_action(catalog, browse_action, &mut close_catalog);
            if detail_back {
                catalog.session.back();
            }
        }
        if close_catalog {
            self.state.close_catalog();
        }

        if settings_changed
            && let Err(e) = save_settings(&self.state.settings)
        {
            tracing::error!("Failed to save settings: {e:#}");
        }
    }
}

impl CatalogApp {
    /// Route a browse action through the session's transitions.
    fn apply_browse_action(
        catalog: &mut CatalogState,
        action: BrowseAction,
        close_catalog: &mut bool,
    ) {
        let CatalogState {
            records, session, ..
        } = catalog;
        match action {
            BrowseAction::Select(id) => {
                // A stale click is a benign no-op; the session logs it.
                let _ = session.select(records, id);
            }
            BrowseAction::SetOrphan(choice) => session.set_orphan(records, choice),
            BrowseAction::ToggleCategory(category) => {
                session.toggle_category(records, &category);
            }
            BrowseAction::SelectAllCategories => session.select_all_categories(records),
            BrowseAction::ClearCategories => session.clear_categories(records),
            BrowseAction::CloseCatalog => *close_catalog = true,
            BrowseAction::None => {}
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Escape - back from detail to list
        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && let Some(catalog) = &mut self.state.catalog
            && catalog.session.view().is_detail()
        {
            catalog.session.back();
        }
    }
}
