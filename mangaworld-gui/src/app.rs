use std::path::PathBuf;

use mangaworld_db::CatalogStore;

use crate::settings::{AppSettings, DbPathSource};
use crate::state::{
    AuthorForm, CatalogView, Notice, PendingDelete, UiAction, View, WorkForm, handle_action,
};
use crate::views;
use crate::widgets;

/// Main application state.
pub struct MangaWorldApp {
    /// The catalog. `None` when the database failed to open at startup.
    pub store: Option<CatalogStore>,

    /// Why the store could not be opened, shown as a banner.
    pub startup_error: Option<String>,

    /// Database file in use and where that choice came from.
    pub db_path: PathBuf,
    pub db_path_source: DbPathSource,

    /// Persisted settings and the file they are saved to.
    pub settings: AppSettings,
    pub settings_file: PathBuf,

    /// Text buffer for the database path field of the Settings view.
    pub db_path_input: String,

    /// Current sidebar navigation selection.
    pub current_view: View,

    /// Table rows for the Authors and Works screens.
    pub catalog: CatalogView,

    pub author_form: Option<AuthorForm>,
    pub work_form: Option<WorkForm>,
    pub pending_delete: Option<PendingDelete>,
    pub notice: Option<Notice>,

    /// Actions queued by widgets during the current frame.
    pub actions: Vec<UiAction>,
}

impl MangaWorldApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        store: Result<CatalogStore, String>,
        settings: AppSettings,
        settings_file: PathBuf,
        db_path: PathBuf,
        db_path_source: DbPathSource,
    ) -> Self {
        Self::with_store(store, settings, settings_file, db_path, db_path_source)
    }

    /// Build the app state without an eframe context.
    pub fn with_store(
        store: Result<CatalogStore, String>,
        settings: AppSettings,
        settings_file: PathBuf,
        db_path: PathBuf,
        db_path_source: DbPathSource,
    ) -> Self {
        let (store, startup_error) = match store {
            Ok(s) => (Some(s), None),
            Err(e) => (None, Some(e)),
        };
        let mut app = Self {
            store,
            startup_error,
            db_path_input: db_path.display().to_string(),
            db_path,
            db_path_source,
            settings,
            settings_file,
            current_view: View::Home,
            catalog: CatalogView::default(),
            author_form: None,
            work_form: None,
            pending_delete: None,
            notice: None,
            actions: Vec::new(),
        };
        app.reload_catalog();
        app
    }

    /// Re-read both tables from the store.
    pub fn reload_catalog(&mut self) {
        let Some(store) = self.store.as_ref() else {
            self.catalog.clear();
            return;
        };
        if let Err(e) = self.catalog.reload(store) {
            log::warn!("Failed to load catalog: {}", e);
            self.notice = Some(Notice::error(e.to_string()));
        }
    }

    /// Whether a dialog is open, blocking the rest of the window.
    pub fn modal_open(&self) -> bool {
        self.author_form.is_some()
            || self.work_form.is_some()
            || self.pending_delete.is_some()
            || self.notice.is_some()
    }

    /// Apply all actions queued this frame.
    pub fn process_actions(&mut self) {
        let actions = std::mem::take(&mut self.actions);
        for action in actions {
            handle_action(self, action);
        }
    }
}

impl eframe::App for MangaWorldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let modal_open = self.modal_open();
        let has_store = self.store.is_some();

        // Sidebar
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(140.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("MangaWorld");
                ui.separator();
                ui.add_space(4.0);

                ui.add_enabled_ui(!modal_open, |ui| {
                    for (view, label) in [
                        (View::Home, "Home"),
                        (View::Authors, "Authors"),
                        (View::Works, "Works"),
                        (View::Settings, "Settings"),
                    ] {
                        let enabled = has_store || !view.needs_store();
                        let selected = self.current_view == view;
                        if ui
                            .add_enabled(enabled, egui::SelectableLabel::new(selected, label))
                            .clicked()
                        {
                            self.actions.push(UiAction::Navigate(view));
                        }
                    }
                });
            });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.startup_error {
                widgets::dialogs::error_banner(ui, &self.db_path, err);
                ui.add_space(8.0);
            }

            ui.add_enabled_ui(!modal_open, |ui| match self.current_view {
                View::Home => views::home::show(ui, self),
                View::Authors => views::authors::show(ui, self),
                View::Works => views::works::show(ui, self),
                View::Settings => views::settings::show(ui, self),
            });
        });

        // Dialogs
        if let Some(form) = self.author_form.as_mut() {
            widgets::author_form::show(ctx, form, &mut self.actions);
        }
        if let Some(form) = self.work_form.as_mut() {
            widgets::work_form::show(ctx, form, &self.catalog.authors, &mut self.actions);
        }
        if let Some(pending) = &self.pending_delete {
            widgets::dialogs::confirm_delete(ctx, pending, &mut self.actions);
        }
        if let Some(notice) = &self.notice {
            widgets::dialogs::notice(ctx, notice, &mut self.actions);
        }

        self.process_actions();
    }
}
