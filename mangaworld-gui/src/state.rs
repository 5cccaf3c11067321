use std::path::PathBuf;

use mangaworld_catalog::{
    Author, AuthorDraft, AuthorId, AuthorListing, Work, WorkDraft, WorkId, WorkListing,
};
use mangaworld_db::{AuthorRepository, OperationError, WorkRepository};

use crate::actions::{self, SaveFailure};
use crate::app::MangaWorldApp;

const NO_DATABASE: &str = "No catalog database is open. Check the database path in Settings.";

// -- Navigation --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Authors,
    Works,
    Settings,
}

impl View {
    /// Views that need an open catalog.
    pub fn needs_store(self) -> bool {
        matches!(self, View::Authors | View::Works)
    }
}

// -- Pop-up messages --

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

// -- Forms --

/// State of the author create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorForm {
    /// `None` when creating a new author.
    pub editing: Option<AuthorId>,
    pub first_name: String,
    pub last_name: String,
    /// Inline validation message.
    pub error: Option<String>,
}

impl AuthorForm {
    pub fn edit(author: &Author) -> Self {
        Self {
            editing: Some(author.id),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            error: None,
        }
    }

    pub fn draft(&self) -> AuthorDraft {
        AuthorDraft::new(&self.first_name, &self.last_name)
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit author"
        } else {
            "New author"
        }
    }
}

/// State of the work create/edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkForm {
    /// `None` when creating a new work.
    pub editing: Option<WorkId>,
    pub title: String,
    pub author_id: Option<AuthorId>,
    /// Inline validation message.
    pub error: Option<String>,
}

impl WorkForm {
    /// Prefill from an existing work, preselecting its current author.
    pub fn edit(work: &Work) -> Self {
        Self {
            editing: Some(work.id),
            title: work.title.clone(),
            author_id: Some(work.author_id),
            error: None,
        }
    }

    pub fn draft(&self) -> WorkDraft {
        WorkDraft::new(&self.title, self.author_id)
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit work"
        } else {
            "New work"
        }
    }
}

/// A delete waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDelete {
    Author { id: AuthorId, label: String },
    Work { id: WorkId, label: String },
}

impl PendingDelete {
    pub fn question(&self) -> &'static str {
        match self {
            PendingDelete::Author { .. } => "Delete this author?",
            PendingDelete::Work { .. } => "Delete this work?",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PendingDelete::Author { label, .. } | PendingDelete::Work { label, .. } => label,
        }
    }
}

// -- Cached table contents --

/// Table rows, refreshed from the store after each mutation.
#[derive(Debug, Default)]
pub struct CatalogView {
    pub authors: Vec<AuthorListing>,
    pub works: Vec<WorkListing>,
}

impl CatalogView {
    pub fn reload<R>(&mut self, repo: &R) -> Result<(), OperationError>
    where
        R: AuthorRepository + WorkRepository,
    {
        self.authors = repo.list_authors_with_counts()?;
        self.works = repo.list_works()?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.authors.clear();
        self.works.clear();
    }
}

// -- Actions --

/// Something the user asked for during a frame. Applied after rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(View),
    Reload,
    OpenAuthorForm(Option<AuthorId>),
    OpenWorkForm(Option<WorkId>),
    SubmitAuthorForm,
    SubmitWorkForm,
    CloseForm,
    RequestDelete(PendingDelete),
    ConfirmDelete,
    CancelDelete,
    DismissNotice,
    SaveDatabasePath(PathBuf),
}

/// Apply one action to the app state.
pub fn handle_action(app: &mut MangaWorldApp, action: UiAction) {
    match action {
        UiAction::Navigate(view) => {
            if view.needs_store() && app.store.is_none() {
                app.notice = Some(Notice::error(NO_DATABASE));
                return;
            }
            app.current_view = view;
            if view.needs_store() {
                app.reload_catalog();
            }
        }

        UiAction::Reload => app.reload_catalog(),

        UiAction::OpenAuthorForm(None) => {
            app.author_form = Some(AuthorForm::default());
        }

        UiAction::OpenAuthorForm(Some(id)) => {
            let Some(store) = app.store.as_ref() else {
                app.notice = Some(Notice::error(NO_DATABASE));
                return;
            };
            match store.get_author(id) {
                Ok(Some(author)) => app.author_form = Some(AuthorForm::edit(&author)),
                Ok(None) => {
                    app.notice = Some(Notice::error(format!("Author {} no longer exists", id)));
                    app.reload_catalog();
                }
                Err(e) => report_failure(app, e),
            }
        }

        UiAction::OpenWorkForm(None) => {
            // The author picker reads from the cached listing
            app.reload_catalog();
            app.work_form = Some(WorkForm::default());
        }

        UiAction::OpenWorkForm(Some(id)) => {
            let Some(store) = app.store.as_ref() else {
                app.notice = Some(Notice::error(NO_DATABASE));
                return;
            };
            match store.get_work(id) {
                Ok(Some(work)) => {
                    app.work_form = Some(WorkForm::edit(&work));
                    app.reload_catalog();
                }
                Ok(None) => {
                    app.notice = Some(Notice::error(format!("Work {} no longer exists", id)));
                    app.reload_catalog();
                }
                Err(e) => report_failure(app, e),
            }
        }

        UiAction::SubmitAuthorForm => {
            // Without a store the form stays open
            let Some(store) = app.store.as_mut() else {
                app.notice = Some(Notice::error(NO_DATABASE));
                return;
            };
            let Some(mut form) = app.author_form.take() else {
                return;
            };
            match actions::save_author(store, &form) {
                Ok(msg) => app.notice = Some(Notice::info(msg)),
                Err(SaveFailure::Invalid(msg)) => {
                    form.error = Some(msg.to_string());
                    app.author_form = Some(form);
                    return;
                }
                Err(SaveFailure::Failed(e)) => {
                    log::warn!("Saving author failed: {}", e);
                    app.notice = Some(Notice::error(e.to_string()));
                }
            }
            app.reload_catalog();
        }

        UiAction::SubmitWorkForm => {
            // Without a store the form stays open
            let Some(store) = app.store.as_mut() else {
                app.notice = Some(Notice::error(NO_DATABASE));
                return;
            };
            let Some(mut form) = app.work_form.take() else {
                return;
            };
            match actions::save_work(store, &form) {
                Ok(msg) => app.notice = Some(Notice::info(msg)),
                Err(SaveFailure::Invalid(msg)) => {
                    form.error = Some(msg.to_string());
                    app.work_form = Some(form);
                    return;
                }
                Err(SaveFailure::Failed(e)) => {
                    log::warn!("Saving work failed: {}", e);
                    app.notice = Some(Notice::error(e.to_string()));
                }
            }
            app.reload_catalog();
        }

        UiAction::CloseForm => {
            app.author_form = None;
            app.work_form = None;
        }

        UiAction::RequestDelete(pending) => app.pending_delete = Some(pending),

        UiAction::CancelDelete => app.pending_delete = None,

        UiAction::ConfirmDelete => {
            let Some(pending) = app.pending_delete.take() else {
                return;
            };
            let Some(store) = app.store.as_mut() else {
                app.notice = Some(Notice::error(NO_DATABASE));
                return;
            };
            let result = match pending {
                PendingDelete::Author { id, .. } => actions::remove_author(store, id),
                PendingDelete::Work { id, .. } => actions::remove_work(store, id),
            };
            match result {
                Ok(msg) => app.notice = Some(Notice::info(msg)),
                Err(e) => {
                    log::warn!("Delete failed: {}", e);
                    app.notice = Some(Notice::error(e.to_string()));
                }
            }
            app.reload_catalog();
        }

        UiAction::DismissNotice => app.notice = None,

        UiAction::SaveDatabasePath(path) => {
            app.settings.database.path = Some(path.clone());
            match crate::settings::save_settings_to(&app.settings_file, &app.settings) {
                Ok(()) => {
                    log::info!("Database path set to {}", path.display());
                    app.notice = Some(Notice::info(
                        "Database path saved. It will be used on next launch.",
                    ));
                }
                Err(e) => {
                    log::warn!("Failed to save settings: {}", e);
                    app.notice = Some(Notice::error(format!("Failed to save settings: {}", e)));
                }
            }
        }
    }
}

fn report_failure(app: &mut MangaWorldApp, e: OperationError) {
    log::warn!("Catalog query failed: {}", e);
    app.notice = Some(Notice::error(e.to_string()));
}
