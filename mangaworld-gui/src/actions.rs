//! Form submission and deletion against the repository traits.
//!
//! Each function returns the message to show the user, so the UI layer only
//! decides how to display it.

use mangaworld_catalog::{AuthorId, WorkId};
use mangaworld_db::{AuthorRepository, OperationError, WorkRepository};

use crate::state::{AuthorForm, WorkForm};

pub const AUTHOR_FIELDS_REQUIRED: &str = "First name and last name are required!";
pub const WORK_FIELDS_REQUIRED: &str = "Title and author are required!";

/// Why a form could not be saved.
#[derive(Debug)]
pub enum SaveFailure {
    /// The input is incomplete; the form should stay open.
    Invalid(&'static str),
    /// The store refused or failed the write.
    Failed(OperationError),
}

impl std::fmt::Display for SaveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "{}", msg),
            Self::Failed(e) => write!(f, "{}", e),
        }
    }
}

/// Insert or update the author described by `form`.
pub fn save_author<R>(repo: &mut R, form: &AuthorForm) -> Result<&'static str, SaveFailure>
where
    R: AuthorRepository + ?Sized,
{
    let draft = form.draft();
    if draft.validate().is_err() {
        return Err(SaveFailure::Invalid(AUTHOR_FIELDS_REQUIRED));
    }

    match form.editing {
        None => repo
            .insert_author(&draft)
            .map(|_| "Author added!")
            .map_err(SaveFailure::Failed),
        Some(id) => repo
            .update_author(id, &draft)
            .map(|_| "Author updated!")
            .map_err(SaveFailure::Failed),
    }
}

/// Insert or update the work described by `form`.
pub fn save_work<R>(repo: &mut R, form: &WorkForm) -> Result<&'static str, SaveFailure>
where
    R: WorkRepository + ?Sized,
{
    let draft = form.draft();
    if draft.validate().is_err() {
        return Err(SaveFailure::Invalid(WORK_FIELDS_REQUIRED));
    }

    match form.editing {
        None => repo
            .insert_work(&draft)
            .map(|_| "Work added!")
            .map_err(SaveFailure::Failed),
        Some(id) => repo
            .update_work(id, &draft)
            .map(|_| "Work updated!")
            .map_err(SaveFailure::Failed),
    }
}

pub fn remove_author<R>(repo: &mut R, id: AuthorId) -> Result<&'static str, OperationError>
where
    R: AuthorRepository + ?Sized,
{
    repo.delete_author(id).map(|_| "Author deleted!")
}

pub fn remove_work<R>(repo: &mut R, id: WorkId) -> Result<&'static str, OperationError>
where
    R: WorkRepository + ?Sized,
{
    repo.delete_work(id).map(|_| "Work deleted!")
}
