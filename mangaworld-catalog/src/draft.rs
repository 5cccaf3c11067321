//! Form input for creating and updating catalog entries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AuthorId;

/// Reasons a draft is rejected before it reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// A work draft has no author selected
    #[error("an author must be selected")]
    MissingAuthor,
}

/// Input for inserting or updating an author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDraft {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorDraft {
    /// Build a draft, trimming surrounding whitespace from both names.
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("first name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::EmptyField("last name"));
        }
        Ok(())
    }
}

/// Input for inserting or updating a work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDraft {
    pub title: String,
    pub author_id: Option<AuthorId>,
}

impl WorkDraft {
    /// Build a draft, trimming surrounding whitespace from the title.
    pub fn new(title: &str, author_id: Option<AuthorId>) -> Self {
        Self {
            title: title.trim().to_string(),
            author_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.author_id.is_none() {
            return Err(ValidationError::MissingAuthor);
        }
        Ok(())
    }

    /// The selected author, or `MissingAuthor`.
    pub fn require_author(&self) -> Result<AuthorId, ValidationError> {
        self.author_id.ok_or(ValidationError::MissingAuthor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_draft_trims_input() {
        let d = AuthorDraft::new("  Jean ", "Dupont\t");
        assert_eq!(d.first_name, "Jean");
        assert_eq!(d.last_name, "Dupont");
        assert!(d.validate().is_ok());
    }

    #[test]
    fn author_draft_requires_both_names() {
        assert_eq!(
            AuthorDraft::new("   ", "Dupont").validate(),
            Err(ValidationError::EmptyField("first name"))
        );
        assert_eq!(
            AuthorDraft::new("Jean", "").validate(),
            Err(ValidationError::EmptyField("last name"))
        );
    }

    #[test]
    fn work_draft_requires_title_and_author() {
        assert_eq!(
            WorkDraft::new(" ", Some(AuthorId(1))).validate(),
            Err(ValidationError::EmptyField("title"))
        );
        assert_eq!(
            WorkDraft::new("Manga A", None).validate(),
            Err(ValidationError::MissingAuthor)
        );
        let ok = WorkDraft::new(" Manga A ", Some(AuthorId(1)));
        assert_eq!(ok.title, "Manga A");
        assert_eq!(ok.require_author(), Ok(AuthorId(1)));
    }
}
