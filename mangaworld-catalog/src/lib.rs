//! Manga catalog data model types and form validation.
//!
//! This crate defines the records of the catalog (authors and their works)
//! without any database dependencies. `mangaworld-db` persists them and
//! `mangaworld-gui` edits them.

pub mod draft;
pub mod types;

pub use draft::{AuthorDraft, ValidationError, WorkDraft};
pub use types::*;
