//! Data model types for the manga catalog.
//!
//! These are plain records: authors, works, and the rows shown in the
//! works listing. Persistence lives in `mangaworld-db`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Identifiers ─────────────────────────────────────────────────────────────

/// Database-assigned author identifier (`auteur.id_auteur`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub i64);

/// Database-assigned work identifier (`oeuvre.id_oeuvre`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(pub i64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Author ──────────────────────────────────────────────────────────────────

/// A stored author. `(first_name, last_name)` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// "First Last", as shown in the author picker of the work form.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Two author records refer to the same row when their ids match,
    /// regardless of whether one of them holds stale names.
    pub fn same_as(&self, other: &Author) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

// ── Work ────────────────────────────────────────────────────────────────────

/// A stored work. `(title, author_id)` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub author_id: AuthorId,
}

/// One row of the works listing: the work plus its author's display name.
///
/// `author_name` is `None` when the author row could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkListing {
    pub work: Work,
    pub author_name: Option<String>,
}

impl WorkListing {
    /// Label used for the author column, falling back to "Unknown".
    pub fn author_label(&self) -> &str {
        self.author_name.as_deref().unwrap_or("Unknown")
    }
}

/// An author together with the number of works it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorListing {
    pub author: Author,
    pub work_count: u64,
}

impl AuthorListing {
    /// Whether the deletion guard would refuse to remove this author.
    pub fn is_referenced(&self) -> bool {
        self.work_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jean() -> Author {
        Author {
            id: AuthorId(1),
            first_name: "Jean".to_string(),
            last_name: "Dupont".to_string(),
        }
    }

    #[test]
    fn display_name_joins_first_and_last() {
        assert_eq!(jean().display_name(), "Jean Dupont");
        assert_eq!(jean().to_string(), "Jean Dupont");
    }

    #[test]
    fn same_as_compares_ids_only() {
        let mut renamed = jean();
        renamed.last_name = "Durand".to_string();
        assert!(jean().same_as(&renamed));
        assert_ne!(jean(), renamed);

        let other = Author {
            id: AuthorId(2),
            ..jean()
        };
        assert!(!jean().same_as(&other));
    }

    #[test]
    fn missing_author_label_is_unknown() {
        let listing = WorkListing {
            work: Work {
                id: WorkId(7),
                title: "Manga A".to_string(),
                author_id: AuthorId(99),
            },
            author_name: None,
        };
        assert_eq!(listing.author_label(), "Unknown");
    }

    #[test]
    fn referenced_when_owning_works() {
        let listing = AuthorListing {
            author: jean(),
            work_count: 0,
        };
        assert!(!listing.is_referenced());
        let listing = AuthorListing {
            work_count: 2,
            ..listing
        };
        assert!(listing.is_referenced());
    }
}
