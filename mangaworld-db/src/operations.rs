//! Write operations and uniqueness checks for authors and works.
//!
//! Every mutation runs in its own `IMMEDIATE` transaction: SQLite takes the
//! write lock before the pre-checks run, so a check and the write that
//! depends on it cannot be interleaved with another writer.

use mangaworld_catalog::{Author, AuthorDraft, AuthorId, ValidationError, Work, WorkDraft, WorkId};
use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use thiserror::Error;

use crate::queries::{author_id_exists, count_works_by_author};
use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("An author named '{first_name} {last_name}' already exists")]
    DuplicateAuthor {
        first_name: String,
        last_name: String,
    },
    #[error("A work titled '{title}' already exists for author {author_id}")]
    DuplicateWork { title: String, author_id: AuthorId },
    #[error("Cannot delete author {id}: still referenced by {works} work(s)")]
    AuthorHasWorks { id: AuthorId, works: u64 },
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: &'static str, id: i64 },
}

impl OperationError {
    fn author_not_found(id: AuthorId) -> Self {
        Self::NotFound {
            entity_type: "author",
            id: id.0,
        }
    }

    fn work_not_found(id: WorkId) -> Self {
        Self::NotFound {
            entity_type: "work",
            id: id.0,
        }
    }
}

fn begin(conn: &mut Connection) -> Result<Transaction<'_>, OperationError> {
    Ok(conn.transaction_with_behavior(TransactionBehavior::Immediate)?)
}

// ── Author Operations ───────────────────────────────────────────────────────

/// Whether an author with this (first name, last name) pair exists.
///
/// Input is trimmed and compared without regard to case, matching what the
/// write paths store. `exclude` skips one row, so an update can keep its
/// own values.
pub fn author_exists(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    exclude: Option<AuthorId>,
) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(
             SELECT 1 FROM auteur
             WHERE prenom_auteur = ?1 AND nom_auteur = ?2
               AND (?3 IS NULL OR id_auteur != ?3))",
        params![first_name.trim(), last_name.trim(), exclude.map(|id| id.0)],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Insert a new author. Fails if the name pair is already taken.
pub fn insert_author(conn: &mut Connection, draft: &AuthorDraft) -> Result<Author, OperationError> {
    let draft = AuthorDraft::new(&draft.first_name, &draft.last_name);
    draft.validate()?;

    let tx = begin(conn)?;
    if author_exists(&tx, &draft.first_name, &draft.last_name, None)? {
        log::warn!(
            "Refusing to insert duplicate author '{} {}'",
            draft.first_name,
            draft.last_name
        );
        return Err(OperationError::DuplicateAuthor {
            first_name: draft.first_name,
            last_name: draft.last_name,
        });
    }

    tx.execute(
        "INSERT INTO auteur (prenom_auteur, nom_auteur) VALUES (?1, ?2)",
        params![draft.first_name, draft.last_name],
    )?;
    let id = AuthorId(tx.last_insert_rowid());
    tx.commit()?;

    log::debug!("Inserted author {} '{} {}'", id, draft.first_name, draft.last_name);
    Ok(Author {
        id,
        first_name: draft.first_name,
        last_name: draft.last_name,
    })
}

/// Replace an author's names. Fails if another author already has them.
pub fn update_author(
    conn: &mut Connection,
    id: AuthorId,
    draft: &AuthorDraft,
) -> Result<Author, OperationError> {
    let draft = AuthorDraft::new(&draft.first_name, &draft.last_name);
    draft.validate()?;

    let tx = begin(conn)?;
    if author_exists(&tx, &draft.first_name, &draft.last_name, Some(id))? {
        log::warn!(
            "Refusing to rename author {} to duplicate '{} {}'",
            id,
            draft.first_name,
            draft.last_name
        );
        return Err(OperationError::DuplicateAuthor {
            first_name: draft.first_name,
            last_name: draft.last_name,
        });
    }

    let changed = tx.execute(
        "UPDATE auteur SET prenom_auteur = ?1, nom_auteur = ?2 WHERE id_auteur = ?3",
        params![draft.first_name, draft.last_name, id.0],
    )?;
    if changed == 0 {
        log::warn!("Cannot update author {}: no such row", id);
        return Err(OperationError::author_not_found(id));
    }
    tx.commit()?;

    log::debug!("Updated author {}", id);
    Ok(Author {
        id,
        first_name: draft.first_name,
        last_name: draft.last_name,
    })
}

/// Delete an author that owns no works.
///
/// The reference check and the delete share one transaction; if any work
/// still points at the author, nothing is changed.
pub fn delete_author(conn: &mut Connection, id: AuthorId) -> Result<(), OperationError> {
    let tx = begin(conn)?;

    let works = count_works_by_author(&tx, id)?;
    if works > 0 {
        log::warn!("Cannot delete author {}: {} work(s) reference it", id, works);
        tx.rollback()?;
        return Err(OperationError::AuthorHasWorks { id, works });
    }

    let changed = tx.execute("DELETE FROM auteur WHERE id_auteur = ?1", params![id.0])?;
    if changed == 0 {
        log::warn!("Cannot delete author {}: no such row", id);
        tx.rollback()?;
        return Err(OperationError::author_not_found(id));
    }
    tx.commit()?;

    log::debug!("Deleted author {}", id);
    Ok(())
}

// ── Work Operations ─────────────────────────────────────────────────────────

/// Whether a work with this (title, author) pair exists.
///
/// The title is trimmed and compared without regard to case. `exclude`
/// skips one row, so an update can keep its own values.
pub fn work_exists(
    conn: &Connection,
    title: &str,
    author_id: AuthorId,
    exclude: Option<WorkId>,
) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(
             SELECT 1 FROM oeuvre
             WHERE nom_oeuvre = ?1 AND id_auteur = ?2
               AND (?3 IS NULL OR id_oeuvre != ?3))",
        params![title.trim(), author_id.0, exclude.map(|id| id.0)],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Insert a new work for an existing author.
pub fn insert_work(conn: &mut Connection, draft: &WorkDraft) -> Result<Work, OperationError> {
    let draft = WorkDraft::new(&draft.title, draft.author_id);
    draft.validate()?;
    let author_id = draft.require_author()?;

    let tx = begin(conn)?;
    if !author_id_exists(&tx, author_id)? {
        log::warn!("Cannot insert work '{}': author {} does not exist", draft.title, author_id);
        return Err(OperationError::author_not_found(author_id));
    }
    if work_exists(&tx, &draft.title, author_id, None)? {
        log::warn!(
            "Refusing to insert duplicate work '{}' for author {}",
            draft.title,
            author_id
        );
        return Err(OperationError::DuplicateWork {
            title: draft.title,
            author_id,
        });
    }

    tx.execute(
        "INSERT INTO oeuvre (nom_oeuvre, id_auteur) VALUES (?1, ?2)",
        params![draft.title, author_id.0],
    )?;
    let id = WorkId(tx.last_insert_rowid());
    tx.commit()?;

    log::debug!("Inserted work {} '{}' (author {})", id, draft.title, author_id);
    Ok(Work {
        id,
        title: draft.title,
        author_id,
    })
}

/// Replace a work's title and author.
pub fn update_work(
    conn: &mut Connection,
    id: WorkId,
    draft: &WorkDraft,
) -> Result<Work, OperationError> {
    let draft = WorkDraft::new(&draft.title, draft.author_id);
    draft.validate()?;
    let author_id = draft.require_author()?;

    let tx = begin(conn)?;
    if !author_id_exists(&tx, author_id)? {
        log::warn!("Cannot update work {}: author {} does not exist", id, author_id);
        return Err(OperationError::author_not_found(author_id));
    }
    if work_exists(&tx, &draft.title, author_id, Some(id))? {
        log::warn!(
            "Refusing to update work {} to duplicate '{}' for author {}",
            id,
            draft.title,
            author_id
        );
        return Err(OperationError::DuplicateWork {
            title: draft.title,
            author_id,
        });
    }

    let changed = tx.execute(
        "UPDATE oeuvre SET nom_oeuvre = ?1, id_auteur = ?2 WHERE id_oeuvre = ?3",
        params![draft.title, author_id.0, id.0],
    )?;
    if changed == 0 {
        log::warn!("Cannot update work {}: no such row", id);
        return Err(OperationError::work_not_found(id));
    }
    tx.commit()?;

    log::debug!("Updated work {}", id);
    Ok(Work {
        id,
        title: draft.title,
        author_id,
    })
}

/// Delete a work.
pub fn delete_work(conn: &mut Connection, id: WorkId) -> Result<(), OperationError> {
    let tx = begin(conn)?;
    let changed = tx.execute("DELETE FROM oeuvre WHERE id_oeuvre = ?1", params![id.0])?;
    if changed == 0 {
        log::warn!("Cannot delete work {}: no such row", id);
        tx.rollback()?;
        return Err(OperationError::work_not_found(id));
    }
    tx.commit()?;

    log::debug!("Deleted work {}", id);
    Ok(())
}
