//! Read queries for the catalog database.
//!
//! Provides full listings, lookup by id, and reference counts.

use mangaworld_catalog::{Author, AuthorId, AuthorListing, Work, WorkId, WorkListing};
use rusqlite::{params, Connection, OptionalExtension};

use crate::operations::OperationError;

// ── Author Queries ──────────────────────────────────────────────────────────

/// List all authors, in insertion order.
pub fn list_authors(conn: &Connection) -> Result<Vec<Author>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id_auteur, prenom_auteur, nom_auteur
         FROM auteur ORDER BY id_auteur",
    )?;
    let rows = stmt.query_map([], row_to_author)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List all authors along with how many works each one owns.
pub fn list_authors_with_counts(conn: &Connection) -> Result<Vec<AuthorListing>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT a.id_auteur, a.prenom_auteur, a.nom_auteur, COUNT(o.id_oeuvre)
         FROM auteur a LEFT JOIN oeuvre o ON o.id_auteur = a.id_auteur
         GROUP BY a.id_auteur
         ORDER BY a.id_auteur",
    )?;
    let rows = stmt.query_map([], |row| {
        let count: i64 = row.get(3)?;
        Ok(AuthorListing {
            author: row_to_author(row)?,
            work_count: count.max(0) as u64,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find an author by id.
pub fn get_author(conn: &Connection, id: AuthorId) -> Result<Option<Author>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id_auteur, prenom_auteur, nom_auteur
         FROM auteur WHERE id_auteur = ?1",
    )?;
    let author = stmt.query_row(params![id.0], row_to_author).optional()?;
    Ok(author)
}

/// Whether an author row with this id exists.
pub fn author_id_exists(conn: &Connection, id: AuthorId) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM auteur WHERE id_auteur = ?1)",
        params![id.0],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Count the works that reference an author.
pub fn count_works_by_author(conn: &Connection, id: AuthorId) -> Result<u64, OperationError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM oeuvre WHERE id_auteur = ?1",
        params![id.0],
        |row| row.get(0),
    )?;
    Ok(count.max(0) as u64)
}

// ── Work Queries ────────────────────────────────────────────────────────────

/// List all works with their author's display name, in insertion order.
///
/// Uses a left join so a work whose author cannot be resolved still shows up.
pub fn list_works(conn: &Connection) -> Result<Vec<WorkListing>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT o.id_oeuvre, o.nom_oeuvre, o.id_auteur,
                a.prenom_auteur || ' ' || a.nom_auteur
         FROM oeuvre o LEFT JOIN auteur a ON o.id_auteur = a.id_auteur
         ORDER BY o.id_oeuvre",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(WorkListing {
            work: row_to_work(row)?,
            author_name: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List the works owned by one author.
pub fn works_by_author(conn: &Connection, author_id: AuthorId) -> Result<Vec<Work>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id_oeuvre, nom_oeuvre, id_auteur
         FROM oeuvre WHERE id_auteur = ?1 ORDER BY id_oeuvre",
    )?;
    let rows = stmt.query_map(params![author_id.0], row_to_work)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a work by id.
pub fn get_work(conn: &Connection, id: WorkId) -> Result<Option<Work>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id_oeuvre, nom_oeuvre, id_auteur
         FROM oeuvre WHERE id_oeuvre = ?1",
    )?;
    let work = stmt.query_row(params![id.0], row_to_work).optional()?;
    Ok(work)
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

fn row_to_author(row: &rusqlite::Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: AuthorId(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
    })
}

fn row_to_work(row: &rusqlite::Row<'_>) -> rusqlite::Result<Work> {
    Ok(Work {
        id: WorkId(row.get(0)?),
        title: row.get(1)?,
        author_id: AuthorId(row.get(2)?),
    })
}
