//! SQLite schema creation.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Could not create database directory {path}: {source}")]
    CreateDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
///
/// Missing parent directories are created.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| SchemaError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;

    log::info!("Opened catalog database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- Authors. Names compare case-insensitively, so uniqueness does too.
CREATE TABLE IF NOT EXISTS auteur (
    id_auteur INTEGER PRIMARY KEY AUTOINCREMENT,
    prenom_auteur TEXT NOT NULL COLLATE NOCASE,
    nom_auteur TEXT NOT NULL COLLATE NOCASE
);

-- Works, each owned by exactly one author
CREATE TABLE IF NOT EXISTS oeuvre (
    id_oeuvre INTEGER PRIMARY KEY AUTOINCREMENT,
    nom_oeuvre TEXT NOT NULL COLLATE NOCASE,
    id_auteur INTEGER NOT NULL REFERENCES auteur(id_auteur)
);
CREATE INDEX IF NOT EXISTS idx_oeuvre_auteur ON oeuvre(id_auteur);
"#;
