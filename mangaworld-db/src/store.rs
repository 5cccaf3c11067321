//! The owned storage handle.
//!
//! A `CatalogStore` wraps the one SQLite connection the application uses.
//! It is built once at startup and handed to whoever needs the catalog;
//! mutations take `&mut self`, so two units of work can never overlap.

use std::path::Path;

use rusqlite::Connection;

use crate::operations::OperationError;
use crate::schema::{open_database, open_memory, SchemaError};

pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Open (or create) the catalog database file at `path`.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self {
            conn: open_database(path)?,
        })
    }

    /// A fresh in-memory catalog with the full schema.
    pub fn in_memory() -> Result<Self, SchemaError> {
        Ok(Self {
            conn: open_memory()?,
        })
    }

    /// Wrap a connection that already has the schema applied.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Release the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<(), OperationError> {
        self.conn.close().map_err(|(_, e)| {
            log::warn!("Failed to close catalog database: {}", e);
            OperationError::Sqlite(e)
        })
    }
}
