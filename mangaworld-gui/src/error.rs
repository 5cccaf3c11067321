use thiserror::Error;

/// Errors raised outside of catalog operations: startup and settings I/O.
#[derive(Debug, Error)]
pub enum GuiError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be serialized
    #[error("Settings error: {0}")]
    Settings(#[from] toml::ser::Error),

    /// Could not determine where to store settings
    #[error("Config error: {0}")]
    Config(String),

    /// The catalog database could not be opened
    #[error("Database error: {0}")]
    Database(#[from] mangaworld_db::SchemaError),
}

impl GuiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
