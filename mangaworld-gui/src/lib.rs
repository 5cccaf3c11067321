//! MangaWorld GUI
//!
//! Desktop interface for managing the catalog of authors and their works.
//! Widgets queue `UiAction`s while drawing; the app applies them against the
//! `CatalogStore` once the frame is laid out.

pub mod actions;
pub mod app;
pub mod error;
pub mod settings;
pub mod state;
pub mod views;
pub mod widgets;

pub use app::MangaWorldApp;
pub use error::GuiError;
