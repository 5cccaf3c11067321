//! SQLite persistence layer for the manga catalog.
//!
//! Provides schema creation, the owned `CatalogStore` handle, write
//! operations with uniqueness and reference checks, read queries, and the
//! repository traits the GUI works against.

pub mod operations;
pub mod queries;
pub mod repository;
pub mod schema;
pub mod store;

pub use operations::{
    author_exists, delete_author, delete_work, insert_author, insert_work, update_author,
    update_work, work_exists, OperationError,
};
pub use queries::{
    author_id_exists, count_works_by_author, get_author, get_work, list_authors,
    list_authors_with_counts, list_works, works_by_author,
};
pub use repository::{AuthorRepository, WorkRepository};
pub use schema::{open_database, open_memory, SchemaError};
pub use store::CatalogStore;
