//! Repository traits for the catalog.
//!
//! The GUI talks to these traits rather than to SQL. `CatalogStore`
//! implements both on top of the free functions in `operations` and
//! `queries`.

use mangaworld_catalog::{
    Author, AuthorDraft, AuthorId, AuthorListing, Work, WorkDraft, WorkId, WorkListing,
};

use crate::operations::{self, OperationError};
use crate::queries;
use crate::store::CatalogStore;

/// Data access for authors.
pub trait AuthorRepository {
    /// All authors, in insertion order.
    fn list_authors(&self) -> Result<Vec<Author>, OperationError>;

    /// All authors with the number of works each one owns.
    fn list_authors_with_counts(&self) -> Result<Vec<AuthorListing>, OperationError>;

    fn get_author(&self, id: AuthorId) -> Result<Option<Author>, OperationError>;

    /// Whether the (first name, last name) pair is taken, ignoring `exclude`.
    fn author_exists(
        &self,
        first_name: &str,
        last_name: &str,
        exclude: Option<AuthorId>,
    ) -> Result<bool, OperationError>;

    fn insert_author(&mut self, draft: &AuthorDraft) -> Result<Author, OperationError>;

    fn update_author(&mut self, id: AuthorId, draft: &AuthorDraft)
    -> Result<Author, OperationError>;

    /// Fails with `AuthorHasWorks` while any work references the author.
    fn delete_author(&mut self, id: AuthorId) -> Result<(), OperationError>;
}

/// Data access for works.
pub trait WorkRepository {
    /// All works with their author's display name, in insertion order.
    fn list_works(&self) -> Result<Vec<WorkListing>, OperationError>;

    fn works_by_author(&self, author_id: AuthorId) -> Result<Vec<Work>, OperationError>;

    fn get_work(&self, id: WorkId) -> Result<Option<Work>, OperationError>;

    /// Whether the (title, author) pair is taken, ignoring `exclude`.
    fn work_exists(
        &self,
        title: &str,
        author_id: AuthorId,
        exclude: Option<WorkId>,
    ) -> Result<bool, OperationError>;

    fn insert_work(&mut self, draft: &WorkDraft) -> Result<Work, OperationError>;

    fn update_work(&mut self, id: WorkId, draft: &WorkDraft) -> Result<Work, OperationError>;

    fn delete_work(&mut self, id: WorkId) -> Result<(), OperationError>;
}

impl AuthorRepository for CatalogStore {
    fn list_authors(&self) -> Result<Vec<Author>, OperationError> {
        queries::list_authors(self.connection())
    }

    fn list_authors_with_counts(&self) -> Result<Vec<AuthorListing>, OperationError> {
        queries::list_authors_with_counts(self.connection())
    }

    fn get_author(&self, id: AuthorId) -> Result<Option<Author>, OperationError> {
        queries::get_author(self.connection(), id)
    }

    fn author_exists(
        &self,
        first_name: &str,
        last_name: &str,
        exclude: Option<AuthorId>,
    ) -> Result<bool, OperationError> {
        operations::author_exists(self.connection(), first_name, last_name, exclude)
    }

    fn insert_author(&mut self, draft: &AuthorDraft) -> Result<Author, OperationError> {
        operations::insert_author(self.connection_mut(), draft)
    }

    fn update_author(
        &mut self,
        id: AuthorId,
        draft: &AuthorDraft,
    ) -> Result<Author, OperationError> {
        operations::update_author(self.connection_mut(), id, draft)
    }

    fn delete_author(&mut self, id: AuthorId) -> Result<(), OperationError> {
        operations::delete_author(self.connection_mut(), id)
    }
}

impl WorkRepository for CatalogStore {
    fn list_works(&self) -> Result<Vec<WorkListing>, OperationError> {
        queries::list_works(self.connection())
    }

    fn works_by_author(&self, author_id: AuthorId) -> Result<Vec<Work>, OperationError> {
        queries::works_by_author(self.connection(), author_id)
    }

    fn get_work(&self, id: WorkId) -> Result<Option<Work>, OperationError> {
        queries::get_work(self.connection(), id)
    }

    fn work_exists(
        &self,
        title: &str,
        author_id: AuthorId,
        exclude: Option<WorkId>,
    ) -> Result<bool, OperationError> {
        operations::work_exists(self.connection(), title, author_id, exclude)
    }

    fn insert_work(&mut self, draft: &WorkDraft) -> Result<Work, OperationError> {
        operations::insert_work(self.connection_mut(), draft)
    }

    fn update_work(&mut self, id: WorkId, draft: &WorkDraft) -> Result<Work, OperationError> {
        operations::update_work(self.connection_mut(), id, draft)
    }

    fn delete_work(&mut self, id: WorkId) -> Result<(), OperationError> {
        operations::delete_work(self.connection_mut(), id)
    }
}
