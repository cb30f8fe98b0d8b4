//! The persistence seam for user records.
//!
//! The service layer never talks to a database directly; it goes through the
//! [`UserStore`] trait. This keeps the service testable (swap in
//! [`InMemoryUserStore`]) and keeps storage concerns — row locking,
//! transactions, connection pooling — entirely on the other side of the seam.

pub mod memory;

pub use memory::InMemoryUserStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::User;

/// Errors the persistence collaborator can surface.
///
/// The in-memory store never fails, but a real adapter (a relational
/// database behind a pool) will, so the seam carries the kind.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The underlying store could not be reached or refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Point lookup and upsert over user rows.
///
/// # Contract
/// - [`find_by_id`](UserStore::find_by_id) returns `None` for an unknown id;
///   absence is not an error at this layer.
/// - [`save`](UserStore::save) inserts when `user.id` is `None`, assigning the
///   next id in an auto-incrementing sequence starting at 1, and otherwise
///   replaces the row with that id. The returned `User` always carries an
///   assigned id.
///
/// Implementations must be shareable across tasks (`Send + Sync`); the
/// service holds one instance for its whole lifetime.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, StoreError>;

    async fn save(&self, user: User) -> Result<User, StoreError>;
}

/// A shared handle to a store is itself a store. Lets a caller keep a handle
/// to the same rows a service was constructed over.
#[async_trait]
impl<S: UserStore + ?Sized> UserStore for std::sync::Arc<S> {
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        (**self).save(user).await
    }
}
