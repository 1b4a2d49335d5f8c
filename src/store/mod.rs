//! Data store gateway: the only path from request handling to persisted movies.

mod memory;
mod postgres;

pub use memory::InMemoryMovieStore;
pub use postgres::{ensure_database_exists, ensure_movies_table, PgMovieStore};

use crate::error::StoreError;
use crate::model::{Movie, MoviePatch, NewMovie};
use async_trait::async_trait;

/// Each method issues exactly one statement against the store.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<Movie>, StoreError>;

    /// Insert and return the store-assigned id.
    async fn insert(&self, movie: &NewMovie) -> Result<i64, StoreError>;

    /// Overwrite the patched columns of row `id`. Returns the number of rows matched.
    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<u64, StoreError>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
