//! Movie operations against the gateway. Each operation issues at most one statement.

use crate::error::AppError;
use crate::model::{Movie, MoviePatch, NewMovie};
use crate::store::MovieStore;

pub const NOT_FOUND: &str = "movie not found";
pub const NOTHING_TO_UPDATE: &str = "no data to update";

pub struct MovieService;

impl MovieService {
    /// Every row, in store order.
    pub async fn list(store: &dyn MovieStore) -> Result<Vec<Movie>, AppError> {
        Ok(store.list().await?)
    }

    /// Fetch one row by id.
    pub async fn read(store: &dyn MovieStore, id: i64) -> Result<Movie, AppError> {
        store
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))
    }

    /// Insert and return the new id.
    pub async fn create(store: &dyn MovieStore, movie: &NewMovie) -> Result<i64, AppError> {
        let id = store.insert(movie).await?;
        tracing::info!(id, "movie created");
        Ok(id)
    }

    /// Apply a sparse patch. An empty patch is rejected without touching the store.
    pub async fn update(
        store: &dyn MovieStore,
        id: i64,
        patch: &MoviePatch,
    ) -> Result<(), AppError> {
        if patch.is_empty() {
            return Err(AppError::BadRequest(NOTHING_TO_UPDATE.into()));
        }
        match store.update(id, patch).await? {
            0 => Err(AppError::NotFound(NOT_FOUND.into())),
            _ => {
                tracing::info!(id, "movie updated");
                Ok(())
            }
        }
    }

    /// Hard delete by id.
    pub async fn delete(store: &dyn MovieStore, id: i64) -> Result<(), AppError> {
        match store.delete(id).await? {
            0 => Err(AppError::NotFound(NOT_FOUND.into())),
            _ => {
                tracing::info!(id, "movie deleted");
                Ok(())
            }
        }
    }
}
