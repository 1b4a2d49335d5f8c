//! In-process gateway backed by an ordered map. Ids are never reused.

use super::MovieStore;
use crate::error::StoreError;
use crate::model::{Movie, MoviePatch, NewMovie};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Movie>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryMovieStore {
    table: RwLock<Table>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, StoreError> {
        self.table
            .read()
            .map_err(|_| StoreError::Unavailable("movie table lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, StoreError> {
        self.table
            .write()
            .map_err(|_| StoreError::Unavailable("movie table lock poisoned".into()))
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn insert(&self, movie: &NewMovie) -> Result<i64, StoreError> {
        let mut table = self.write()?;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, movie.clone().into_movie(id));
        Ok(id)
    }

    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<u64, StoreError> {
        let mut table = self.write()?;
        match table.rows.get_mut(&id) {
            Some(movie) => {
                patch.apply(movie);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(self.write()?.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
