//! PostgreSQL implementation of the gateway, plus bootstrap DDL.

use super::MovieStore;
use crate::error::StoreError;
use crate::model::{Category, Movie, MoviePatch, NewMovie};
use crate::sql::{self, bind_all, MOVIES_TABLE};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{ConnectOptions, PgPool, Row};

#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let q = sql::select_all();
        tracing::debug!(sql = %q.sql, "query");
        let rows = bind_all(&q.sql, &q.params).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_movie).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<Movie>, StoreError> {
        let q = sql::select_by_id(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(&q.sql, &q.params).fetch_optional(&self.pool).await?;
        row.as_ref().map(row_to_movie).transpose()
    }

    async fn insert(&self, movie: &NewMovie) -> Result<i64, StoreError> {
        let q = sql::insert(movie);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(&q.sql, &q.params).fetch_one(&self.pool).await?;
        Ok(row.try_get::<i64, _>("id")?)
    }

    async fn update(&self, id: i64, patch: &MoviePatch) -> Result<u64, StoreError> {
        let Some(q) = sql::update(id, patch) else {
            return Ok(0);
        };
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(&q.sql, &q.params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_all(&q.sql, &q.params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn row_to_movie(row: &PgRow) -> Result<Movie, StoreError> {
    let label: String = row.try_get("category")?;
    let category = Category::parse(&label).ok_or(StoreError::Corrupt {
        column: "category",
        value: label,
    })?;
    Ok(Movie {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        release_year: row.try_get("release_year")?,
        category,
    })
}

/// Create the movies table if it does not exist. Category is constrained to the canonical labels.
pub async fn ensure_movies_table(pool: &PgPool) -> Result<(), StoreError> {
    let allowed = Category::labels()
        .iter()
        .map(|l| format!("'{}'", l.replace('\'', "''")))
        .collect::<Vec<_>>()
        .join(", ");
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            release_year INTEGER NOT NULL,
            category TEXT NOT NULL CHECK (category IN ({}))
        )
        "#,
        MOVIES_TABLE, allowed
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::debug!(table = MOVIES_TABLE, "movies table ensured");
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database when missing.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), StoreError> {
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = opts.clone().database("postgres").connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
