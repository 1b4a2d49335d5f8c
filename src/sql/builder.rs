//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the movies table.

use super::params::BindValue;
use crate::model::{MoviePatch, NewMovie};

pub const MOVIES_TABLE: &str = "movies";

/// Columns in the order every SELECT returns them.
pub const MOVIE_COLUMNS: [&str; 5] = ["id", "title", "author", "release_year", "category"];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    MOVIE_COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<BindValue>) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v.into());
        n
    }
}

/// SELECT every row, ordered by id.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(),
        quoted(MOVIES_TABLE),
        quoted("id")
    );
    q
}

/// SELECT one row by primary key.
pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(),
        quoted(MOVIES_TABLE),
        quoted("id"),
        n
    );
    q
}

/// INSERT the four writable columns and return the assigned id.
pub fn insert(movie: &NewMovie) -> QueryBuf {
    let mut q = QueryBuf::new();
    let values: [BindValue; 4] = [
        movie.title.as_str().into(),
        movie.author.as_str().into(),
        movie.release_year.into(),
        movie.category.as_str().into(),
    ];
    let mut placeholders = Vec::with_capacity(values.len());
    for v in values {
        placeholders.push(format!("${}", q.push_param(v)));
    }
    let cols = MOVIE_COLUMNS[1..].iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(MOVIES_TABLE),
        cols,
        placeholders.join(", "),
        quoted("id")
    );
    q
}

/// UPDATE only the columns present in `patch`. Returns `None` for an empty patch.
pub fn update(id: i64, patch: &MoviePatch) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(title) = &patch.title {
        sets.push(format!("{} = ${}", quoted("title"), q.push_param(title.as_str())));
    }
    if let Some(author) = &patch.author {
        sets.push(format!("{} = ${}", quoted("author"), q.push_param(author.as_str())));
    }
    if let Some(year) = patch.release_year {
        sets.push(format!("{} = ${}", quoted("release_year"), q.push_param(year)));
    }
    if let Some(category) = patch.category {
        sets.push(format!("{} = ${}", quoted("category"), q.push_param(category.as_str())));
    }
    if sets.is_empty() {
        return None;
    }
    let n = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(MOVIES_TABLE),
        sets.join(", "),
        quoted("id"),
        n
    );
    Some(q)
}

/// DELETE one row by primary key.
pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(MOVIES_TABLE), quoted("id"), n);
    q
}
