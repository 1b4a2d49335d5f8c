//! Values that can be bound to a PostgreSQL statement.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A statement parameter. Variants match the column types of the movies table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Int(i32),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::BigInt(n)
    }
}

impl From<i32> for BindValue {
    fn from(n: i32) -> Self {
        BindValue::Int(n)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

/// Build a sqlx query for `sql` with every parameter bound in order.
pub fn bind_all<'q>(sql: &'q str, params: &'q [BindValue]) -> Query<'q, Postgres, PgArguments> {
    let mut query = sqlx::query(sql);
    for p in params {
        query = match p {
            BindValue::BigInt(n) => query.bind(*n),
            BindValue::Int(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}
