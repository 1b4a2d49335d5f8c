//! Movies API: CRUD REST backend over a single movies table.

pub mod aliases;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Settings, YearLimits};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Category, Movie, MoviePatch, NewMovie};
pub use routes::{app, common_routes, docs_routes, movie_routes};
pub use service::{MovieService, RequestValidator, RuleSet};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_movies_table, InMemoryMovieStore, MovieStore, PgMovieStore,
};
