//! Movies API server: reads settings from the environment, prepares the store, serves HTTP.
//!
//! Run from repo root: `cargo run -p movies-server`

use movies_api::{
    app, ensure_database_exists, ensure_movies_table, AppState, PgMovieStore, Settings,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("movies_api=info,movies_server=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let connect_options = settings.database.connect_options()?;
    ensure_database_exists(&connect_options).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect_with(connect_options)
        .await?;
    ensure_movies_table(&pool).await?;

    let state = AppState::new(Arc::new(PgMovieStore::new(pool)), settings.years);
    let router = app(state, settings.body_limit);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
