//! Movie CRUD handlers: validate, run one operation, map the outcome to a response.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::response::{self, DELETED, UPDATED};
use crate::service::{MovieService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = MovieService::list(state.store.as_ref()).await?;
    Ok(Json(movies))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::path_id(&id_str)?;
    let movie = MovieService::read(state.store.as_ref(), id).await?;
    Ok(Json(movie))
}

pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::body(&body, &state.create_rules)?;
    let movie = fields.into_new().ok_or_else(|| {
        AppError::BadRequest("title, author, release_year and category are required".into())
    })?;
    let id = MovieService::create(state.store.as_ref(), &movie).await?;
    Ok(response::created(id))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let (id, patch) = RequestValidator::id_and_body(&id_str, &body, &state.update_rules)?;
    MovieService::update(state.store.as_ref(), id, &patch).await?;
    Ok(response::message(UPDATED))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::path_id(&id_str)?;
    MovieService::delete(state.store.as_ref(), id).await?;
    Ok(response::message(DELETED))
}
