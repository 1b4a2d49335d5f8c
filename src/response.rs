//! Success bodies for mutating operations.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

pub const CREATED: &str = "created";
pub const UPDATED: &str = "updated";
pub const DELETED: &str = "deleted";

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "updated")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreatedBody {
    #[schema(example = "created")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i64,
}

pub fn created(id: i64) -> (StatusCode, Json<CreatedBody>) {
    (
        StatusCode::CREATED,
        Json(CreatedBody {
            message: CREATED.to_string(),
            id,
        }),
    )
}

pub fn message(text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: text.to_string(),
        }),
    )
}
