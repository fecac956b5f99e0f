use axum::extract::{Path, State};
use uuid::Uuid;

use crate::database::models::Author;
use crate::database::repository::authors;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /api/authors/:author_id - fetch a single author
pub async fn author_get(State(state): State<AppState>, Path(author_id): Path<Uuid>) -> ApiResult<Author> {
    let author = authors::get_author(&state.pool, author_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Author {} not found", author_id)))?;

    Ok(ApiResponse::success(author))
}
