use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::database::repository::authors;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAuthorResponse {
    pub id: Uuid,
    /// Books removed along with the author
    pub books_deleted: u64,
}

/// DELETE /api/authors/:author_id - delete the author and all owned books
pub async fn author_delete(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> ApiResult<DeleteAuthorResponse> {
    let books_deleted = authors::delete_author(&state.pool, author_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Author {} not found", author_id)))?;

    tracing::info!("Deleted author {} and {} book(s)", author_id, books_deleted);

    Ok(ApiResponse::success(DeleteAuthorResponse {
        id: author_id,
        books_deleted,
    }))
}
