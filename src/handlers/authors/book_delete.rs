use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::database::repository::books;
use crate::error::ApiError;
use crate::handlers::require_author;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookResponse {
    pub id: Uuid,
}

/// DELETE /api/authors/:author_id/books/:book_id
pub async fn book_delete(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<DeleteBookResponse> {
    require_author(&state.pool, author_id).await?;

    if !books::delete_book_of_author(&state.pool, author_id, book_id).await? {
        return Err(ApiError::not_found(format!(
            "Book {} not found for author {}",
            book_id, author_id
        )));
    }

    Ok(ApiResponse::success(DeleteBookResponse { id: book_id }))
}
