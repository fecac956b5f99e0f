use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use crate::database::repository::books;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookResponse {
    pub id: Uuid,
}

/// DELETE /api/books/:book_id
pub async fn book_delete(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
) -> ApiResult<DeleteBookResponse> {
    if !books::delete_book(&state.pool, book_id).await? {
        return Err(ApiError::not_found(format!("Book {} not found", book_id)));
    }

    Ok(ApiResponse::success(DeleteBookResponse { id: book_id }))
}
