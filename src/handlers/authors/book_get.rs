use axum::extract::{Path, State};
use uuid::Uuid;

use crate::database::models::Book;
use crate::database::repository::books;
use crate::error::ApiError;
use crate::handlers::require_author;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /api/authors/:author_id/books/:book_id - fetch one of the author's books
pub async fn book_get(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Book> {
    require_author(&state.pool, author_id).await?;

    let book = books::get_book_of_author(&state.pool, author_id, book_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Book {} not found for author {}", book_id, author_id)))?;

    Ok(ApiResponse::success(book))
}
