use axum::extract::{Path, State};
use uuid::Uuid;

use crate::database::models::Book;
use crate::database::repository::books;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /api/books/:book_id - fetch a single book
pub async fn book_get(State(state): State<AppState>, Path(book_id): Path<Uuid>) -> ApiResult<Book> {
    let book = books::get_book(&state.pool, book_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Book {} not found", book_id)))?;

    Ok(ApiResponse::success(book))
}
