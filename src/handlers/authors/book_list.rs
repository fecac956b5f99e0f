use axum::extract::{Path, State};
use uuid::Uuid;

use crate::database::models::Book;
use crate::database::repository::books;
use crate::handlers::require_author;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /api/authors/:author_id/books - list the author's books
pub async fn book_list(State(state): State<AppState>, Path(author_id): Path<Uuid>) -> ApiResult<Vec<Book>> {
    require_author(&state.pool, author_id).await?;

    let books = books::list_books_by_author(&state.pool, author_id).await?;
    Ok(ApiResponse::success(books))
}
