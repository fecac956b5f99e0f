use axum::extract::State;

use crate::database::models::Book;
use crate::database::repository::books;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /api/books - list all books
pub async fn book_list(State(state): State<AppState>) -> ApiResult<Vec<Book>> {
    let books = books::list_books(&state.pool).await?;
    Ok(ApiResponse::success(books))
}
