use axum::extract::State;

use crate::database::models::Author;
use crate::database::repository::authors;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

/// GET /api/authors - list all authors
pub async fn author_list(State(state): State<AppState>) -> ApiResult<Vec<Author>> {
    let authors = authors::list_authors(&state.pool).await?;
    Ok(ApiResponse::success(authors))
}
