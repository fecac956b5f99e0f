use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ApiJson;
use crate::database::models::Book;
use crate::database::repository::books;
use crate::error::ApiError;
use crate::handlers::{require_author, require_field, require_id_match};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub publish_date: NaiveDate,
}

/// PUT /api/authors/:author_id/books/:book_id - full replacement; the book
/// must already belong to the path author
pub async fn book_update(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
    ApiJson(body): ApiJson<UpdateBookRequest>,
) -> ApiResult<()> {
    require_id_match(book_id, body.id)?;
    require_author(&state.pool, author_id).await?;
    require_field(&body.title, "title")?;

    // Ownership check: a book id under another author is not found here
    if books::get_book_of_author(&state.pool, author_id, book_id).await?.is_none() {
        return Err(ApiError::not_found(format!(
            "Book {} not found for author {}",
            book_id, author_id
        )));
    }

    let book = Book {
        id: book_id,
        title: body.title.trim().to_string(),
        publish_date: body.publish_date,
        author_id,
    };

    if !books::update_book(&state.pool, &book).await? {
        return Err(ApiError::not_found(format!("Book {} not found", book_id)));
    }

    Ok(ApiResponse::<()>::no_content())
}
