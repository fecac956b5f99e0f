use axum::extract::State;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ApiJson;
use crate::database::models::Book;
use crate::database::repository::books;
use crate::handlers::{require_author, require_field};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub title: String,
    pub publish_date: NaiveDate,
    pub author_id: Uuid,
}

/// POST /api/books - create a book; the referenced author must exist
pub async fn book_create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateBookRequest>,
) -> ApiResult<Book> {
    require_author(&state.pool, body.author_id).await?;
    require_field(&body.title, "title")?;

    let book = Book {
        id: Uuid::new_v4(),
        title: body.title.trim().to_string(),
        publish_date: body.publish_date,
        author_id: body.author_id,
    };

    books::create_book(&state.pool, &book).await?;

    tracing::info!("Created book {} for author {}", book.id, book.author_id);
    Ok(ApiResponse::created(book))
}
