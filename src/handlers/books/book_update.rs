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
    pub author_id: Uuid,
}

/// PUT /api/books/:book_id - full replacement of all mutable fields,
/// including reassignment to another (existing) author
pub async fn book_update(
    State(state): State<AppState>,
    Path(book_id): Path<Uuid>,
    ApiJson(body): ApiJson<UpdateBookRequest>,
) -> ApiResult<()> {
    require_id_match(book_id, body.id)?;
    require_field(&body.title, "title")?;
    require_author(&state.pool, body.author_id).await?;

    let book = Book {
        id: book_id,
        title: body.title.trim().to_string(),
        publish_date: body.publish_date,
        author_id: body.author_id,
    };

    if !books::update_book(&state.pool, &book).await? {
        return Err(ApiError::not_found(format!("Book {} not found", book_id)));
    }

    Ok(ApiResponse::<()>::no_content())
}
