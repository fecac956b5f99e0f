use axum::extract::{Path, State};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ApiJson;
use crate::database::models::Author;
use crate::database::repository::authors;
use crate::error::ApiError;
use crate::handlers::{require_field, require_id_match};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub date_of_birth: NaiveDate,
}

/// PUT /api/authors/:author_id - full replacement of all mutable fields
pub async fn author_update(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
    ApiJson(body): ApiJson<UpdateAuthorRequest>,
) -> ApiResult<()> {
    require_id_match(author_id, body.id)?;
    require_field(&body.name, "name")?;

    let author = Author {
        id: author_id,
        name: body.name.trim().to_string(),
        bio: body.bio,
        date_of_birth: body.date_of_birth,
    };

    if !authors::update_author(&state.pool, &author).await? {
        return Err(ApiError::not_found(format!("Author {} not found", author_id)));
    }

    Ok(ApiResponse::<()>::no_content())
}
