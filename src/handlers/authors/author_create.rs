use axum::extract::State;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ApiJson;
use crate::database::models::Author;
use crate::database::repository::authors;
use crate::handlers::require_field;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub date_of_birth: NaiveDate,
}

/// POST /api/authors - create an author, returns 201 with the assigned id
pub async fn author_create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateAuthorRequest>,
) -> ApiResult<Author> {
    require_field(&body.name, "name")?;

    let author = Author {
        id: Uuid::new_v4(),
        name: body.name.trim().to_string(),
        bio: body.bio,
        date_of_birth: body.date_of_birth,
    };

    authors::create_author(&state.pool, &author).await?;

    tracing::info!("Created author {} ({})", author.id, author.name);
    Ok(ApiResponse::created(author))
}
