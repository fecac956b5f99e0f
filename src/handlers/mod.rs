pub mod auth;
pub mod authors;
pub mod books;

use sqlx::SqlitePool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::repository::authors as author_repo;
use crate::error::ApiError;

/// Routes touching a book verify the owning author exists first
pub(crate) async fn require_author(pool: &SqlitePool, author_id: Uuid) -> Result<(), ApiError> {
    if author_repo::author_exists(pool, author_id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found(format!("Author {} not found", author_id)))
    }
}

pub(crate) fn require_field(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), "This field is required".to_string());
        return Err(ApiError::validation_error("Missing required fields", Some(field_errors)));
    }
    Ok(())
}

/// A body id, when present, must match the path id
pub(crate) fn require_id_match(path_id: Uuid, body_id: Option<Uuid>) -> Result<(), ApiError> {
    match body_id {
        Some(id) if id != path_id => {
            Err(ApiError::bad_request("Body id does not match the id in the request path"))
        }
        _ => Ok(()),
    }
}
