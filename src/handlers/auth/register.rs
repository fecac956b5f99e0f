use axum::extract::State;
use chrono::Utc;
use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use super::TokenResponse;
use crate::api::ApiJson;
use crate::auth;
use crate::database::models::User;
use crate::database::repository::users;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// POST /api/auth/register - create a user account and return a bearer token
pub async fn auth_register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> ApiResult<TokenResponse> {
    validate(&body)?;

    let user = User {
        id: Uuid::new_v4(),
        email: body.email.trim().to_string(),
        password_hash: auth::hash_password(&body.password)?,
        full_name: body.full_name.trim().to_string(),
        created_at: Utc::now(),
    };

    // A taken email surfaces as a unique violation and maps to 400
    users::create_user(&state.pool, &user).await?;

    tracing::info!("Registered user {} ({})", user.id, user.email);

    let token = state.auth.issue(&user)?;
    Ok(ApiResponse::success(TokenResponse::new(token, user)))
}

fn validate(body: &RegisterRequest) -> Result<(), ApiError> {
    let mut field_errors = HashMap::new();

    if !body.email.contains('@') {
        field_errors.insert("email".to_string(), "Invalid email format".to_string());
    }
    if body.password.len() < 8 {
        field_errors.insert("password".to_string(), "Password must be at least 8 characters".to_string());
    }
    if body.full_name.trim().is_empty() {
        field_errors.insert("fullName".to_string(), "This field is required".to_string());
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error("Invalid registration data", Some(field_errors)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, full_name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_registration() {
        assert!(validate(&request("reader@example.com", "longenough", "Avid Reader")).is_ok());
    }

    #[test]
    fn rejects_bad_email_short_password_and_blank_name() {
        let err = validate(&request("not-an-email", "short", "  ")).unwrap_err();
        match err {
            ApiError::ValidationError { field_errors: Some(fields), .. } => {
                assert_eq!(fields.len(), 3);
                assert!(fields.contains_key("email"));
                assert!(fields.contains_key("password"));
                assert!(fields.contains_key("fullName"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
