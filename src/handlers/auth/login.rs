use axum::extract::State;
use serde::Deserialize;

use super::TokenResponse;
use crate::api::ApiJson;
use crate::auth;
use crate::database::repository::users;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - validate credentials and return a bearer token.
/// Unknown email and wrong password are indistinguishable to the client.
pub async fn auth_login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> ApiResult<TokenResponse> {
    let user = users::find_user_by_email(&state.pool, body.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !auth::verify_password(&body.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    tracing::info!("User {} logged in", user.id);

    let token = state.auth.issue(&user)?;
    Ok(ApiResponse::success(TokenResponse::new(token, user)))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid email or password")
}
