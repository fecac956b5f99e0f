use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::AppState;

/// Authenticated user context extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub token_id: Uuid,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            name: claims.name,
            token_id: claims.jti,
        }
    }
}

/// Bearer-token gate for protected routes. Verifies the token on every
/// request and injects the user context; every failure is the same 401.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(ApiError::unauthorized)?;

    let claims = state
        .auth
        .verify(&token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
