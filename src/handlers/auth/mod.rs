pub mod login;
pub mod register;

pub use login::auth_login;
pub use register::auth_register;

use serde::Serialize;

use crate::auth::TOKEN_TTL_HOURS;
use crate::database::models::User;

/// Body of a successful register/login response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: User,
}

impl TokenResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            expires_in: TOKEN_TTL_HOURS * 3600,
            user,
        }
    }
}
