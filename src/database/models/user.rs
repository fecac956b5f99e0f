use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Never exposed on the wire
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}
