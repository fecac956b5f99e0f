use sqlx::SqlitePool;

use crate::database::models::User;
use crate::database::{is_unique_constraint_violation, DatabaseError};

/// Insert a new user. A taken email surfaces as `UniqueViolation`.
pub async fn create_user(pool: &SqlitePool, user: &User) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO users (id, email, password_hash, full_name, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.created_at)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_unique_constraint_violation(&err) {
                DatabaseError::UniqueViolation("Email already registered".to_string())
            } else {
                err.into()
            }
        })?;

    Ok(())
}

pub async fn find_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as("SELECT id, email, password_hash, full_name, created_at FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "$2b$12$fakedhashfortestingonly".to_string(),
            full_name: "Test Reader".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_unique_violation() {
        let pool = test_pool().await;

        create_user(&pool, &user("dup@example.com")).await.unwrap();
        let err = create_user(&pool, &user("dup@example.com")).await.unwrap_err();

        assert!(matches!(err, DatabaseError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn find_by_email_round_trip() {
        let pool = test_pool().await;
        let created = user("reader@example.com");
        create_user(&pool, &created).await.unwrap();

        let found = find_user_by_email(&pool, "reader@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.full_name, created.full_name);

        assert!(find_user_by_email(&pool, "nobody@example.com").await.unwrap().is_none());
    }
}
