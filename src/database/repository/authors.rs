use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::Author;
use crate::database::DatabaseError;

pub async fn list_authors(pool: &SqlitePool) -> Result<Vec<Author>, DatabaseError> {
    let authors = sqlx::query_as("SELECT id, name, bio, date_of_birth FROM authors")
        .fetch_all(pool)
        .await?;

    Ok(authors)
}

pub async fn get_author(pool: &SqlitePool, id: Uuid) -> Result<Option<Author>, DatabaseError> {
    let author = sqlx::query_as("SELECT id, name, bio, date_of_birth FROM authors WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(author)
}

pub async fn author_exists(pool: &SqlitePool, id: Uuid) -> Result<bool, DatabaseError> {
    let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM authors WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

pub async fn create_author(pool: &SqlitePool, author: &Author) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO authors (id, name, bio, date_of_birth) VALUES (?, ?, ?, ?)")
        .bind(author.id)
        .bind(&author.name)
        .bind(&author.bio)
        .bind(author.date_of_birth)
        .execute(pool)
        .await?;

    Ok(())
}

/// Full overwrite of all mutable fields. Returns false when no row matched.
pub async fn update_author(pool: &SqlitePool, author: &Author) -> Result<bool, DatabaseError> {
    let result = sqlx::query("UPDATE authors SET name = ?, bio = ?, date_of_birth = ? WHERE id = ?")
        .bind(&author.name)
        .bind(&author.bio)
        .bind(author.date_of_birth)
        .bind(author.id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an author and all of its books in one transaction: children first,
/// then the parent. Returns the number of books removed, or None when the
/// author does not exist (nothing is deleted in that case).
pub async fn delete_author(pool: &SqlitePool, id: Uuid) -> Result<Option<u64>, DatabaseError> {
    let mut tx = pool.begin().await?;

    let books = sqlx::query("DELETE FROM books WHERE author_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let author = sqlx::query("DELETE FROM authors WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if author.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(None);
    }

    tx.commit().await?;
    Ok(Some(books.rows_affected()))
}
