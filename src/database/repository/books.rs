use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::models::Book;
use crate::database::{is_foreign_key_violation, DatabaseError};

pub async fn list_books(pool: &SqlitePool) -> Result<Vec<Book>, DatabaseError> {
    let books = sqlx::query_as("SELECT id, title, publish_date, author_id FROM books")
        .fetch_all(pool)
        .await?;

    Ok(books)
}

pub async fn list_books_by_author(pool: &SqlitePool, author_id: Uuid) -> Result<Vec<Book>, DatabaseError> {
    let books = sqlx::query_as("SELECT id, title, publish_date, author_id FROM books WHERE author_id = ?")
        .bind(author_id)
        .fetch_all(pool)
        .await?;

    Ok(books)
}

pub async fn get_book(pool: &SqlitePool, id: Uuid) -> Result<Option<Book>, DatabaseError> {
    let book = sqlx::query_as("SELECT id, title, publish_date, author_id FROM books WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(book)
}

/// Fetch a book only if it belongs to the given author
pub async fn get_book_of_author(
    pool: &SqlitePool,
    author_id: Uuid,
    book_id: Uuid,
) -> Result<Option<Book>, DatabaseError> {
    let book = sqlx::query_as("SELECT id, title, publish_date, author_id FROM books WHERE id = ? AND author_id = ?")
        .bind(book_id)
        .bind(author_id)
        .fetch_optional(pool)
        .await?;

    Ok(book)
}

/// Insert a book. The handlers check the parent author first; the foreign
/// key closes the race where the author vanishes between check and insert.
pub async fn create_book(pool: &SqlitePool, book: &Book) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO books (id, title, publish_date, author_id) VALUES (?, ?, ?, ?)")
        .bind(book.id)
        .bind(&book.title)
        .bind(book.publish_date)
        .bind(book.author_id)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                DatabaseError::ForeignKeyViolation(format!("Author {} not found", book.author_id))
            } else {
                err.into()
            }
        })?;

    Ok(())
}

/// Full overwrite of all mutable fields. Returns false when no row matched.
pub async fn update_book(pool: &SqlitePool, book: &Book) -> Result<bool, DatabaseError> {
    let result = sqlx::query("UPDATE books SET title = ?, publish_date = ?, author_id = ? WHERE id = ?")
        .bind(&book.title)
        .bind(book.publish_date)
        .bind(book.author_id)
        .bind(book.id)
        .execute(pool)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                DatabaseError::ForeignKeyViolation(format!("Author {} not found", book.author_id))
            } else {
                DatabaseError::from(err)
            }
        })?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_book(pool: &SqlitePool, id: Uuid) -> Result<bool, DatabaseError> {
    let result = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a book only if it belongs to the given author
pub async fn delete_book_of_author(pool: &SqlitePool, author_id: Uuid, book_id: Uuid) -> Result<bool, DatabaseError> {
    let result = sqlx::query("DELETE FROM books WHERE id = ? AND author_id = ?")
        .bind(book_id)
        .bind(author_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
