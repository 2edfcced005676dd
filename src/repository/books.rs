//! Queries on the `book` table

use sqlx::SqliteExecutor;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

/// List every book
pub async fn list<'e, E>(executor: E) -> AppResult<Vec<Book>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Book>("SELECT id, title, genre FROM book ORDER BY id")
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

/// Get a book by ID
pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<Book>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Book>("SELECT id, title, genre FROM book WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Books written by an author, resolved through the join table
pub async fn list_by_author<'e, E>(executor: E, author_id: i64) -> AppResult<Vec<Book>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Book>(
        r#"
        SELECT b.id, b.title, b.genre
        FROM book_author ba
        JOIN book b ON b.id = ba.book_id
        WHERE ba.author_id = ?
        ORDER BY b.id
        "#,
    )
    .bind(author_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Insert a book
pub async fn create<'e, E>(executor: E, data: &CreateBook) -> AppResult<Book>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Book>(
        "INSERT INTO book (title, genre) VALUES (?, ?) RETURNING id, title, genre",
    )
    .bind(&data.title)
    .bind(&data.genre)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Write every column of `book` back to its row
pub async fn save<'e, E>(executor: E, book: &Book) -> AppResult<Book>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Book>(
        "UPDATE book SET title = ?, genre = ? WHERE id = ? RETURNING id, title, genre",
    )
    .bind(&book.title)
    .bind(&book.genre)
    .bind(book.id)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Delete a book row, returning whether one existed
pub async fn delete<'e, E>(executor: E, id: i64) -> AppResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM book WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
