//! Queries on the `book_author` join table

use sqlx::SqliteExecutor;

use crate::{error::AppResult, models::book_author::BookAuthor};

/// Join rows of a book
pub async fn list_by_book<'e, E>(executor: E, book_id: i64) -> AppResult<Vec<BookAuthor>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, BookAuthor>(
        "SELECT book_id, author_id FROM book_author WHERE book_id = ? ORDER BY author_id",
    )
    .bind(book_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Link an author to a book. Linking an existing pair is a no-op;
/// returns whether a row was added.
pub async fn attach<'e, E>(executor: E, link: BookAuthor) -> AppResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO book_author (book_id, author_id) VALUES (?, ?) ON CONFLICT (book_id, author_id) DO NOTHING",
    )
    .bind(link.book_id)
    .bind(link.author_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Unlink an author from a book; returns whether the pair existed
pub async fn detach<'e, E>(executor: E, link: BookAuthor) -> AppResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM book_author WHERE book_id = ? AND author_id = ?")
        .bind(link.book_id)
        .bind(link.author_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Drop every author link of a book
pub async fn detach_book<'e, E>(executor: E, book_id: i64) -> AppResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM book_author WHERE book_id = ?")
        .bind(book_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Drop every book link of an author
pub async fn detach_author<'e, E>(executor: E, author_id: i64) -> AppResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM book_author WHERE author_id = ?")
        .bind(author_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
