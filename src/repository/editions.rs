//! Queries on the `edition` table

use sqlx::SqliteExecutor;

use crate::{
    error::AppResult,
    models::edition::{CreateEdition, Edition, EditionShort},
};

pub async fn list<'e, E>(executor: E) -> AppResult<Vec<EditionShort>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, EditionShort>("SELECT id, isbn FROM edition ORDER BY id")
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<Edition>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Edition>("SELECT id, isbn, book_id FROM edition WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Editions owned by a book, in insertion order
pub async fn list_by_book<'e, E>(executor: E, book_id: i64) -> AppResult<Vec<EditionShort>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, EditionShort>(
        "SELECT id, isbn FROM edition WHERE book_id = ? ORDER BY id",
    )
    .bind(book_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

pub async fn create<'e, E>(executor: E, data: &CreateEdition) -> AppResult<Edition>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Edition>(
        "INSERT INTO edition (isbn, book_id) VALUES (?, ?) RETURNING id, isbn, book_id",
    )
    .bind(&data.isbn)
    .bind(data.book_id)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

pub async fn save<'e, E>(executor: E, edition: &Edition) -> AppResult<Edition>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Edition>(
        "UPDATE edition SET isbn = ?, book_id = ? WHERE id = ? RETURNING id, isbn, book_id",
    )
    .bind(&edition.isbn)
    .bind(edition.book_id)
    .bind(edition.id)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

pub async fn delete<'e, E>(executor: E, id: i64) -> AppResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM edition WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete every edition of a book
pub async fn delete_by_book<'e, E>(executor: E, book_id: i64) -> AppResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM edition WHERE book_id = ?")
        .bind(book_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
