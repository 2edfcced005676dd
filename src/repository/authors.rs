//! Queries on the `author` table

use sqlx::SqliteExecutor;

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor},
};

pub async fn list<'e, E>(executor: E) -> AppResult<Vec<Author>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Author>("SELECT id, name, nationality FROM author ORDER BY id")
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<Author>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Author>("SELECT id, name, nationality FROM author WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Authors attached to a book
pub async fn list_by_book<'e, E>(executor: E, book_id: i64) -> AppResult<Vec<Author>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query_as::<_, Author>(
        r#"
        SELECT a.id, a.name, a.nationality
        FROM book_author ba
        JOIN author a ON a.id = ba.author_id
        WHERE ba.book_id = ?
        ORDER BY a.id
        "#,
    )
    .bind(book_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

pub async fn create<'e, E>(executor: E, data: &CreateAuthor) -> AppResult<Author>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Author>(
        "INSERT INTO author (name, nationality) VALUES (?, ?) RETURNING id, name, nationality",
    )
    .bind(&data.name)
    .bind(&data.nationality)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

pub async fn save<'e, E>(executor: E, author: &Author) -> AppResult<Author>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query_as::<_, Author>(
        "UPDATE author SET name = ?, nationality = ? WHERE id = ? RETURNING id, name, nationality",
    )
    .bind(&author.name)
    .bind(&author.nationality)
    .bind(author.id)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

pub async fn delete<'e, E>(executor: E, id: i64) -> AppResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM author WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
