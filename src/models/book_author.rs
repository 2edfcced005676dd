//! Book-Author junction model (N:M relationship)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Junction row linking a book to one of its authors.
/// The pair is the primary key, so a book lists each author once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookAuthor {
    pub book_id: i64,
    pub author_id: i64,
}
