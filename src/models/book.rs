//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{author::Author, edition::EditionShort, not_blank};

/// Book row as stored in the `book` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub genre: String,
}

/// Book with its authors and editions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetails {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub authors: Vec<Author>,
    pub editions: Vec<EditionShort>,
}

impl BookDetails {
    pub fn new(book: Book, authors: Vec<Author>, editions: Vec<EditionShort>) -> Self {
        Self {
            id: book.id,
            title: book.title,
            genre: book.genre,
            authors,
            editions,
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub genre: String,
}

/// Update book request.
///
/// A field left out (or sent as `null`) keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub genre: Option<String>,
}

impl UpdateBook {
    /// Apply the supplied fields onto `book`
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(genre) = self.genre {
            book.genre = genre;
        }
    }
}
