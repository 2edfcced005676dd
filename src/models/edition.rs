//! Edition model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{book::Book, not_blank};

/// Edition row as stored in the `edition` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Edition {
    pub id: i64,
    pub isbn: String,
    /// Owning book, never null
    pub book_id: i64,
}

/// Edition as listed on its own or under a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EditionShort {
    pub id: i64,
    pub isbn: String,
}

impl From<Edition> for EditionShort {
    fn from(edition: Edition) -> Self {
        Self {
            id: edition.id,
            isbn: edition.isbn,
        }
    }
}

/// Edition with its owning book
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditionDetails {
    pub id: i64,
    pub isbn: String,
    pub book: Book,
}

impl EditionDetails {
    pub fn new(edition: Edition, book: Book) -> Self {
        Self {
            id: edition.id,
            isbn: edition.isbn,
            book,
        }
    }
}

/// Create edition request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEdition {
    #[validate(custom(function = "not_blank"))]
    pub isbn: String,
    pub book_id: i64,
}

/// Update edition request. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEdition {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub isbn: Option<String>,
    /// Move the edition to another book
    #[serde(default)]
    pub book_id: Option<i64>,
}

impl UpdateEdition {
    /// Apply the supplied fields onto `edition`
    pub fn apply(self, edition: &mut Edition) {
        if let Some(isbn) = self.isbn {
            edition.isbn = isbn;
        }
        if let Some(book_id) = self.book_id {
            edition.book_id = book_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_moves_edition_and_keeps_isbn() {
        let mut edition = Edition {
            id: 3,
            isbn: "978-0441013593".to_string(),
            book_id: 1,
        };
        UpdateEdition {
            isbn: None,
            book_id: Some(2),
        }
        .apply(&mut edition);

        assert_eq!(edition.isbn, "978-0441013593");
        assert_eq!(edition.book_id, 2);
        assert_eq!(edition.id, 3);
    }
}
