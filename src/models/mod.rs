//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_author;
pub mod edition;

use validator::ValidationError;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookDetails};
pub use book_author::BookAuthor;
pub use edition::{Edition, EditionDetails, EditionShort};

/// Rejects empty and whitespace-only strings
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
