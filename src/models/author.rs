//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

/// Author row as stored in the `author` table.
///
/// Books written by an author are not held here; they are looked up through
/// the `book_author` join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub nationality: String,
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAuthor {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub nationality: String,
}

/// Update author request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub nationality: Option<String>,
}

impl UpdateAuthor {
    pub fn apply(self, author: &mut Author) {
        if let Some(name) = self.name {
            author.name = name;
        }
        if let Some(nationality) = self.nationality {
            author.nationality = nationality;
        }
    }
}
