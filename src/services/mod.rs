//! Business logic services

pub mod authors;
pub mod books;
pub mod editions;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub editions: editions::EditionsService,
    pub authors: authors::AuthorsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            editions: editions::EditionsService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the store answers queries
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

/// `NotFound` error for a missing entity, e.g. "Book Not Found"
pub(crate) fn not_found(entity: &str) -> AppError {
    AppError::NotFound(format!("{} Not Found", entity))
}

#[cfg(test)]
pub(crate) async fn test_services() -> Services {
    let pool = crate::db::connect(&crate::config::DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Services::new(Repository::new(pool))
}
