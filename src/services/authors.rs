//! Author service

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        book::Book,
    },
    repository::{authors, book_authors, books, Repository},
};

use super::not_found;

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        authors::list(&self.repository.pool).await
    }

    pub async fn get(&self, id: i64) -> AppResult<Author> {
        authors::find_by_id(&self.repository.pool, id)
            .await?
            .ok_or_else(|| not_found("Author"))
    }

    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        let mut tx = self.repository.begin().await?;
        let author = authors::create(&mut *tx, data)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::info!("Created author id={} name={:?}", author.id, author.name);
        Ok(author)
    }

    pub async fn update(&self, id: i64, data: UpdateAuthor) -> AppResult<Author> {
        let mut tx = self.repository.begin().await?;
        let mut author = authors::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found("Author"))?;

        data.apply(&mut author);

        let author = authors::save(&mut *tx, &author)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;
        Ok(author)
    }

    /// Delete an author. Books keep existing; they only lose the link.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        authors::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found("Author"))?;

        let unlinked = book_authors::detach_author(&mut *tx, id)
            .await
            .map_err(AppError::operation_failed)?;
        authors::delete(&mut *tx, id)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::info!("Deleted author id={} ({} book links)", id, unlinked);
        Ok(())
    }

    /// Books the author is attached to
    pub async fn books(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let pool = &self.repository.pool;
        authors::find_by_id(pool, author_id)
            .await?
            .ok_or_else(|| not_found("Author"))?;
        books::list_by_author(pool, author_id).await
    }
}
