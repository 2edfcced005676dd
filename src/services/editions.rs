//! Edition service

use crate::{
    error::{AppError, AppResult},
    models::edition::{CreateEdition, EditionDetails, EditionShort, UpdateEdition},
    repository::{books, editions, Repository},
};

use super::not_found;

#[derive(Clone)]
pub struct EditionsService {
    repository: Repository,
}

impl EditionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EditionShort>> {
        editions::list(&self.repository.pool).await
    }

    /// Get an edition with its owning book
    pub async fn get(&self, id: i64) -> AppResult<EditionDetails> {
        let pool = &self.repository.pool;
        let edition = editions::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Edition"))?;
        let book = books::find_by_id(pool, edition.book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;
        Ok(EditionDetails::new(edition, book))
    }

    /// Create an edition owned by `data.book_id`
    pub async fn create(&self, data: &CreateEdition) -> AppResult<EditionDetails> {
        let mut tx = self.repository.begin().await?;
        let book = books::find_by_id(&mut *tx, data.book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        let edition = editions::create(&mut *tx, data)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::info!("Created edition id={} for book id={}", edition.id, book.id);
        Ok(EditionDetails::new(edition, book))
    }

    /// Partial update; a supplied `book_id` moves the edition to that book
    pub async fn update(&self, id: i64, data: UpdateEdition) -> AppResult<EditionDetails> {
        let mut tx = self.repository.begin().await?;
        let mut edition = editions::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found("Edition"))?;

        data.apply(&mut edition);
        let book = books::find_by_id(&mut *tx, edition.book_id)
            .await?
            .ok_or_else(|| not_found("Book"))?;

        let edition = editions::save(&mut *tx, &edition)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;
        Ok(EditionDetails::new(edition, book))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.repository.begin().await?;
        editions::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found("Edition"))?;
        editions::delete(&mut *tx, id)
            .await
            .map_err(AppError::operation_failed)?;
        tx.commit().await.map_err(|e| AppError::from(e).operation_failed())?;

        tracing::info!("Deleted edition id={}", id);
        Ok(())
    }
}
