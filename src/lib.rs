//! Library catalog server
//!
//! A REST JSON API over a relational store for managing books, their authors
//! and their editions.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Connect to the configured database and wire up the services
    pub async fn connect(config: AppConfig) -> AppResult<Self> {
        let pool = db::connect(&config.database).await?;
        let repository = repository::Repository::new(pool);
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        })
    }
}
