//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::repository::UploadRepository;
use crate::model::config::Config;
use crate::provider::GeminiClient;
use crate::service::{ContentService, FileRagService, StoreService, WebSearchService};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Legacy content generation service
    pub content_service: ContentService,
    /// File-grounded generation service
    pub file_rag_service: FileRagService,
    /// Web-search-grounded generation service
    pub web_search_service: WebSearchService,
    /// File-search store and upload management service
    pub store_service: StoreService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Database connection and schema initialization
    /// 2. Vertex AI client construction from validated config
    /// 3. Service dependency graph construction
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        // Initialize PostgreSQL database
        let db_pool = crate::db::create_pool()
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        // Initialize database schema
        crate::db::init_schema(&db_pool)
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        let client = Arc::new(GeminiClient::new(config));
        let provider: Arc<dyn crate::provider::GenerationProvider> = client.clone();

        let repository = UploadRepository::new(db_pool.clone());

        Ok(Self {
            db_pool,
            content_service: ContentService::new(provider.clone()),
            file_rag_service: FileRagService::new(provider.clone()),
            web_search_service: WebSearchService::new(provider),
            store_service: StoreService::new(client, repository),
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Database initialization failed
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}
