//! Database models for upload metadata

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of the `file_search_stores` table
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct FileSearchStoreRecord {
    pub id: i64,
    pub session_id: String,
    pub user_id: String,
    /// Fully qualified provider store name, e.g. "fileSearchStores/abc"
    pub store_name: String,
    pub created_at: DateTime<Utc>,
}

/// Row of the `uploaded_files` table
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct UploadedFileRecord {
    pub id: i64,
    pub session_id: String,
    pub user_id: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub provider_file_uri: String,
    pub provider_file_id: String,
    pub store_id: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Insert payload for a newly uploaded file
#[derive(Debug, Clone)]
pub struct NewUploadedFile {
    pub session_id: String,
    pub user_id: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub provider_file_uri: String,
    pub provider_file_id: String,
    pub store_id: String,
}
