//! Repository for upload metadata database operations

use sqlx::PgPool;

use super::DbError;
use super::models::{FileSearchStoreRecord, NewUploadedFile, UploadedFileRecord};

/// Repository for file-search stores and uploaded files
#[derive(Clone)]
pub struct UploadRepository {
    pool: PgPool,
}

impl UploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the store registered for a session, if any
    pub async fn find_store_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<FileSearchStoreRecord>, DbError> {
        let record = sqlx::query_as::<_, FileSearchStoreRecord>(
            r#"
            SELECT * FROM file_search_stores WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Register a provider store for a session
    pub async fn insert_store(
        &self,
        session_id: &str,
        user_id: &str,
        store_name: &str,
    ) -> Result<FileSearchStoreRecord, DbError> {
        let record = sqlx::query_as::<_, FileSearchStoreRecord>(
            r#"
            INSERT INTO file_search_stores (session_id, user_id, store_name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .bind(store_name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(session = %session_id, store = %store_name, "Registered file search store");
        Ok(record)
    }

    /// Record an uploaded file's provider metadata
    pub async fn insert_file(&self, file: &NewUploadedFile) -> Result<UploadedFileRecord, DbError> {
        let record = sqlx::query_as::<_, UploadedFileRecord>(
            r#"
            INSERT INTO uploaded_files (
                session_id, user_id, file_name, file_size, file_type,
                provider_file_uri, provider_file_id, store_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&file.session_id)
        .bind(&file.user_id)
        .bind(&file.file_name)
        .bind(file.file_size)
        .bind(&file.file_type)
        .bind(&file.provider_file_uri)
        .bind(&file.provider_file_id)
        .bind(&file.store_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            session = %file.session_id,
            file = %file.file_name,
            "Recorded uploaded file"
        );
        Ok(record)
    }

    /// Count files already uploaded within a session
    pub async fn count_files_by_session(&self, session_id: &str) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM uploaded_files WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// List all files uploaded within a session, oldest first
    pub async fn list_files_by_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<UploadedFileRecord>, DbError> {
        let records = sqlx::query_as::<_, UploadedFileRecord>(
            r#"
            SELECT * FROM uploaded_files
            WHERE session_id = $1
            ORDER BY uploaded_at ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
