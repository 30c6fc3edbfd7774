//! File-search store management service
//!
//! Creates one provider store per session, pushes uploaded documents
//! into it for indexing, and records their metadata. The grounding
//! pipeline only ever reads the store identifiers this service hands
//! out; it never mutates them.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::db::DbError;
use crate::db::models::{FileSearchStoreRecord, NewUploadedFile, UploadedFileRecord};
use crate::db::repository::UploadRepository;
use crate::provider::{GeminiClient, ProviderError};

/// Upload size cap
const MAX_FILE_SIZE_BYTES: usize = 20 * 1024 * 1024;

/// Uploads allowed per session
pub const MAX_FILES_PER_SESSION: i64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Provider store operation failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Database operation failed: {0}")]
    Db(#[from] DbError),

    #[error("Invalid upload payload: {0}")]
    InvalidPayload(String),

    #[error("File size exceeds {} MB limit", MAX_FILE_SIZE_BYTES / (1024 * 1024))]
    FileTooLarge,

    #[error("Maximum {MAX_FILES_PER_SESSION} files per session (currently {current})")]
    MaxFilesExceeded { current: i64 },
}

/// Decoded upload handed to the service by the API layer
#[derive(Debug)]
pub struct FileUpload {
    pub session_id: String,
    pub user_id: String,
    pub file_name: String,
    pub file_type: String,
    /// Base64-encoded document body
    pub content_base64: String,
}

/// Service managing provider file-search stores and upload metadata
pub struct StoreService {
    provider: Arc<GeminiClient>,
    repository: UploadRepository,
}

impl StoreService {
    pub fn new(provider: Arc<GeminiClient>, repository: UploadRepository) -> Self {
        Self {
            provider,
            repository,
        }
    }

    /// Fetch the session's store, creating it at the provider on first use
    pub async fn get_or_create_store(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<FileSearchStoreRecord, StoreError> {
        if let Some(existing) = self.repository.find_store_by_session(session_id).await? {
            return Ok(existing);
        }

        let display_name = format!("Session_{session_id}");
        let store = self.provider.create_file_search_store(&display_name).await?;

        let record = self
            .repository
            .insert_store(session_id, user_id, &store.name)
            .await?;

        tracing::info!(session = %session_id, store = %store.name, "File search store created for session");
        Ok(record)
    }

    /// Decode, index and record an uploaded document
    ///
    /// Payload problems are rejected before any provider call is made.
    pub async fn upload_file(&self, upload: FileUpload) -> Result<UploadedFileRecord, StoreError> {
        let data = decode_payload(&upload.content_base64)?;

        let current = self
            .repository
            .count_files_by_session(&upload.session_id)
            .await?;
        if current >= MAX_FILES_PER_SESSION {
            return Err(StoreError::MaxFilesExceeded { current });
        }

        let store = self
            .get_or_create_store(&upload.session_id, &upload.user_id)
            .await?;

        let provider_file = self
            .provider
            .upload_to_file_search_store(
                &store.store_name,
                &upload.file_name,
                &upload.file_type,
                &data,
            )
            .await?;

        let record = self
            .repository
            .insert_file(&NewUploadedFile {
                session_id: upload.session_id,
                user_id: upload.user_id,
                file_name: upload.file_name,
                file_size: data.len() as i64,
                file_type: upload.file_type,
                provider_file_uri: provider_file.uri.unwrap_or_default(),
                provider_file_id: provider_file.name.unwrap_or_default(),
                store_id: store.store_name,
            })
            .await?;

        tracing::info!(
            session = %record.session_id,
            file = %record.file_name,
            bytes = record.file_size,
            "File uploaded and indexed"
        );
        Ok(record)
    }

    /// List files uploaded within a session
    pub async fn list_session_files(
        &self,
        session_id: &str,
    ) -> Result<Vec<UploadedFileRecord>, StoreError> {
        Ok(self.repository.list_files_by_session(session_id).await?)
    }
}

/// Decode and bounds-check an upload body
fn decode_payload(content_base64: &str) -> Result<Vec<u8>, StoreError> {
    let data = BASE64
        .decode(content_base64.as_bytes())
        .map_err(|e| StoreError::InvalidPayload(format!("content is not valid base64: {e}")))?;

    if data.is_empty() {
        return Err(StoreError::InvalidPayload("file is empty".to_string()));
    }
    if data.len() > MAX_FILE_SIZE_BYTES {
        return Err(StoreError::FileTooLarge);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload_roundtrip() {
        let encoded = BASE64.encode(b"quarterly report body");
        let decoded = decode_payload(&encoded).unwrap();
        assert_eq!(decoded, b"quarterly report body");
    }

    #[test]
    fn test_decode_payload_rejects_bad_base64() {
        assert!(matches!(
            decode_payload("not-base64!!!"),
            Err(StoreError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_decode_payload_rejects_empty() {
        assert!(matches!(
            decode_payload(""),
            Err(StoreError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_decode_payload_rejects_oversize() {
        let body = vec![0u8; MAX_FILE_SIZE_BYTES + 1];
        let encoded = BASE64.encode(&body);
        assert!(matches!(
            decode_payload(&encoded),
            Err(StoreError::FileTooLarge)
        ));
    }
}
