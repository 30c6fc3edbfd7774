//! Unified API error handling
//!
//! Every endpoint returns `Result<T, ApiError>` so failures share one
//! response format: a stable error code, a human-readable message, an
//! optional actionable suggestion and a request id for tracing.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::content::ContentServiceError;
use crate::service::file_rag::FileRagError;
use crate::service::store::StoreError;
use crate::service::web_search::{WEB_SEARCH_FAILURE_SUGGESTION, WebSearchError};

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable error code
    pub error_code: String,
    /// Human-readable error message
    pub message: String,
    /// Actionable alternative, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Request failed field validation (400)
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Legacy content generation failed on both paths (500)
    #[error("Content generation failed: {0}")]
    ContentGeneration(String),

    /// File RAG overview failed (500)
    #[error("File RAG overview failed: {0}")]
    FileRagOverview(String),

    /// File RAG detailed lookup failed (500)
    #[error("File RAG detailed lookup failed: {0}")]
    FileRagDetailed(String),

    /// Web search overview failed (500)
    #[error("Web search overview failed: {0}")]
    WebSearchOverview(String),

    /// Web search detailed lookup failed (500)
    #[error("Web search detailed lookup failed: {0}")]
    WebSearchDetailed(String),

    /// Store creation at the provider failed (502)
    #[error("Store creation failed: {0}")]
    StoreCreate(String),

    /// File upload or indexing failed (502)
    #[error("File upload failed: {0}")]
    FileUpload(String),

    /// Upload body over the size limit (400)
    #[error("{0}")]
    FileSizeExceeded(String),

    /// Session already holds the maximum number of files (409)
    #[error("{0}")]
    MaxFilesExceeded(String),

    /// Database error (500)
    #[error("Database error: {0}")]
    Database(String),
}

impl ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::ContentGeneration(_) => "GENERATION_FAILED",
            ApiError::FileRagOverview(_) => "FILE_RAG_OVERVIEW_FAILED",
            ApiError::FileRagDetailed(_) => "FILE_RAG_DETAILED_FAILED",
            ApiError::WebSearchOverview(_) => "WEB_SEARCH_OVERVIEW_FAILED",
            ApiError::WebSearchDetailed(_) => "WEB_SEARCH_DETAILED_FAILED",
            ApiError::StoreCreate(_) => "STORE_CREATE_FAILED",
            ApiError::FileUpload(_) => "FILE_UPLOAD_FAILED",
            ApiError::FileSizeExceeded(_) => "FILE_SIZE_EXCEEDED",
            ApiError::MaxFilesExceeded(_) => "MAX_FILES_EXCEEDED",
            ApiError::Database(_) => "DATABASE_ERROR",
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ApiError::WebSearchOverview(_) | ApiError::WebSearchDetailed(_) => {
                Some(WEB_SEARCH_FAILURE_SUGGESTION.to_string())
            }
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::FileSizeExceeded(_) => StatusCode::BAD_REQUEST,
            ApiError::MaxFilesExceeded(_) => StatusCode::CONFLICT,
            ApiError::StoreCreate(_) | ApiError::FileUpload(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_code = self.error_code();

        tracing::error!(
            error_code = error_code,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error_code: error_code.to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<crate::model::request::RequestValidationError> for ApiError {
    fn from(err: crate::model::request::RequestValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<ContentServiceError> for ApiError {
    fn from(err: ContentServiceError) -> Self {
        match err {
            ContentServiceError::Generation(e) => ApiError::ContentGeneration(e.to_string()),
        }
    }
}

impl From<FileRagError> for ApiError {
    fn from(err: FileRagError) -> Self {
        match err {
            FileRagError::Overview(e) => ApiError::FileRagOverview(e.to_string()),
            FileRagError::Detailed(e) => ApiError::FileRagDetailed(e.to_string()),
        }
    }
}

impl From<WebSearchError> for ApiError {
    fn from(err: WebSearchError) -> Self {
        match err {
            WebSearchError::Overview(e) => ApiError::WebSearchOverview(e.to_string()),
            WebSearchError::Detailed(e) => ApiError::WebSearchDetailed(e.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidPayload(msg) => ApiError::Validation(msg),
            StoreError::FileTooLarge => ApiError::FileSizeExceeded(err.to_string()),
            StoreError::MaxFilesExceeded { .. } => ApiError::MaxFilesExceeded(err.to_string()),
            StoreError::Provider(e) => ApiError::FileUpload(e.to_string()),
            StoreError::Db(e) => ApiError::Database(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;

    fn provider_down() -> ProviderError {
        ProviderError::Status {
            status: 503,
            body: "unavailable".to_string(),
        }
    }

    #[test]
    fn test_file_rag_error_code() {
        let err: ApiError = FileRagError::Overview(provider_down()).into();
        assert_eq!(err.error_code(), "FILE_RAG_OVERVIEW_FAILED");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_web_search_errors_carry_suggestion() {
        let err: ApiError = WebSearchError::Detailed(provider_down()).into();
        assert_eq!(err.error_code(), "WEB_SEARCH_DETAILED_FAILED");
        assert_eq!(
            err.suggestion().as_deref(),
            Some(WEB_SEARCH_FAILURE_SUGGESTION)
        );
    }

    #[test]
    fn test_upload_limit_errors_have_dedicated_codes() {
        let err: ApiError = StoreError::MaxFilesExceeded { current: 5 }.into();
        assert_eq!(err.error_code(), "MAX_FILES_EXCEEDED");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err: ApiError = StoreError::FileTooLarge.into();
        assert_eq!(err.error_code(), "FILE_SIZE_EXCEEDED");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = ApiError::Validation("max_themes out of range".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
    }
}
