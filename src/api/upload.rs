//! Upload and store management endpoints

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::db::models::UploadedFileRecord;
use crate::service::store::FileUpload;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStoreRequest {
    pub session_id: String,
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateStoreResponse {
    pub success: bool,
    /// Provider store name to pass as `store_name` in RAG requests
    pub store_name: String,
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadFileBody {
    pub session_id: String,
    pub user_id: String,
    pub file_name: String,
    /// MIME type of the uploaded document
    pub file_type: String,
    /// Base64-encoded document body
    pub content_base64: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFileResponse {
    pub success: bool,
    pub file: UploadedFileRecord,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionFilesResponse {
    pub session_id: String,
    pub file_count: usize,
    pub files: Vec<UploadedFileRecord>,
}

/// Create (or return) the file-search store for a session
#[utoipa::path(
    post,
    path = "/api/v1/upload/store/create",
    request_body = CreateStoreRequest,
    responses(
        (status = 200, description = "Store available", body = CreateStoreResponse),
        (status = 502, description = "Provider store creation failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "upload"
)]
#[post("/api/v1/upload/store/create")]
pub async fn create_store(
    state: web::Data<AppState>,
    request: web::Json<CreateStoreRequest>,
) -> Result<HttpResponse, ApiError> {
    let record = state
        .store_service
        .get_or_create_store(&request.session_id, &request.user_id)
        .await
        .map_err(|e| match e {
            crate::service::store::StoreError::Provider(err) => {
                ApiError::StoreCreate(err.to_string())
            }
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(CreateStoreResponse {
        success: true,
        store_name: record.store_name,
        session_id: record.session_id,
        created_at: record.created_at,
    }))
}

/// Upload a document into the session's store for indexing
#[utoipa::path(
    post,
    path = "/api/v1/files/upload",
    request_body = UploadFileBody,
    responses(
        (status = 200, description = "File uploaded and indexed", body = UploadFileResponse),
        (status = 400, description = "Invalid payload or file over the size limit", body = crate::api::error::ErrorResponse),
        (status = 409, description = "Session file limit reached", body = crate::api::error::ErrorResponse),
        (status = 502, description = "Provider upload failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "upload"
)]
#[post("/api/v1/files/upload")]
pub async fn upload_file(
    state: web::Data<AppState>,
    body: web::Json<UploadFileBody>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let record = state
        .store_service
        .upload_file(FileUpload {
            session_id: body.session_id,
            user_id: body.user_id,
            file_name: body.file_name,
            file_type: body.file_type,
            content_base64: body.content_base64,
        })
        .await?;

    Ok(HttpResponse::Ok().json(UploadFileResponse {
        success: true,
        file: record,
    }))
}

/// List files uploaded within a session
#[utoipa::path(
    get,
    path = "/api/v1/files/session/{session_id}",
    params(
        ("session_id" = String, Path, description = "Session identifier")
    ),
    responses(
        (status = 200, description = "Files listed", body = SessionFilesResponse)
    ),
    tag = "upload"
)]
#[get("/api/v1/files/session/{session_id}")]
pub async fn list_session_files(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let session_id = path.into_inner();
    let files = state.store_service.list_session_files(&session_id).await?;

    Ok(HttpResponse::Ok().json(SessionFilesResponse {
        session_id,
        file_count: files.len(),
        files,
    }))
}

/// Configure upload routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_store)
        .service(upload_file)
        .service(list_session_files);
}
