//! File-RAG endpoints
//!
//! Both endpoints require a caller-supplied store reference and never
//! fall back to plain generation on provider failure.

use actix_web::{HttpResponse, post, web};

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::request::{FileRagDetailedRequest, FileRagOverviewRequest};

/// High-level overview of uploaded file content
///
/// Use case: Director Agent preparing a straw-man presentation outline.
/// Returns themes, available data points, document structures, a
/// relevance assessment and citations into the source files.
#[utoipa::path(
    post,
    path = "/api/v1/rag/file/overview",
    request_body = FileRagOverviewRequest,
    responses(
        (status = 200, description = "Overview generated", body = crate::model::response::FileRagOverviewResponse),
        (status = 400, description = "Invalid request", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Overview generation failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "file-rag"
)]
#[post("/api/v1/rag/file/overview")]
pub async fn file_rag_overview(
    state: web::Data<AppState>,
    request: web::Json<FileRagOverviewRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;
    let response = state.file_rag_service.overview(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Detailed content chunks with citations
///
/// Use case: Text Service building specific slide content. Returns
/// content chunks with page references and confidence scores, plus
/// synthesized content ready for slide use.
#[utoipa::path(
    post,
    path = "/api/v1/rag/file/detailed",
    request_body = FileRagDetailedRequest,
    responses(
        (status = 200, description = "Detailed content generated", body = crate::model::response::FileRagDetailedResponse),
        (status = 400, description = "Invalid request", body = crate::api::error::ErrorResponse),
        (status = 500, description = "Detailed generation failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "file-rag"
)]
#[post("/api/v1/rag/file/detailed")]
pub async fn file_rag_detailed(
    state: web::Data<AppState>,
    request: web::Json<FileRagDetailedRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;
    let response = state.file_rag_service.detailed(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configure file-RAG routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(file_rag_overview).service(file_rag_detailed);
}
