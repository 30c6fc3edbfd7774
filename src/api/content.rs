//! Legacy content generation endpoint

use actix_web::{HttpResponse, post, web};

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::request::ContentGenerationRequest;

/// Generate slide content, grounded against uploaded files when a
/// store is configured
///
/// Falls back to plain generation if the grounded call fails; only a
/// plain-generation failure is reported as an error.
#[utoipa::path(
    post,
    path = "/api/v1/content/generate",
    request_body = ContentGenerationRequest,
    responses(
        (status = 200, description = "Content generated", body = crate::model::response::ContentGenerationResponse),
        (status = 500, description = "Generation failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "content"
)]
#[post("/api/v1/content/generate")]
pub async fn generate_content(
    state: web::Data<AppState>,
    request: web::Json<ContentGenerationRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = state.content_service.generate(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configure content routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_content);
}
