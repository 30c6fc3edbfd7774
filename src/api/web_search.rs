//! Web-search endpoints
//!
//! These endpoints do NOT fall back to standard generation if search
//! fails; errors are returned directly (with a suggestion to use file
//! RAG) so the caller can handle them appropriately.

use actix_web::{HttpResponse, post, web};

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::model::request::{WebSearchDetailedRequest, WebSearchOverviewRequest};

/// High-level web research overview for a topic
///
/// Use case: Director Agent researching a topic for presentation
/// planning. Returns a findings summary, themes, top sources and
/// suggested presentation angles.
#[utoipa::path(
    post,
    path = "/api/v1/search/web/overview",
    request_body = WebSearchOverviewRequest,
    responses(
        (status = 200, description = "Overview generated", body = crate::model::response::WebSearchOverviewResponse),
        (status = 500, description = "Web search failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "web-search"
)]
#[post("/api/v1/search/web/overview")]
pub async fn web_search_overview(
    state: web::Data<AppState>,
    request: web::Json<WebSearchOverviewRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = state.web_search_service.overview(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Specific facts, statistics and quotes from the web
///
/// Use case: Text Service needing sourced facts for slide content.
/// Each fact carries its source URL, verification status and
/// confidence.
#[utoipa::path(
    post,
    path = "/api/v1/search/web/detailed",
    request_body = WebSearchDetailedRequest,
    responses(
        (status = 200, description = "Facts generated", body = crate::model::response::WebSearchDetailedResponse),
        (status = 500, description = "Web search failed", body = crate::api::error::ErrorResponse)
    ),
    tag = "web-search"
)]
#[post("/api/v1/search/web/detailed")]
pub async fn web_search_detailed(
    state: web::Data<AppState>,
    request: web::Json<WebSearchDetailedRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = state.web_search_service.detailed(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configure web-search routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web_search_overview).service(web_search_detailed);
}
