//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::content::generate_content,
        crate::api::file_rag::file_rag_overview,
        crate::api::file_rag::file_rag_detailed,
        crate::api::web_search::web_search_overview,
        crate::api::web_search::web_search_detailed,
        crate::api::upload::create_store,
        crate::api::upload::upload_file,
        crate::api::upload::list_session_files,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::model::request::ContentGenerationRequest,
        crate::model::request::RagConfig,
        crate::model::request::FileRagOverviewRequest,
        crate::model::request::FileRagDetailedRequest,
        crate::model::request::WebSearchOverviewRequest,
        crate::model::request::WebSearchDetailedRequest,
        crate::model::response::ContentGenerationResponse,
        crate::model::response::FileRagOverviewResponse,
        crate::model::response::FileRagDetailedResponse,
        crate::model::response::WebSearchOverviewResponse,
        crate::model::response::WebSearchDetailedResponse,
        crate::api::upload::CreateStoreRequest,
        crate::api::upload::CreateStoreResponse,
        crate::api::upload::UploadFileBody,
        crate::api::upload::UploadFileResponse,
        crate::api::upload::SessionFilesResponse,
        crate::api::error::ErrorResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "content", description = "Legacy content generation"),
        (name = "file-rag", description = "File-grounded generation"),
        (name = "web-search", description = "Web-search-grounded generation"),
        (name = "upload", description = "File-search store management"),
        (name = "health", description = "Health probes")
    ),
    info(
        title = "Grounded Content Service",
        description = "RAG and web-search generation service for presentation building"
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/yaml")
        .body(ApiDoc::openapi().to_yaml().unwrap())
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
