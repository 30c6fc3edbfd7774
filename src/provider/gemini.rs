//! Gemini REST client (Vertex AI)
//!
//! Covers the two capabilities the service needs: content generation
//! (optionally grounded by a file-search store or dynamic web search)
//! and file-search store management for uploads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::model::Config;
use crate::model::response::MODEL_ID;
use crate::provider::{
    GenerationProvider, GenerationTuning, GroundingTool, ProviderError, RawModelReply,
};

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for the Vertex AI `generateContent` and file-search-store APIs
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl GeminiClient {
    /// Build a client from validated configuration
    pub fn new(config: &Config) -> Self {
        let base_url = format!(
            "https://{location}-aiplatform.googleapis.com/v1beta1/projects/{project}/locations/{location}",
            location = config.location,
            project = config.project,
        );

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url,
            access_token: config.access_token.clone(),
        }
    }

    /// Create a file-search store for a session
    pub async fn create_file_search_store(
        &self,
        display_name: &str,
    ) -> Result<FileSearchStoreInfo, ProviderError> {
        let url = format!("{}/fileSearchStores", self.base_url);

        tracing::debug!(display_name = %display_name, "Creating file search store");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&CreateStoreRequest {
                display_name: display_name.to_string(),
            })
            .send()
            .await?;

        let store: FileSearchStoreInfo = Self::parse_reply(response).await?;
        tracing::info!(store = %store.name, "File search store created");
        Ok(store)
    }

    /// Upload a document into a file-search store for indexing
    pub async fn upload_to_file_search_store(
        &self,
        store_name: &str,
        display_name: &str,
        mime_type: &str,
        data: &[u8],
    ) -> Result<UploadedProviderFile, ProviderError> {
        let url = format!("{}/{}:uploadToFileSearchStore", self.base_url, store_name);

        tracing::debug!(
            store = %store_name,
            file = %display_name,
            bytes = data.len(),
            "Uploading file to store"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&UploadFileRequest {
                display_name: display_name.to_string(),
                mime_type: mime_type.to_string(),
                data: BASE64.encode(data),
            })
            .send()
            .await?;

        Self::parse_reply(response).await
    }

    async fn parse_reply<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ProviderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::MalformedReply(e.to_string()))
    }
}

#[async_trait::async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        grounding: &GroundingTool,
        tuning: GenerationTuning,
    ) -> Result<RawModelReply, ProviderError> {
        let url = format!(
            "{}/publishers/google/models/{}:generateContent",
            self.base_url, MODEL_ID
        );

        let tools = match grounding {
            GroundingTool::None => Vec::new(),
            GroundingTool::FileSearch { store_name } => vec![Tool {
                file_search: Some(FileSearchTool {
                    file_search_store_names: vec![store_name.clone()],
                }),
                google_search_retrieval: None,
            }],
            GroundingTool::WebSearch { dynamic_threshold } => vec![Tool {
                file_search: None,
                google_search_retrieval: Some(GoogleSearchRetrieval {
                    dynamic_retrieval_config: DynamicRetrievalConfig {
                        mode: "MODE_DYNAMIC".to_string(),
                        dynamic_threshold: *dynamic_threshold,
                    },
                }),
            }],
        };

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            tools,
            generation_config: RequestGenerationConfig {
                temperature: tuning.temperature,
                max_output_tokens: tuning.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        Self::parse_reply(response).await
    }
}

// ---------------------------------------------------------------------------
// Request/response bodies
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: RequestGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestContent {
    role: String,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    file_search: Option<FileSearchTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    google_search_retrieval: Option<GoogleSearchRetrieval>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileSearchTool {
    file_search_store_names: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleSearchRetrieval {
    dynamic_retrieval_config: DynamicRetrievalConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DynamicRetrievalConfig {
    mode: String,
    dynamic_threshold: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateStoreRequest {
    display_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadFileRequest {
    display_name: String,
    mime_type: String,
    data: String,
}

/// Provider-side record of a created file-search store
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSearchStoreInfo {
    /// Fully qualified store name, e.g. "fileSearchStores/abc123"
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Provider-side record of an uploaded file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedProviderFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}
