pub mod citations;
pub mod content;
pub mod extraction;
pub mod fields;
pub mod file_rag;
pub mod store;
pub mod web_search;

pub use content::ContentService;
pub use file_rag::FileRagService;
pub use store::StoreService;
pub use web_search::WebSearchService;

use serde_json::{Map, Value};

/// Serialize request context for prompt interpolation
pub(crate) fn to_context_json(context: &Map<String, Value>) -> String {
    Value::Object(context.clone()).to_string()
}
