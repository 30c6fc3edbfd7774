pub mod content;
pub mod error;
pub mod file_rag;
pub mod health;
pub mod openapi;
pub mod upload;
pub mod web_search;
