pub mod citation;
pub mod config;
pub mod content;
pub mod request;
pub mod response;

pub use citation::{
    FileCitation, GroundingSummary, LegacyCitation, LegacyCitationChunk, WebCitation,
};
pub use config::{Config, ConfigError};
pub use content::*;
pub use request::*;
pub use response::*;
