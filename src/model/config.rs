use std::env;

const ENV_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
const ENV_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";
const ENV_ACCESS_TOKEN: &str = "GOOGLE_ACCESS_TOKEN";
const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Error raised when required provider configuration is absent at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Application configuration
///
/// Provider identity is required and validated here, before any request
/// is accepted. The provider client never reads the environment itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Cloud project the provider calls are billed against
    pub project: String,
    /// Provider region, e.g. "us-central1"
    pub location: String,
    /// OAuth access token for the provider REST API
    pub access_token: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let project = env::var(ENV_PROJECT).map_err(|_| ConfigError::Missing(ENV_PROJECT))?;
        let location = env::var(ENV_LOCATION).map_err(|_| ConfigError::Missing(ENV_LOCATION))?;
        let access_token =
            env::var(ENV_ACCESS_TOKEN).map_err(|_| ConfigError::Missing(ENV_ACCESS_TOKEN))?;

        let host = env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var(ENV_PORT)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            project,
            location,
            access_token,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = Config {
            project: "demo".to_string(),
            location: "us-central1".to_string(),
            access_token: "token".to_string(),
            host: "0.0.0.0".to_string(),
            port: 9000,
        };

        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
