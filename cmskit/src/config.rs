use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, Result};

/// Backend used when no override is baked in at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where the REST backend lives. Every service call resolves its URL
/// against `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL, validating and normalizing it.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let url: String = base_url.into();
        if url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        Ok(Self { base_url: url })
    }

    /// Config baked in at compile time via `CLINIC_API_BASE_URL`, falling
    /// back to [`DEFAULT_API_BASE_URL`]. A malformed override falls back
    /// rather than poisoning the whole app at mount.
    pub fn from_build_env() -> Self {
        let url = option_env!("CLINIC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(url).unwrap_or_else(|_| Self::default())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
