use crate::consts::DEFAULT_BASE_URL;
use crate::error::GongError;

use std::env;
use tracing::debug;

pub const ACCESS_KEY_VAR: &str = "GONG_ACCESS_KEY";
pub const ACCESS_KEY_SECRET_VAR: &str = "GONG_ACCESS_KEY_SECRET";
pub const BASE_URL_VAR: &str = "GONG_BASE_URL";

/// Everything needed to build a [`GongClient`](crate::GongClient).
#[derive(Clone)]
pub struct GongConfig {
    pub access_key: String,
    pub access_key_secret: String,
    pub base_url: String,
}

impl GongConfig {
    pub fn new(access_key: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            access_key_secret: access_key_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read credentials from the environment, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, GongError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path=?path, "loaded .env");
        }
        let access_key =
            env::var(ACCESS_KEY_VAR).map_err(|_| GongError::MissingEnv(ACCESS_KEY_VAR))?;
        let access_key_secret = env::var(ACCESS_KEY_SECRET_VAR)
            .map_err(|_| GongError::MissingEnv(ACCESS_KEY_SECRET_VAR))?;
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            access_key,
            access_key_secret,
            base_url,
        })
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for GongConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("GongConfig")
            .field("access_key", &"<redacted>")
            .field("access_key_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_base_url() {
        let config = GongConfig::new("k", "s");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = GongConfig::new("my-key", "my-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("my-key"));
        assert!(!printed.contains("my-secret"));
        assert!(printed.contains(DEFAULT_BASE_URL));
    }
}
