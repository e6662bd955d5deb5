//! Application configuration
//!
//! Loaded from an optional `helpdesk.toml` in the working directory with
//! `HELPDESK_*` environment variables layered on top. Everything has a
//! default so the CLI works out of the box; the token secret should be
//! overridden in any real deployment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// Default directory holding the stored documents
pub const DEFAULT_DATA_DIR: &str = ".helpdesk";

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared secret for signing tokens
    pub token_secret: String,
    /// Token lifetime in hours
    pub token_expiry_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: "insecure-dev-secret".to_string(),
            token_expiry_hours: 24,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where entity documents are stored
    pub data_dir: PathBuf,
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `helpdesk.toml` and the environment
    ///
    /// Missing file and missing variables fall back to defaults.
    pub fn load_or_default() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("helpdesk").required(false))
            .add_source(
                config::Environment::with_prefix("HELPDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
