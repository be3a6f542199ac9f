//! Model source configuration.
//!
//! Decides where checkpoints come from: the Hugging Face Hub (online or
//! cache-only) or a plain directory mirror.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Configuration for fetching model repositories.
///
/// `Debug` redacts `token`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Hub cache directory. `None` uses the hf-hub default
    /// (`$HF_HOME/hub` or `~/.cache/huggingface/hub`).
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Never touch the network; serve only files already in the cache.
    #[serde(default)]
    pub offline: bool,

    /// Access token for gated or private repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Serve repositories from `<local_dir>/<org>/<name>/` instead of the Hub.
    /// Takes precedence over `cache_dir` and `offline`.
    #[serde(default)]
    pub local_dir: Option<PathBuf>,
}

impl fmt::Debug for HubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubConfig")
            .field("cache_dir", &self.cache_dir)
            .field("offline", &self.offline)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("local_dir", &self.local_dir)
            .finish()
    }
}

impl HubConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` if a configured directory path is empty
    /// - `ModelError::ConfigError` if the token is blank
    pub fn validate(&self) -> ModelResult<()> {
        if self
            .cache_dir
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ModelError::config("cache_dir cannot be empty"));
        }
        if self
            .local_dir
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ModelError::config("local_dir cannot be empty"));
        }
        if self.token.as_ref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ModelError::config("token cannot be blank"));
        }
        Ok(())
    }
}
