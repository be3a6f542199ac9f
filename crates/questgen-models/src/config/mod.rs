//! Root configuration for model bootstrap.
//!
//! # Loading Configuration
//!
//! ```rust,ignore
//! use questgen_models::ModelsConfig;
//!
//! // Load from file
//! let config = ModelsConfig::from_file("questgen.toml")?;
//!
//! // Or the pre-download mode
//! let config = ModelsConfig::download_only();
//!
//! // With environment overrides
//! let config = ModelsConfig::default().with_env_overrides();
//! ```
//!
//! # TOML Structure
//!
//! ```toml
//! download_only = false
//!
//! [hub]
//! cache_dir = "/var/cache/huggingface"
//! offline = false
//!
//! [device]
//! prefer_gpu = true
//! cuda_device_id = 0
//!
//! [linguistic]
//! enabled = true
//! language = "en"
//! stanza_version = "1.9.0"
//! ```

mod device;
mod hub;
mod linguistic;


pub use device::DeviceConfig;
pub use hub::HubConfig;
pub use linguistic::LinguisticConfig;

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Root configuration.
///
/// `download_only` is the single switch of the bootstrap: when set, every
/// model is still fetched and loaded (so it ends up cached), but the
/// distractor-generation composite is not built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Pre-download mode.
    #[serde(default)]
    pub download_only: bool,

    #[serde(default)]
    pub hub: HubConfig,

    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub linguistic: LinguisticConfig,
}

impl ModelsConfig {
    /// Defaults with `download_only` set.
    #[must_use]
    pub fn download_only() -> Self {
        Self {
            download_only: true,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ModelError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            ModelError::config(format!(
                "Failed to parse TOML in '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Validate all sections, returning the first error prefixed with its section.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` describing the first invalid value
    pub fn validate(&self) -> ModelResult<()> {
        self.hub
            .validate()
            .map_err(|e| ModelError::config(format!("[hub] {}", e)))?;

        self.device
            .validate()
            .map_err(|e| ModelError::config(format!("[device] {}", e)))?;

        self.linguistic
            .validate()
            .map_err(|e| ModelError::config(format!("[linguistic] {}", e)))?;

        Ok(())
    }

    /// Apply environment variable overrides. Prefix: `QUESTGEN_`
    ///
    /// | Variable | Config Path | Type |
    /// |----------|-------------|------|
    /// | `QUESTGEN_DOWNLOAD_ONLY` | `download_only` | bool |
    /// | `QUESTGEN_CACHE_DIR` | `hub.cache_dir` | path |
    /// | `QUESTGEN_OFFLINE` | `hub.offline` | bool |
    /// | `QUESTGEN_LOCAL_DIR` | `hub.local_dir` | path |
    /// | `HF_TOKEN` | `hub.token` | String |
    /// | `QUESTGEN_PREFER_GPU` | `device.prefer_gpu` | bool |
    /// | `QUESTGEN_CUDA_DEVICE` | `device.cuda_device_id` | usize |
    /// | `QUESTGEN_LANGUAGE` | `linguistic.language` | String |
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(b) = env_bool("QUESTGEN_DOWNLOAD_ONLY") {
            self.download_only = b;
        }

        // Hub
        if let Ok(val) = env::var("QUESTGEN_CACHE_DIR") {
            self.hub.cache_dir = Some(PathBuf::from(val));
        }
        if let Some(b) = env_bool("QUESTGEN_OFFLINE") {
            self.hub.offline = b;
        }
        if let Ok(val) = env::var("QUESTGEN_LOCAL_DIR") {
            self.hub.local_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = env::var("HF_TOKEN") {
            if !val.trim().is_empty() {
                self.hub.token = Some(val);
            }
        }

        // Device
        if let Some(b) = env_bool("QUESTGEN_PREFER_GPU") {
            self.device.prefer_gpu = b;
        }
        if let Ok(val) = env::var("QUESTGEN_CUDA_DEVICE") {
            if let Ok(n) = val.parse::<usize>() {
                self.device.cuda_device_id = n;
            }
        }

        // Linguistic
        if let Ok(val) = env::var("QUESTGEN_LANGUAGE") {
            self.linguistic.language = val;
        }

        self
    }

    /// Create configuration from a TOML string.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` if TOML parsing fails
    pub fn from_toml_str(toml: &str) -> ModelResult<Self> {
        toml::from_str(toml).map_err(|e| ModelError::config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` if serialization fails
    pub fn to_toml_string(&self) -> ModelResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ModelError::config(format!("Failed to serialize to TOML: {}", e)))
    }
}

fn env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| v.parse::<bool>().ok())
}
