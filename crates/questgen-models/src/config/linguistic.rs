//! Linguistic resource configuration (Stanza language package).

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

fn default_enabled() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

fn default_stanza_version() -> String {
    "1.9.0".to_string()
}

/// Which Stanza package to pre-download alongside the models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticConfig {
    /// Run the linguistic-resource download task.
    /// Default: true
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Stanza language code.
    /// Default: "en"
    #[serde(default = "default_language")]
    pub language: String,

    /// Stanza release whose resources are fetched.
    /// Default: "1.9.0"
    #[serde(default = "default_stanza_version")]
    pub stanza_version: String,
}

impl Default for LinguisticConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            language: default_language(),
            stanza_version: default_stanza_version(),
        }
    }
}

impl LinguisticConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` if language is empty or not a lowercase code
    /// - `ModelError::ConfigError` if stanza_version is not dotted numeric
    pub fn validate(&self) -> ModelResult<()> {
        if self.language.is_empty() {
            return Err(ModelError::config("language cannot be empty"));
        }
        if !self
            .language
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_' || c == '-')
        {
            return Err(ModelError::config(format!(
                "language must be a lowercase language code, got '{}'",
                self.language
            )));
        }
        let parts: Vec<&str> = self.stanza_version.split('.').collect();
        if parts.len() < 2 || parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
            return Err(ModelError::config(format!(
                "stanza_version must look like '1.9.0', got '{}'",
                self.stanza_version
            )));
        }
        Ok(())
    }
}
