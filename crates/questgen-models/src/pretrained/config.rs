//! Parsed `config.json` of a checkpoint.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{ModelError, ModelResult};
use crate::types::ModelSpec;

/// Checkpoint configuration. Only the fields the bootstrap checks are typed;
/// everything else is kept verbatim for the downstream architecture code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub model_type: Option<String>,

    #[serde(default)]
    pub architectures: Vec<String>,

    #[serde(default)]
    pub vocab_size: Option<usize>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ModelConfig {
    /// # Errors
    /// - `ModelError::IoError` if the file cannot be read
    /// - `ModelError::ConfigParseError` if it is not a JSON object
    pub fn from_file(path: &Path) -> ModelResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| ModelError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check the declared architecture against the catalog.
    ///
    /// Legacy configs without `model_type` are accepted with a warning.
    ///
    /// # Errors
    /// - `ModelError::ArchitectureMismatch` if `model_type` differs from the catalog entry
    pub fn verify(&self, spec: &ModelSpec) -> ModelResult<()> {
        match self.model_type.as_deref() {
            Some(actual) if actual == spec.expected_model_type => Ok(()),
            Some(actual) => Err(ModelError::ArchitectureMismatch {
                repo_id: spec.repo_id.to_string(),
                expected: spec.expected_model_type,
                actual: actual.to_string(),
            }),
            None => {
                warn!(
                    "{} config has no model_type, assuming '{}'",
                    spec.repo_id, spec.expected_model_type
                );
                Ok(())
            }
        }
    }

    /// Raw access to any other config key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
