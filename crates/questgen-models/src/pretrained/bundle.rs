//! Model + tokenizer pairs.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use candle_core::Device;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::error::ModelResult;
use crate::source::ModelSource;
use crate::types::{ModelSpec, Placement};

use super::config::ModelConfig;
use super::files::ModelFiles;
use super::tokenizer::load_tokenizer;
use super::weights::ModelWeights;

/// A checkpoint loaded into memory: its config and weights.
#[derive(Debug, Clone)]
pub struct PretrainedModel {
    spec: &'static ModelSpec,
    config: ModelConfig,
    weights: ModelWeights,
    files: ModelFiles<PathBuf>,
}

impl PretrainedModel {
    #[must_use]
    pub fn spec(&self) -> &'static ModelSpec {
        self.spec
    }

    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    #[must_use]
    pub fn weights(&self) -> &ModelWeights {
        &self.weights
    }

    /// Local paths of the files the model was loaded from.
    #[must_use]
    pub fn files(&self) -> &ModelFiles<PathBuf> {
        &self.files
    }
}

/// The model/tokenizer pair exposed by the holder.
pub struct ModelBundle {
    model: PretrainedModel,
    tokenizer: Tokenizer,
}

impl ModelBundle {
    /// Resolve, fetch and load one checkpoint.
    ///
    /// Weights go to `preferred` when `spec.placement` is
    /// [`Placement::Preferred`], to the CPU otherwise.
    ///
    /// # Errors
    /// Any listing, fetch, parse, architecture or load failure for this checkpoint.
    pub fn fetch(
        source: &dyn ModelSource,
        spec: &'static ModelSpec,
        preferred: &Device,
    ) -> ModelResult<Self> {
        let started = Instant::now();
        let repo = spec.repo();

        let listing = source.list_files(&repo)?;
        let files = ModelFiles::resolve(spec, &listing)?.fetch(source, &repo)?;

        let config = ModelConfig::from_file(&files.config)?;
        config.verify(spec)?;

        let tokenizer = load_tokenizer(spec.repo_id, &files.tokenizer)?;

        let device = match spec.placement {
            Placement::Cpu => Device::Cpu,
            Placement::Preferred => preferred.clone(),
        };
        let weights = ModelWeights::load(spec.repo_id, &files.weights, files.format, &device)?;

        debug!(
            "{} ready via {} in {:.2}s ({} params)",
            spec.repo_id,
            source.name(),
            started.elapsed().as_secs_f64(),
            weights.parameter_count()
        );

        Ok(Self {
            model: PretrainedModel {
                spec,
                config,
                weights,
                files,
            },
            tokenizer,
        })
    }

    #[must_use]
    pub fn model(&self) -> &PretrainedModel {
        &self.model
    }

    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[must_use]
    pub fn spec(&self) -> &'static ModelSpec {
        self.model.spec
    }

    /// Both halves hold data: at least one tensor and a non-empty vocabulary.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.model.weights.is_empty() && self.tokenizer.get_vocab_size(true) > 0
    }
}

impl fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBundle")
            .field("repo_id", &self.model.spec.repo_id)
            .field("tensors", &self.model.weights.len())
            .field("vocab_size", &self.tokenizer.get_vocab_size(true))
            .finish()
    }
}
