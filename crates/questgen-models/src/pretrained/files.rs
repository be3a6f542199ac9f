//! Choosing which files of a repository make up a checkpoint.

use std::path::PathBuf;

use tracing::warn;

use crate::error::{ModelError, ModelResult};
use crate::source::ModelSource;
use crate::types::{ModelSpec, RepoRef, TokenizerFamily};

pub const CONFIG_FILE: &str = "config.json";

const SAFETENSORS_FILE: &str = "model.safetensors";
const PICKLE_FILE: &str = "pytorch_model.bin";

/// On-disk format of the weight file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightsFormat {
    SafeTensors,
    /// PyTorch pickle (`pytorch_model.bin`), for checkpoints never converted.
    Pickle,
}

/// Files a tokenizer is built from. `T` is a repo-relative name before
/// fetching and a local path after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerAssets<T> {
    /// Serialized fast tokenizer.
    Fast { tokenizer: T },
    /// Byte-level BPE vocabulary and merges.
    Bpe { vocab: T, merges: T },
    /// WordPiece vocabulary.
    WordPiece { vocab: T },
}

/// The resolved artifacts of one checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles<T = String> {
    pub config: T,
    pub weights: T,
    pub format: WeightsFormat,
    pub tokenizer: TokenizerAssets<T>,
}

impl ModelFiles<String> {
    /// Pick the checkpoint files out of a repository listing.
    ///
    /// Prefers `model.safetensors` over `pytorch_model.bin` and
    /// `tokenizer.json` over the tokenizer family's legacy files.
    ///
    /// # Errors
    /// - `ModelError::MissingArtifact` naming the first artifact with no candidate
    pub fn resolve(spec: &ModelSpec, listing: &[String]) -> ModelResult<Self> {
        let has = |name: &str| listing.iter().any(|f| f == name);
        let missing = |artifact: &'static str, candidates: &[&'static str]| {
            ModelError::MissingArtifact {
                repo_id: spec.repo_id.to_string(),
                artifact,
                candidates: candidates.to_vec(),
            }
        };

        if !has(CONFIG_FILE) {
            return Err(missing("model config", &[CONFIG_FILE]));
        }

        let (weights, format) = if has(SAFETENSORS_FILE) {
            (SAFETENSORS_FILE, WeightsFormat::SafeTensors)
        } else if has(PICKLE_FILE) {
            warn!(
                "{} ships no safetensors, falling back to {}",
                spec.repo_id, PICKLE_FILE
            );
            (PICKLE_FILE, WeightsFormat::Pickle)
        } else {
            return Err(missing("weights", &[SAFETENSORS_FILE, PICKLE_FILE]));
        };

        let legacy = spec.tokenizer.legacy_files();
        let tokenizer = if has(TokenizerFamily::FAST_TOKENIZER_FILE) {
            TokenizerAssets::Fast {
                tokenizer: TokenizerFamily::FAST_TOKENIZER_FILE.to_string(),
            }
        } else if legacy.iter().all(|f| has(*f)) {
            if spec.tokenizer.is_byte_level() {
                TokenizerAssets::Bpe {
                    vocab: legacy[0].to_string(),
                    merges: legacy[1].to_string(),
                }
            } else {
                TokenizerAssets::WordPiece {
                    vocab: legacy[0].to_string(),
                }
            }
        } else {
            let mut candidates = vec![TokenizerFamily::FAST_TOKENIZER_FILE];
            candidates.extend_from_slice(legacy);
            return Err(missing("tokenizer", &candidates[..]));
        };

        Ok(Self {
            config: CONFIG_FILE.to_string(),
            weights: weights.to_string(),
            format,
            tokenizer,
        })
    }

    /// Every file name, config first and weights last.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        let mut names = vec![self.config.as_str()];
        match &self.tokenizer {
            TokenizerAssets::Fast { tokenizer } => names.push(tokenizer),
            TokenizerAssets::Bpe { vocab, merges } => {
                names.push(vocab);
                names.push(merges);
            }
            TokenizerAssets::WordPiece { vocab } => names.push(vocab),
        }
        names.push(&self.weights);
        names
    }

    /// Fetch every file through `source`, weights last (the largest download).
    ///
    /// # Errors
    /// Propagates the first fetch failure.
    pub fn fetch(&self, source: &dyn ModelSource, repo: &RepoRef) -> ModelResult<ModelFiles<PathBuf>> {
        let get = |name: &str| source.fetch(repo, name);

        let config = get(self.config.as_str())?;
        let tokenizer = match &self.tokenizer {
            TokenizerAssets::Fast { tokenizer } => TokenizerAssets::Fast {
                tokenizer: get(tokenizer.as_str())?,
            },
            TokenizerAssets::Bpe { vocab, merges } => TokenizerAssets::Bpe {
                vocab: get(vocab.as_str())?,
                merges: get(merges.as_str())?,
            },
            TokenizerAssets::WordPiece { vocab } => TokenizerAssets::WordPiece {
                vocab: get(vocab.as_str())?,
            },
        };
        let weights = get(self.weights.as_str())?;

        Ok(ModelFiles {
            config,
            weights,
            format: self.format,
            tokenizer,
        })
    }
}
