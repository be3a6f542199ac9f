//! Pretrained language model bootstrap for question generation.
//!
//! This crate fetches and loads, concurrently and once at startup:
//! - English question generation (BART)
//! - Chinese question generation (GPT-2)
//! - English question-group generation
//! - English distractor generation: three BART generators and a RoBERTa
//!   multiple-choice reranker
//! - The Stanza package used for sentence analysis
//!
//! Models come from the Hugging Face Hub through `hf-hub`, from its local
//! cache when offline, or from a plain directory mirror. Weights are loaded
//! into `candle` tensors and tokenizers into `tokenizers::Tokenizer`.
//!
//! # Example
//!
//! ```no_run
//! use questgen_models::{LanguageModels, ModelsConfig};
//!
//! let config = ModelsConfig::default().with_env_overrides();
//! let models = LanguageModels::new(&config)?;
//! println!("{}", models.summary());
//! let dg = models.en_dg().expect("built outside download-only mode");
//! assert_eq!(dg.generators().len(), 3);
//! # Ok::<(), questgen_models::ModelError>(())
//! ```

pub mod config;
pub mod distractor;
pub mod error;
pub mod linguistic;
pub mod pretrained;
pub mod source;
pub mod types;
pub mod warm;

#[cfg(test)]
mod test_support;

pub use config::{DeviceConfig, HubConfig, LinguisticConfig, ModelsConfig};
pub use distractor::DistractorGenerator;
pub use error::{ErrorCategory, ModelError, ModelResult, TaskFailure};
pub use linguistic::LinguisticResources;
pub use pretrained::{ModelBundle, PretrainedModel};
pub use source::{source_from_config, HubSource, LocalSource, ModelSource};
pub use types::{DgVariant, ModelFamily, ModelRole, ModelSpec, Placement, RepoRef, TokenizerFamily};
pub use warm::{LanguageModels, LoadTask, LoadingSummary};
