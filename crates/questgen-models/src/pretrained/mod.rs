//! Pretrained checkpoints: artifact resolution, config, weights, tokenizer.
//!
//! A [`ModelBundle`] is the model+tokenizer pair the holder exposes. Model
//! architectures and inference live downstream; this module stops at
//! named tensors on a device and a ready tokenizer.

mod bundle;
mod config;
mod files;
mod tokenizer;
mod weights;

pub use bundle::{ModelBundle, PretrainedModel};
pub use config::ModelConfig;
pub use files::{ModelFiles, TokenizerAssets, WeightsFormat, CONFIG_FILE};
pub use tokenizer::load_tokenizer;
pub use weights::ModelWeights;
