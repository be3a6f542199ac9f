//! English distractor-generation composite.
//!
//! Three BART generators propose distractors from different training
//! settings; a RoBERTa multiple-choice reranker picks among them. This type
//! only assembles and validates the loaded bundles. Generation and
//! selection run downstream.

use crate::error::{ModelError, ModelResult};
use crate::pretrained::ModelBundle;
use crate::types::model_id::DG_SELECTOR_INDEX;
use crate::types::{DgVariant, ModelFamily, ModelRole};

/// Loaded DG generators and their reranker.
#[derive(Debug)]
pub struct DistractorGenerator {
    generators: Vec<ModelBundle>,
    selector: ModelBundle,
}

impl DistractorGenerator {
    /// Assemble the composite.
    ///
    /// # Errors
    /// - `ModelError::ConfigError` unless `generators` holds exactly the
    ///   base, `-pm` and `-both` checkpoints in that order
    /// - `ModelError::ConfigError` unless `selector` is a multiple-choice model
    pub fn new(generators: Vec<ModelBundle>, selector: ModelBundle) -> ModelResult<Self> {
        let variants = DgVariant::all();
        if generators.len() != variants.len() {
            return Err(ModelError::config(format!(
                "distractor generation needs {} generators, got {}",
                variants.len(),
                generators.len()
            )));
        }
        for (variant, bundle) in variants.iter().zip(&generators) {
            let expected = variant.spec();
            if bundle.spec() != expected {
                return Err(ModelError::config(format!(
                    "generator slot '{}' expects {}, got {}",
                    variant,
                    expected.repo_id,
                    bundle.spec().repo_id
                )));
            }
        }
        if selector.spec().role != ModelRole::MultipleChoice {
            return Err(ModelError::config(format!(
                "distractor selector must be a multiple-choice model, {} is {}",
                selector.spec().repo_id,
                selector.spec().role
            )));
        }

        Ok(Self {
            generators,
            selector,
        })
    }

    /// Assemble from the DG family's bundles in catalog order.
    ///
    /// # Errors
    /// Same as [`DistractorGenerator::new`], plus a `ConfigError` when the
    /// bundle count does not match the family.
    pub fn from_family(mut bundles: Vec<ModelBundle>) -> ModelResult<Self> {
        let expected = ModelFamily::EnglishDg.specs().len();
        if bundles.len() != expected {
            return Err(ModelError::config(format!(
                "distractor family has {} models, got {}",
                expected,
                bundles.len()
            )));
        }
        let selector = bundles.remove(DG_SELECTOR_INDEX);
        Self::new(bundles, selector)
    }

    /// Generators in [`DgVariant`] order.
    #[must_use]
    pub fn generators(&self) -> &[ModelBundle] {
        &self.generators
    }

    #[must_use]
    pub fn generator(&self, variant: DgVariant) -> &ModelBundle {
        &self.generators[variant.index()]
    }

    /// The multiple-choice reranker.
    #[must_use]
    pub fn selector(&self) -> &ModelBundle {
        &self.selector
    }

    /// Every bundle holds weights and a vocabulary.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.generators.iter().all(ModelBundle::is_populated) && self.selector.is_populated()
    }
}
