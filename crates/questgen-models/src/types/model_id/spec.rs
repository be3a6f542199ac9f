//! Static catalog of the published models behind each family.

use crate::types::RepoRef;

use super::family::ModelFamily;
use super::tokenizer::TokenizerFamily;

pub const QUESTION_GENERATION_ENG_MODEL: &str = "p208p2002/bart-squad-qg-hl";
pub const QUESTION_GENERATION_CHT_MODEL: &str = "p208p2002/gpt2-drcd-qg-hl";
pub const QUESTION_GROUP_GENERATION_MODEL: &str = "p208p2002/qmst-qgg";
pub const DISTRACTOR_GENERATION_ENG_MODEL: &str = "voidful/bart-distractor-generation";
pub const DISTRACTOR_GENERATION_PM_MODEL: &str = "voidful/bart-distractor-generation-pm";
pub const DISTRACTOR_GENERATION_BOTH_MODEL: &str = "voidful/bart-distractor-generation-both";
pub const DISTRACTOR_GENERATION_SELECTION_RL_MODEL: &str = "LIAMF-USP/roberta-large-finetuned-race";

/// Head the checkpoint was fine-tuned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelRole {
    /// Encoder-decoder LM head (`AutoModelForSeq2SeqLM`).
    Seq2Seq,
    /// Decoder-only LM head (`AutoModelForCausalLM`).
    CausalLm,
    /// BART with the conditional-generation head.
    ConditionalGeneration,
    /// Encoder with a multiple-choice classification head.
    MultipleChoice,
}

/// Where the loaded weights are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Always host memory.
    Cpu,
    /// The configured device: CUDA when available and preferred, else CPU.
    Preferred,
}

/// One published checkpoint and the expectations we hold about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelSpec {
    pub family: ModelFamily,
    /// Stable short name, unique across the catalog.
    pub name: &'static str,
    pub repo_id: &'static str,
    pub role: ModelRole,
    pub tokenizer: TokenizerFamily,
    /// Value of `model_type` in the checkpoint's `config.json`.
    pub expected_model_type: &'static str,
    pub placement: Placement,
}

impl ModelSpec {
    /// Repository reference at the default revision.
    #[must_use]
    pub fn repo(&self) -> RepoRef {
        RepoRef::main(self.repo_id)
    }

    /// Look up a spec by its short name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static ModelSpec> {
        ModelSpec::all().find(|spec| spec.name == name)
    }

    /// Every spec in the catalog, family by family.
    pub fn all() -> impl Iterator<Item = &'static ModelSpec> {
        ModelFamily::all().iter().flat_map(|family| family.specs().iter())
    }
}

pub(super) const EN_QG_SPECS: &[ModelSpec] = &[ModelSpec {
    family: ModelFamily::EnglishQg,
    name: "en_qg",
    repo_id: QUESTION_GENERATION_ENG_MODEL,
    role: ModelRole::Seq2Seq,
    tokenizer: TokenizerFamily::BartBpe,
    expected_model_type: "bart",
    placement: Placement::Cpu,
}];

pub(super) const ZH_QG_SPECS: &[ModelSpec] = &[ModelSpec {
    family: ModelFamily::ChineseQg,
    name: "zh_qg",
    repo_id: QUESTION_GENERATION_CHT_MODEL,
    role: ModelRole::CausalLm,
    // GPT-2 weights paired with a BERT vocabulary (Chinese characters).
    tokenizer: TokenizerFamily::BertWordpiece,
    expected_model_type: "gpt2",
    placement: Placement::Cpu,
}];

pub(super) const EN_QGG_SPECS: &[ModelSpec] = &[ModelSpec {
    family: ModelFamily::EnglishQgg,
    name: "en_qgg",
    repo_id: QUESTION_GROUP_GENERATION_MODEL,
    role: ModelRole::ConditionalGeneration,
    tokenizer: TokenizerFamily::BartBpe,
    expected_model_type: "bart",
    placement: Placement::Preferred,
}];

pub(super) const DG_SPECS: &[ModelSpec] = &[
    ModelSpec {
        family: ModelFamily::EnglishDg,
        name: "en_dg",
        repo_id: DISTRACTOR_GENERATION_ENG_MODEL,
        role: ModelRole::Seq2Seq,
        tokenizer: TokenizerFamily::BartBpe,
        expected_model_type: "bart",
        placement: Placement::Cpu,
    },
    ModelSpec {
        family: ModelFamily::EnglishDg,
        name: "en_dg_pm",
        repo_id: DISTRACTOR_GENERATION_PM_MODEL,
        role: ModelRole::Seq2Seq,
        tokenizer: TokenizerFamily::BartBpe,
        expected_model_type: "bart",
        placement: Placement::Cpu,
    },
    ModelSpec {
        family: ModelFamily::EnglishDg,
        name: "en_dg_both",
        repo_id: DISTRACTOR_GENERATION_BOTH_MODEL,
        role: ModelRole::Seq2Seq,
        tokenizer: TokenizerFamily::BartBpe,
        expected_model_type: "bart",
        placement: Placement::Cpu,
    },
    ModelSpec {
        family: ModelFamily::EnglishDg,
        name: "en_dg_rl",
        repo_id: DISTRACTOR_GENERATION_SELECTION_RL_MODEL,
        role: ModelRole::MultipleChoice,
        tokenizer: TokenizerFamily::RobertaBpe,
        expected_model_type: "roberta",
        placement: Placement::Cpu,
    },
];

/// The three distractor generators, trained on different answer contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DgVariant {
    /// Plain distractor generation.
    Base,
    /// Trained with the passage masked (`-pm`).
    PassageMasked,
    /// Trained on both settings (`-both`).
    Both,
}

impl DgVariant {
    #[must_use]
    pub const fn all() -> [DgVariant; 3] {
        [Self::Base, Self::PassageMasked, Self::Both]
    }

    /// Position of this generator in the DG family's spec list.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Base => 0,
            Self::PassageMasked => 1,
            Self::Both => 2,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &'static ModelSpec {
        &DG_SPECS[self.index()]
    }
}

/// Index of the reranker within the DG family's spec list.
pub(crate) const DG_SELECTOR_INDEX: usize = 3;
