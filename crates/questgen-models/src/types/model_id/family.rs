//! ModelFamily enum definition.

use serde::{Deserialize, Serialize};

use super::spec::{ModelSpec, DG_SPECS, EN_QGG_SPECS, EN_QG_SPECS, ZH_QG_SPECS};

/// The model groups bootstrapped at process start.
///
/// Each family is loaded by exactly one loader thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// English question generation (BART, seq2seq).
    EnglishQg,
    /// Chinese question generation (GPT-2, causal LM).
    ChineseQg,
    /// English question-group generation (BART).
    EnglishQgg,
    /// English distractor generation: three BART generators + RoBERTa reranker.
    EnglishDg,
}

impl ModelFamily {
    /// All families in loader spawn order.
    #[must_use]
    pub const fn all() -> &'static [ModelFamily] {
        &[
            Self::EnglishQg,
            Self::ChineseQg,
            Self::EnglishQgg,
            Self::EnglishDg,
        ]
    }

    /// Short snake_case name, also used as the holder attribute name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnglishQg => "en_qg",
            Self::ChineseQg => "zh_qg",
            Self::EnglishQgg => "en_qgg",
            Self::EnglishDg => "en_dg",
        }
    }

    /// The models that make up this family, in load order.
    #[must_use]
    pub const fn specs(&self) -> &'static [ModelSpec] {
        match self {
            Self::EnglishQg => EN_QG_SPECS,
            Self::ChineseQg => ZH_QG_SPECS,
            Self::EnglishQgg => EN_QGG_SPECS,
            Self::EnglishDg => DG_SPECS,
        }
    }
}
