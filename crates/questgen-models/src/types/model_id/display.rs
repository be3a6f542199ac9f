//! Display implementations for catalog enums.

use super::family::ModelFamily;
use super::spec::{DgVariant, ModelRole};

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::EnglishQg => "English QG",
            Self::ChineseQg => "Chinese QG",
            Self::EnglishQgg => "English QGG",
            Self::EnglishDg => "English DG",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for ModelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Seq2Seq => "seq2seq-lm",
            Self::CausalLm => "causal-lm",
            Self::ConditionalGeneration => "conditional-generation",
            Self::MultipleChoice => "multiple-choice",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for DgVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::PassageMasked => "pm",
            Self::Both => "both",
        };
        write!(f, "{name}")
    }
}
