//! Catalog types: which models exist, where they live, how to fetch them.

pub mod model_id;
mod repo;

pub use model_id::{
    DgVariant, ModelFamily, ModelRole, ModelSpec, Placement, TokenizerFamily,
    DISTRACTOR_GENERATION_BOTH_MODEL, DISTRACTOR_GENERATION_ENG_MODEL,
    DISTRACTOR_GENERATION_PM_MODEL, DISTRACTOR_GENERATION_SELECTION_RL_MODEL,
    QUESTION_GENERATION_CHT_MODEL, QUESTION_GENERATION_ENG_MODEL, QUESTION_GROUP_GENERATION_MODEL,
};
pub use repo::{RepoRef, DEFAULT_REVISION};
