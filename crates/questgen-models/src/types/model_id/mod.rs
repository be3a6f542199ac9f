//! ModelFamily enum identifying the four model groups loaded at startup.
//!
//! Each family maps to one or more [`ModelSpec`]s. QG and QGG families hold a
//! single model; the DG family holds three generators plus the reranker that
//! selects among their outputs.

mod conversions;
mod family;
mod display;
mod spec;
mod tokenizer;


pub use self::family::ModelFamily;
pub use self::spec::{
    DgVariant, ModelRole, ModelSpec, Placement, DISTRACTOR_GENERATION_BOTH_MODEL,
    DISTRACTOR_GENERATION_ENG_MODEL, DISTRACTOR_GENERATION_PM_MODEL,
    DISTRACTOR_GENERATION_SELECTION_RL_MODEL, QUESTION_GENERATION_CHT_MODEL,
    QUESTION_GENERATION_ENG_MODEL, QUESTION_GROUP_GENERATION_MODEL,
};
pub use self::tokenizer::TokenizerFamily;

pub(crate) use self::spec::DG_SELECTOR_INDEX;
