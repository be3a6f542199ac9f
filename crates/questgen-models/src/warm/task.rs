//! The units of work run by loader threads.

use std::fmt;

use crate::config::ModelsConfig;
use crate::types::ModelFamily;

/// One loader thread's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadTask {
    /// Fetch and load every model of a family.
    Family(ModelFamily),
    /// Fetch the Stanza language package.
    LinguisticResources,
}

impl LoadTask {
    /// Tasks run for `config`, in spawn order.
    #[must_use]
    pub fn planned(config: &ModelsConfig) -> Vec<LoadTask> {
        let mut tasks: Vec<LoadTask> = ModelFamily::all().iter().copied().map(Self::Family).collect();
        if config.linguistic.enabled {
            tasks.push(Self::LinguisticResources);
        }
        tasks
    }

    /// Short name, also used for the thread name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Family(family) => family.as_str(),
            Self::LinguisticResources => "linguistic",
        }
    }
}

impl fmt::Display for LoadTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Family(family) => write!(f, "{family} model"),
            Self::LinguisticResources => write!(f, "linguistic resources"),
        }
    }
}
