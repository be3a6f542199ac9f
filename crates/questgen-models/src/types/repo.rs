//! Repository references resolved by a [`ModelSource`](crate::source::ModelSource).

use std::fmt;

use hf_hub::{Repo, RepoType};

/// Revision used when a repository reference does not pin one.
pub const DEFAULT_REVISION: &str = "main";

/// A repository on the Hub (or its mirror on disk) at a specific revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub repo_id: String,
    pub revision: String,
}

impl RepoRef {
    /// Reference the default branch of `repo_id`.
    #[must_use]
    pub fn main(repo_id: impl Into<String>) -> Self {
        Self::with_revision(repo_id, DEFAULT_REVISION)
    }

    #[must_use]
    pub fn with_revision(repo_id: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            repo_id: repo_id.into(),
            revision: revision.into(),
        }
    }

    /// Returns `true` when this reference points at the default branch.
    #[inline]
    #[must_use]
    pub fn is_default_revision(&self) -> bool {
        self.revision == DEFAULT_REVISION
    }

    /// Split `org/name` into its components. Ids without an org yield `("", id)`.
    #[must_use]
    pub fn org_and_name(&self) -> (&str, &str) {
        self.repo_id.split_once('/').unwrap_or(("", &self.repo_id))
    }

    /// Convert to the hf-hub repository handle.
    #[must_use]
    pub fn to_hub_repo(&self) -> Repo {
        Repo::with_revision(self.repo_id.clone(), RepoType::Model, self.revision.clone())
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default_revision() {
            write!(f, "{}", self.repo_id)
        } else {
            write!(f, "{}@{}", self.repo_id, self.revision)
        }
    }
}
