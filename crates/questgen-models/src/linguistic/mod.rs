//! Auxiliary linguistic resources fetched next to the models.
//!
//! The question-generation pipeline tokenizes and sentence-splits passages
//! with Stanza. Its language packages are published on the Hub as
//! `stanfordnlp/stanza-<lang>`, tagged `v<version>`; the default package is
//! one archive, `models/default.zip`. Only the archive is fetched here.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::LinguisticConfig;
use crate::error::{ModelError, ModelResult};
use crate::source::ModelSource;
use crate::types::RepoRef;

/// Organization hosting the Stanza language packages.
pub const STANZA_ORG: &str = "stanfordnlp";

/// Default package archive inside a language repository.
pub const STANZA_DEFAULT_PACKAGE: &str = "models/default.zip";

/// A downloaded Stanza language package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinguisticResources {
    language: String,
    version: String,
    archive: PathBuf,
    archive_bytes: u64,
}

impl LinguisticResources {
    /// Repository holding the package for `config`.
    #[must_use]
    pub fn repo(config: &LinguisticConfig) -> RepoRef {
        RepoRef::with_revision(
            format!("{}/stanza-{}", STANZA_ORG, config.language),
            format!("v{}", config.stanza_version),
        )
    }

    /// Fetch the default package archive for the configured language.
    ///
    /// # Errors
    /// - Fetch errors from `source`
    /// - `ModelError::IoError` if the archive cannot be inspected
    /// - `ModelError::MissingArtifact` if the archive is empty
    pub fn download(source: &dyn ModelSource, config: &LinguisticConfig) -> ModelResult<Self> {
        let repo = Self::repo(config);
        info!("Downloading Stanza '{}' package from {}", config.language, repo);

        let archive = source.fetch(&repo, STANZA_DEFAULT_PACKAGE)?;
        let archive_bytes = std::fs::metadata(&archive)?.len();
        if archive_bytes == 0 {
            return Err(ModelError::MissingArtifact {
                repo_id: repo.to_string(),
                artifact: "stanza package",
                candidates: vec![STANZA_DEFAULT_PACKAGE],
            });
        }

        Ok(Self {
            language: config.language.clone(),
            version: config.stanza_version.clone(),
            archive,
            archive_bytes,
        })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Local path of the package archive.
    #[must_use]
    pub fn archive(&self) -> &Path {
        &self.archive
    }

    #[must_use]
    pub fn archive_bytes(&self) -> u64 {
        self.archive_bytes
    }
}
