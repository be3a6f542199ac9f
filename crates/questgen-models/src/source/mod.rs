//! Where model repositories come from.
//!
//! Loader threads share one [`ModelSource`] behind an `Arc`. The Hub source
//! wraps the hf-hub sync API; the local source serves a directory mirror
//! laid out as `<root>/<org>/<name>/<file>`.

mod hub;
mod local;

pub use hub::HubSource;
pub use local::LocalSource;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::HubConfig;
use crate::error::ModelResult;
use crate::types::RepoRef;

/// Fetch-by-name access to model repositories.
///
/// Implementations must be safe to call from several loader threads at once.
pub trait ModelSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Relative paths of every file in the repository.
    ///
    /// # Errors
    /// - `ModelError::HubError` if the listing request fails
    /// - `ModelError::NotCached` if the repository is not available offline
    fn list_files(&self, repo: &RepoRef) -> ModelResult<Vec<String>>;

    /// Make `filename` available locally and return its path.
    ///
    /// # Errors
    /// - `ModelError::HubError` if the download fails
    /// - `ModelError::NotCached` if the file is not available offline
    fn fetch(&self, repo: &RepoRef, filename: &str) -> ModelResult<PathBuf>;
}

/// Build the source described by `config`.
///
/// `local_dir` wins over the Hub; otherwise a [`HubSource`] is built, online
/// or cache-only depending on `offline`.
///
/// # Errors
/// - `ModelError::ConfigError` if the local directory does not exist
/// - `ModelError::HubError` if the hf-hub client cannot be built
pub fn source_from_config(config: &HubConfig) -> ModelResult<Arc<dyn ModelSource>> {
    if let Some(root) = &config.local_dir {
        return Ok(Arc::new(LocalSource::new(root)?));
    }
    Ok(Arc::new(HubSource::new(config)?))
}
