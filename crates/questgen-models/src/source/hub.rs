//! Hugging Face Hub source backed by the hf-hub sync API.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use hf_hub::api::sync::{Api, ApiBuilder};
use hf_hub::Cache;
use tracing::{debug, info};

use crate::config::HubConfig;
use crate::error::{ModelError, ModelResult};
use crate::types::RepoRef;

use super::local::collect_files;
use super::ModelSource;

/// Hub client. In offline mode no client is built and every request is
/// answered from the on-disk cache.
#[derive(Clone)]
pub struct HubSource {
    api: Option<Api>,
    cache: Cache,
}

impl HubSource {
    /// # Errors
    /// - `ModelError::HubError` if the HTTP client cannot be built
    pub fn new(config: &HubConfig) -> ModelResult<Self> {
        let cache = match &config.cache_dir {
            Some(dir) => Cache::new(dir.clone()),
            None => Cache::default(),
        };

        if config.offline {
            info!("Hub source offline, cache at {}", cache.path().display());
            return Ok(Self { api: None, cache });
        }

        let mut builder = ApiBuilder::new()
            .with_progress(false)
            .with_cache_dir(cache.path().clone());
        if config.token.is_some() {
            builder = builder.with_token(config.token.clone());
        }
        let api = builder.build().map_err(|e| ModelError::HubError {
            repo_id: String::new(),
            filename: String::new(),
            source: Box::new(e),
        })?;

        debug!("Hub source online, cache at {}", cache.path().display());
        Ok(Self {
            api: Some(api),
            cache,
        })
    }

    /// Returns `true` when requests are answered from the cache only.
    #[inline]
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.api.is_none()
    }

    /// Snapshot directory of `repo` in the cache, if its revision was ever resolved.
    fn cached_snapshot(&self, repo: &RepoRef) -> Option<PathBuf> {
        let repo_dir = self.cache.path().join(repo.to_hub_repo().folder_name());
        let commit = fs::read_to_string(repo_dir.join("refs").join(&repo.revision))
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| repo.revision.clone());
        let snapshot = repo_dir.join("snapshots").join(commit);
        snapshot.is_dir().then_some(snapshot)
    }
}

impl fmt::Debug for HubSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubSource")
            .field("offline", &self.is_offline())
            .field("cache", &self.cache.path())
            .finish()
    }
}

impl ModelSource for HubSource {
    fn name(&self) -> &'static str {
        if self.is_offline() {
            "hub-offline"
        } else {
            "hub"
        }
    }

    fn list_files(&self, repo: &RepoRef) -> ModelResult<Vec<String>> {
        let Some(api) = &self.api else {
            let snapshot = self.cached_snapshot(repo).ok_or_else(|| ModelError::NotCached {
                repo_id: repo.to_string(),
                filename: String::new(),
                origin: self.name(),
            })?;
            let mut files = Vec::new();
            collect_files(&snapshot, &snapshot, &mut files)?;
            files.sort();
            return Ok(files);
        };

        let info = api
            .repo(repo.to_hub_repo())
            .info()
            .map_err(|e| ModelError::HubError {
                repo_id: repo.to_string(),
                filename: String::new(),
                source: Box::new(e),
            })?;
        Ok(info.siblings.into_iter().map(|s| s.rfilename).collect())
    }

    fn fetch(&self, repo: &RepoRef, filename: &str) -> ModelResult<PathBuf> {
        let Some(api) = &self.api else {
            return self
                .cache
                .repo(repo.to_hub_repo())
                .get(filename)
                .ok_or_else(|| ModelError::NotCached {
                    repo_id: repo.to_string(),
                    filename: filename.to_string(),
                    origin: self.name(),
                });
        };

        // `get` answers from the cache when the file is already there.
        let path = api
            .repo(repo.to_hub_repo())
            .get(filename)
            .map_err(|e| ModelError::HubError {
                repo_id: repo.to_string(),
                filename: filename.to_string(),
                source: Box::new(e),
            })?;
        debug!("hub: {}/{} -> {}", repo, filename, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline(cache_dir: PathBuf) -> HubSource {
        HubSource::new(&HubConfig {
            cache_dir: Some(cache_dir),
            offline: true,
            ..HubConfig::default()
        })
        .unwrap()
    }

    /// Lay out a repository the way hf-hub caches it.
    fn seed_cache(cache_dir: &std::path::Path, repo: &RepoRef, files: &[&str]) {
        let repo_dir = cache_dir.join(repo.to_hub_repo().folder_name());
        let commit = "0123456789abcdef0123456789abcdef01234567";
        fs::create_dir_all(repo_dir.join("refs")).unwrap();
        fs::write(repo_dir.join("refs").join(&repo.revision), commit).unwrap();
        let snapshot = repo_dir.join("snapshots").join(commit);
        for file in files {
            let path = snapshot.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"x").unwrap();
        }
    }

    #[test]
    fn test_offline_lists_cached_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RepoRef::main("p208p2002/bart-squad-qg-hl");
        seed_cache(dir.path(), &repo, &["config.json", "tokenizer.json"]);

        let source = offline(dir.path().to_path_buf());
        assert!(source.is_offline());
        assert_eq!(source.name(), "hub-offline");
        assert_eq!(
            source.list_files(&repo).unwrap(),
            vec!["config.json".to_string(), "tokenizer.json".to_string()]
        );
    }

    #[test]
    fn test_offline_fetch_hits_cache() {
        let dir = tempfile::tempdir().unwrap();
        let repo = RepoRef::main("p208p2002/qmst-qgg");
        seed_cache(dir.path(), &repo, &["config.json"]);

        let source = offline(dir.path().to_path_buf());
        let path = source.fetch(&repo, "config.json").unwrap();
        assert!(path.ends_with("config.json"));
    }

    #[test]
    fn test_debug_shows_mode_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let source = offline(dir.path().to_path_buf());
        let printed = format!("{source:?}");
        assert!(printed.starts_with("HubSource"), "{printed}");
        assert!(printed.contains("offline: true"), "{printed}");
        assert!(printed.contains(&dir.path().display().to_string()), "{printed}");
    }

    #[test]
    fn test_offline_miss_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let source = offline(dir.path().to_path_buf());
        let repo = RepoRef::main("voidful/bart-distractor-generation");

        let err = source.list_files(&repo).unwrap_err();
        assert!(matches!(err, ModelError::NotCached { .. }));

        let err = source.fetch(&repo, "config.json").unwrap_err();
        assert!(err.to_string().contains("not available from the hub-offline source"));
    }
}
