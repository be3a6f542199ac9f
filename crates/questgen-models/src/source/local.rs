//! Directory mirror of model repositories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::types::RepoRef;

use super::ModelSource;

/// Serves repositories from `<root>/<org>/<name>/`.
///
/// A pinned revision other than `main` is looked up in `<root>/<org>/<name>@<rev>/`.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    /// # Errors
    /// - `ModelError::ConfigError` if `root` is not an existing directory
    pub fn new(root: impl AsRef<Path>) -> ModelResult<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ModelError::config(format!(
                "local model directory '{}' does not exist",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding `repo` inside the mirror.
    #[must_use]
    pub fn repo_dir(&self, repo: &RepoRef) -> PathBuf {
        let (org, name) = repo.org_and_name();
        let leaf = if repo.is_default_revision() {
            name.to_string()
        } else {
            format!("{}@{}", name, repo.revision)
        };
        if org.is_empty() {
            self.root.join(leaf)
        } else {
            self.root.join(org).join(leaf)
        }
    }
}

impl ModelSource for LocalSource {
    fn name(&self) -> &'static str {
        "local"
    }

    fn list_files(&self, repo: &RepoRef) -> ModelResult<Vec<String>> {
        let dir = self.repo_dir(repo);
        if !dir.is_dir() {
            return Err(ModelError::NotCached {
                repo_id: repo.to_string(),
                filename: String::new(),
                origin: self.name(),
            });
        }
        let mut files = Vec::new();
        collect_files(&dir, &dir, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn fetch(&self, repo: &RepoRef, filename: &str) -> ModelResult<PathBuf> {
        let path = self.repo_dir(repo).join(filename);
        if !path.is_file() {
            return Err(ModelError::NotCached {
                repo_id: repo.to_string(),
                filename: filename.to_string(),
                origin: self.name(),
            });
        }
        debug!("local: {}/{} -> {}", repo, filename, path.display());
        Ok(path)
    }
}

/// Recursively collect files under `dir` as `/`-separated paths relative to `base`.
pub(super) fn collect_files(base: &Path, dir: &Path, out: &mut Vec<String>) -> ModelResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(base, &path, out)?;
        } else if let Ok(rel) = path.strip_prefix(base) {
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            out.push(rel.join("/"));
        }
    }
    Ok(())
}
