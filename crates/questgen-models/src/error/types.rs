//! Core error types for model bootstrap.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::warm::LoadTask;

/// Error type for every failure while fetching or loading the pretrained models.
///
/// # Error Categories
///
/// | Category | Variants |
/// |----------|----------|
/// | Config | ConfigError, DeviceError |
/// | Network | HubError, NotCached |
/// | Artifact | MissingArtifact, ArchitectureMismatch, ConfigParseError, WeightsError, TokenizerError, IoError |
/// | Runtime | LoaderPanicked, InternalError, StartupFailed |
#[derive(Debug, Error)]
pub enum ModelError {
    // === Configuration Errors ===
    /// Configuration file invalid or missing required fields.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Requested compute device could not be initialized.
    #[error("Device error: {message}")]
    DeviceError { message: String },

    // === Network Errors ===
    /// Hub request failed (network, auth, 404).
    #[error("Hub request failed for {repo_id}/{filename}: {source}")]
    HubError {
        repo_id: String,
        filename: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The repository or file is absent from a source that cannot download
    /// (the offline Hub cache or a local mirror). `origin` names the source.
    #[error("{repo_id}/{filename} is not available from the {origin} source")]
    NotCached {
        repo_id: String,
        filename: String,
        origin: &'static str,
    },

    // === Artifact Errors ===
    /// Repository listing lacks every candidate file for an artifact.
    #[error("Repository {repo_id} has no {artifact} (looked for {candidates:?})")]
    MissingArtifact {
        repo_id: String,
        artifact: &'static str,
        candidates: Vec<&'static str>,
    },

    /// `config.json` declares a different architecture than the catalog expects.
    #[error("Architecture mismatch for {repo_id}: expected model_type '{expected}', found '{actual}'")]
    ArchitectureMismatch {
        repo_id: String,
        expected: &'static str,
        actual: String,
    },

    /// JSON/TOML document could not be parsed.
    #[error("Failed to parse {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// Weight file could not be read into tensors.
    #[error("Failed to load weights for {repo_id}: {message}")]
    WeightsError { repo_id: String, message: String },

    /// Tokenizer assets could not be turned into a tokenizer.
    #[error("Failed to load tokenizer for {repo_id}: {message}")]
    TokenizerError { repo_id: String, message: String },

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // === Runtime Errors ===
    /// A loader thread panicked instead of returning.
    #[error("Loader thread for {task} panicked: {message}")]
    LoaderPanicked { task: LoadTask, message: String },

    /// Internal error (should not occur in normal operation).
    #[error("Internal error: {message}")]
    InternalError { message: String },

    /// One or more loader threads failed. Every task still ran to completion.
    #[error("{} model loader(s) failed: {}", .failures.len(), join_failures(.failures))]
    StartupFailed { failures: Vec<TaskFailure> },
}

/// Result type alias for model bootstrap operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Coarse classification used for exit codes and log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Config,
    Network,
    Artifact,
    Runtime,
}

impl ModelError {
    /// Classify this error.
    ///
    /// `StartupFailed` takes the category of its first failure, so a
    /// startup that failed only because the network was down still reads
    /// as a network problem.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } | Self::DeviceError { .. } => ErrorCategory::Config,
            Self::HubError { .. } | Self::NotCached { .. } => ErrorCategory::Network,
            Self::MissingArtifact { .. }
            | Self::ArchitectureMismatch { .. }
            | Self::ConfigParseError { .. }
            | Self::WeightsError { .. }
            | Self::TokenizerError { .. }
            | Self::IoError(_) => ErrorCategory::Artifact,
            Self::LoaderPanicked { .. } | Self::InternalError { .. } => ErrorCategory::Runtime,
            Self::StartupFailed { failures } => failures
                .first()
                .map(|f| f.error.category())
                .unwrap_or(ErrorCategory::Runtime),
        }
    }

    /// Returns `true` for errors caused by the Hub or a cold offline cache.
    #[inline]
    #[must_use]
    pub fn is_network(&self) -> bool {
        self.category() == ErrorCategory::Network
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

/// Failure of a single loader task, reported after all tasks joined.
#[derive(Debug)]
pub struct TaskFailure {
    pub task: LoadTask,
    pub error: ModelError,
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.task, self.error)
    }
}

fn join_failures(failures: &[TaskFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
