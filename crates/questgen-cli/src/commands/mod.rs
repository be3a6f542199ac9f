//! CLI command handlers
//!
//! # Modules
//!
//! - `download`: Pre-download mode
//! - `load`: Full startup load
//! - `list`: Catalog listing

mod download;
mod list;
mod load;

pub use download::{download_command, DownloadArgs};
pub use list::{list_command, ListArgs};
pub use load::{load_command, LoadArgs};

use std::path::PathBuf;

use clap::Args;
use tracing::{debug, error};

use questgen_models::{ModelError, ModelResult, ModelsConfig};

use crate::error::CliExitCode;

/// Where models come from. Shared by every command.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// TOML configuration file
    #[arg(long, env = "QUESTGEN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Hugging Face cache directory
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Serve models from a directory mirror instead of the Hub
    #[arg(long, global = true)]
    pub local_dir: Option<PathBuf>,

    /// Only use files already in the cache
    #[arg(long, global = true)]
    pub offline: bool,
}

impl SourceArgs {
    /// File (or defaults), then environment, then flags.
    pub fn resolve(&self) -> ModelResult<ModelsConfig> {
        let config = match &self.config {
            Some(path) => ModelsConfig::from_file(path)?,
            None => ModelsConfig::default(),
        };
        let mut config = config.with_env_overrides();
        if let Some(dir) = &self.cache_dir {
            config.hub.cache_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.local_dir {
            config.hub.local_dir = Some(dir.clone());
        }
        if self.offline {
            config.hub.offline = true;
        }
        config.validate()?;
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

/// Log `err` and map it to an exit code.
pub(crate) fn fail(err: &ModelError) -> i32 {
    error!("{err}");
    if let ModelError::StartupFailed { failures } = err {
        for failure in failures {
            eprintln!("  {failure}");
        }
    }
    CliExitCode::from(err).into()
}
