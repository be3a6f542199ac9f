//! `questgen download`: fetch everything ahead of service start.

use clap::Args;
use tracing::info;

use questgen_models::LanguageModels;

use super::{fail, SourceArgs};
use crate::error::CliExitCode;

#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Skip the Stanza package
    #[arg(long)]
    pub no_linguistic: bool,
}

/// Load in download-only mode and print the summary.
pub async fn download_command(source: &SourceArgs, args: DownloadArgs) -> i32 {
    let mut config = match source.resolve() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };
    config.download_only = true;
    if args.no_linguistic {
        config.linguistic.enabled = false;
    }

    match LanguageModels::load_async(config).await {
        Ok(models) => {
            info!("Language models downloaded");
            print!("{}", models.summary());
            CliExitCode::Success.into()
        }
        Err(e) => fail(&e),
    }
}
