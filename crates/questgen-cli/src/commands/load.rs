//! `questgen load`: the service's startup load, reported.

use clap::Args;

use questgen_models::{LanguageModels, ModelBundle};

use super::{fail, SourceArgs};
use crate::error::CliExitCode;

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Also print every checkpoint with its parameter count and device
    #[arg(long)]
    pub details: bool,
}

pub async fn load_command(source: &SourceArgs, args: LoadArgs) -> i32 {
    let config = match source.resolve() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    let models = match LanguageModels::load_async(config).await {
        Ok(models) => models,
        Err(e) => return fail(&e),
    };

    print!("{}", models.summary());
    if args.details {
        let mut bundles = vec![models.en_qg(), models.zh_qg(), models.en_qgg()];
        if let Some(dg) = models.en_dg() {
            bundles.extend(dg.generators());
            bundles.push(dg.selector());
        }
        for bundle in bundles {
            println!("{}", describe(bundle));
        }
        if let Some(linguistic) = models.linguistic() {
            println!(
                "stanza-{:<8} {:<48} {:>12} bytes",
                linguistic.language(),
                linguistic.archive().display(),
                linguistic.archive_bytes()
            );
        }
    }
    CliExitCode::Success.into()
}

fn describe(bundle: &ModelBundle) -> String {
    let spec = bundle.spec();
    let weights = bundle.model().weights();
    format!(
        "{:<14} {:<48} {:>12} params {:>12} bytes  {:?}",
        spec.name,
        spec.repo_id,
        weights.parameter_count(),
        weights.size_in_bytes(),
        weights.device()
    )
}
