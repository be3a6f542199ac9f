//! `questgen list`: print the catalog.

use clap::Args;

use questgen_models::{ModelFamily, ModelSpec};

use crate::error::CliExitCode;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only this family (en_qg, zh_qg, en_qgg, en_dg)
    #[arg(long)]
    pub family: Option<ModelFamily>,
}

pub fn list_command(args: ListArgs) -> i32 {
    let families: Vec<ModelFamily> = match args.family {
        Some(family) => vec![family],
        None => ModelFamily::all().to_vec(),
    };
    for family in families {
        println!("{family} ({})", family.as_str());
        for spec in family.specs() {
            println!("  {}", row(spec));
        }
    }
    CliExitCode::Success.into()
}

fn row(spec: &ModelSpec) -> String {
    format!(
        "{:<12} {:<48} {:<16} {:<8} {:?}/{:?}",
        spec.name,
        spec.repo_id,
        spec.role.to_string(),
        spec.expected_model_type,
        spec.tokenizer,
        spec.placement
    )
}
