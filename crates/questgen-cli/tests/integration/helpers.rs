//! Shared helpers: binary invocation and mirror fixtures.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process::Command;

use candle_core::{DType, Device, Tensor};
use tokenizers::models::wordlevel::WordLevel;
use tokenizers::Tokenizer;

use questgen_models::linguistic::STANZA_DEFAULT_PACKAGE;
use questgen_models::{LinguisticConfig, LinguisticResources, LocalSource, ModelSpec, TokenizerFamily};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LOAD_FAILED: i32 = 1;
pub const EXIT_CONFIG_INVALID: i32 = 2;

/// Env vars that would change how the binary resolves its configuration.
const SCRUBBED_ENV: &[&str] = &[
    "QUESTGEN_CONFIG",
    "QUESTGEN_DOWNLOAD_ONLY",
    "QUESTGEN_CACHE_DIR",
    "QUESTGEN_OFFLINE",
    "QUESTGEN_LOCAL_DIR",
    "QUESTGEN_PREFER_GPU",
    "QUESTGEN_CUDA_DEVICE",
    "QUESTGEN_LANGUAGE",
    "HF_TOKEN",
];

#[derive(Debug)]
pub struct CliOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the questgen binary with `args`.
pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_questgen"));
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    let output = cmd
        .env("RUST_LOG", "info")
        .env("QUESTGEN_PREFER_GPU", "false")
        .args(args)
        .output()
        .expect("failed to run questgen binary");
    CliOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Write every catalog checkpoint and the Stanza package under `root`.
pub fn write_mirror(root: &Path) {
    let source = LocalSource::new(root).expect("mirror root must exist");
    for spec in ModelSpec::all() {
        write_checkpoint(&source.repo_dir(&spec.repo()), spec);
    }
    let stanza = source.repo_dir(&LinguisticResources::repo(&LinguisticConfig::default()));
    let archive = stanza.join(STANZA_DEFAULT_PACKAGE);
    fs::create_dir_all(archive.parent().unwrap()).unwrap();
    fs::write(archive, b"PK\x05\x06stanza-en").unwrap();
}

/// Path of `spec`'s checkpoint directory inside the mirror at `root`.
pub fn checkpoint_dir(root: &Path, spec: &ModelSpec) -> std::path::PathBuf {
    LocalSource::new(root).unwrap().repo_dir(&spec.repo())
}

fn write_checkpoint(dir: &Path, spec: &ModelSpec) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("config.json"),
        format!(
            r#"{{"model_type":"{}","architectures":["Fixture"],"vocab_size":6}}"#,
            spec.expected_model_type
        ),
    )
    .unwrap();

    let mut tensors = HashMap::new();
    tensors.insert(
        "shared.weight".to_string(),
        Tensor::zeros((6, 2), DType::F32, &Device::Cpu).unwrap(),
    );
    candle_core::safetensors::save(&tensors, dir.join("model.safetensors")).unwrap();

    match spec.tokenizer {
        TokenizerFamily::BertWordpiece => {
            fs::write(dir.join("vocab.txt"), "[PAD]\n[UNK]\n[CLS]\n[SEP]\n問\n").unwrap();
        }
        TokenizerFamily::RobertaBpe => {
            fs::write(dir.join("vocab.json"), r#"{"<s>":0,"</s>":1,"x":2,"y":3,"xy":4}"#).unwrap();
            fs::write(dir.join("merges.txt"), "#version: 0.2\nx y\n").unwrap();
        }
        TokenizerFamily::BartBpe => {
            let vocab: HashMap<String, u32> = [("<unk>".to_string(), 0), ("question".to_string(), 1)]
                .into_iter()
                .collect();
            let model = WordLevel::builder()
                .vocab(vocab)
                .unk_token("<unk>".to_string())
                .build()
                .unwrap();
            Tokenizer::new(model)
                .save(dir.join("tokenizer.json"), false)
                .unwrap();
        }
    }
}
