//! On-disk fixtures shared by unit tests.
//!
//! Writes a complete local mirror of the catalog: tiny but real checkpoints
//! (safetensors + config + tokenizer assets) and a Stanza package archive.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use candle_core::{DType, Device, Tensor};
use tokenizers::models::wordlevel::WordLevel;
use tokenizers::Tokenizer;

use crate::config::LinguisticConfig;
use crate::error::ModelResult;
use crate::linguistic::{LinguisticResources, STANZA_DEFAULT_PACKAGE};
use crate::source::{LocalSource, ModelSource};
use crate::types::{ModelSpec, RepoRef, TokenizerFamily};

/// Write every catalog checkpoint plus the default Stanza package under `root`.
pub fn write_mirror(root: &Path) {
    let source = LocalSource::new(root).unwrap();
    for spec in ModelSpec::all() {
        write_checkpoint(&source.repo_dir(&spec.repo()), spec, spec.expected_model_type);
    }
    let stanza = source.repo_dir(&LinguisticResources::repo(&LinguisticConfig::default()));
    let archive = stanza.join(STANZA_DEFAULT_PACKAGE);
    fs::create_dir_all(archive.parent().unwrap()).unwrap();
    fs::write(archive, b"PK\x05\x06stanza").unwrap();
}

/// Write one checkpoint into `dir` declaring `model_type`.
///
/// Tokenizer assets follow `spec.tokenizer` so every loader path runs:
/// WordPiece families ship `vocab.txt`, the RoBERTa reranker ships
/// `vocab.json` + `merges.txt`, everything else ships `tokenizer.json`.
pub fn write_checkpoint(dir: &Path, spec: &ModelSpec, model_type: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("config.json"),
        format!(r#"{{"model_type":"{model_type}","architectures":["Fixture"],"vocab_size":8}}"#),
    )
    .unwrap();

    let mut tensors = HashMap::new();
    tensors.insert(
        "embed_tokens.weight".to_string(),
        Tensor::ones((8, 4), DType::F32, &Device::Cpu).unwrap(),
    );
    candle_core::safetensors::save(&tensors, dir.join("model.safetensors")).unwrap();

    match spec.tokenizer {
        TokenizerFamily::BertWordpiece => {
            fs::write(dir.join("vocab.txt"), "[PAD]\n[UNK]\n[CLS]\n[SEP]\n問\n題\n").unwrap();
        }
        TokenizerFamily::RobertaBpe => {
            fs::write(dir.join("vocab.json"), r#"{"<s>":0,"</s>":1,"a":2,"b":3,"ab":4}"#).unwrap();
            fs::write(dir.join("merges.txt"), "#version: 0.2\na b\n").unwrap();
        }
        TokenizerFamily::BartBpe => write_fast_tokenizer(&dir.join("tokenizer.json")),
    }
}

fn write_fast_tokenizer(path: &Path) {
    let vocab: HashMap<String, u32> = ["<unk>", "what", "is", "the", "answer"]
        .iter()
        .enumerate()
        .map(|(i, t)| (t.to_string(), i as u32))
        .collect();
    let model = WordLevel::builder()
        .vocab(vocab)
        .unk_token("<unk>".to_string())
        .build()
        .unwrap();
    Tokenizer::new(model).save(path, false).unwrap();
}

/// Source wrapper that sleeps before every listing and records every fetch.
pub struct RecordingSource {
    inner: LocalSource,
    list_delay: Duration,
    fetched: Mutex<Vec<(String, String)>>,
}

impl RecordingSource {
    pub fn new(root: &Path, list_delay: Duration) -> Self {
        Self {
            inner: LocalSource::new(root).unwrap(),
            list_delay,
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Repository ids that had at least one file fetched.
    pub fn fetched_repos(&self) -> Vec<String> {
        let mut repos: Vec<String> = self
            .fetched
            .lock()
            .unwrap()
            .iter()
            .map(|(repo, _)| repo.clone())
            .collect();
        repos.sort();
        repos.dedup();
        repos
    }
}

impl ModelSource for RecordingSource {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn list_files(&self, repo: &RepoRef) -> ModelResult<Vec<String>> {
        thread::sleep(self.list_delay);
        self.inner.list_files(repo)
    }

    fn fetch(&self, repo: &RepoRef, filename: &str) -> ModelResult<PathBuf> {
        self.fetched
            .lock()
            .unwrap()
            .push((repo.repo_id.clone(), filename.to_string()));
        self.inner.fetch(repo, filename)
    }
}

/// Source whose listing panics, for loader panic handling.
pub struct PanickingSource;

impl ModelSource for PanickingSource {
    fn name(&self) -> &'static str {
        "panicking"
    }

    fn list_files(&self, repo: &RepoRef) -> ModelResult<Vec<String>> {
        panic!("listing {repo} blew up");
    }

    fn fetch(&self, repo: &RepoRef, filename: &str) -> ModelResult<PathBuf> {
        panic!("fetching {repo}/{filename} blew up");
    }
}
