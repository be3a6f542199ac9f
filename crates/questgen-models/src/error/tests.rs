//! Tests for model bootstrap error types.

use std::error::Error;
use std::path::PathBuf;

use super::*;
use crate::types::ModelFamily;
use crate::warm::LoadTask;

// ============================================================
// DISPLAY TESTS
// ============================================================

#[test]
fn test_hub_error_preserves_source() {
    let source = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let err = ModelError::HubError {
        repo_id: "p208p2002/qmst-qgg".to_string(),
        filename: "config.json".to_string(),
        source: Box::new(source),
    };
    let msg = err.to_string();
    assert!(msg.contains("p208p2002/qmst-qgg/config.json"));
    assert!(msg.contains("connection refused"));
    assert!(err.source().is_some());
}

#[test]
fn test_missing_artifact_lists_candidates() {
    let err = ModelError::MissingArtifact {
        repo_id: "voidful/bart-distractor-generation".to_string(),
        artifact: "weights",
        candidates: vec!["model.safetensors", "pytorch_model.bin"],
    };
    let msg = err.to_string();
    assert!(msg.contains("no weights"));
    assert!(msg.contains("pytorch_model.bin"));
}

#[test]
fn test_config_parse_error_shows_path() {
    let err = ModelError::ConfigParseError {
        path: PathBuf::from("/models/en_qg/config.json"),
        message: "expected value".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to parse /models/en_qg/config.json: expected value"
    );
}

#[test]
fn test_startup_failed_joins_every_failure() {
    let err = ModelError::StartupFailed {
        failures: vec![
            TaskFailure {
                task: LoadTask::Family(ModelFamily::ChineseQg),
                error: ModelError::NotCached {
                    repo_id: "p208p2002/gpt2-drcd-qg-hl".to_string(),
                    filename: "config.json".to_string(),
                    origin: "hub-offline",
                },
            },
            TaskFailure {
                task: LoadTask::LinguisticResources,
                error: ModelError::InternalError {
                    message: "boom".to_string(),
                },
            },
        ],
    };
    let msg = err.to_string();
    assert!(msg.starts_with("2 model loader(s) failed: "));
    assert!(msg.contains("[Chinese QG model] p208p2002/gpt2-drcd-qg-hl/config.json"));
    assert!(msg.contains("; [linguistic resources] Internal error: boom"));
}

#[test]
fn test_io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: ModelError = io.into();
    assert!(matches!(err, ModelError::IoError(_)));
    assert!(err.to_string().contains("gone"));
}

// ============================================================
// CATEGORY TESTS
// ============================================================

#[test]
fn test_categories() {
    assert_eq!(
        ModelError::config("bad").category(),
        ErrorCategory::Config
    );
    assert_eq!(
        ModelError::DeviceError {
            message: "no cuda".to_string()
        }
        .category(),
        ErrorCategory::Config
    );
    let not_cached = ModelError::NotCached {
        repo_id: "a/b".to_string(),
        filename: "c".to_string(),
        origin: "local",
    };
    assert!(not_cached.is_network());
    assert_eq!(
        ModelError::WeightsError {
            repo_id: "a/b".to_string(),
            message: "empty".to_string()
        }
        .category(),
        ErrorCategory::Artifact
    );
    assert_eq!(
        ModelError::LoaderPanicked {
            task: LoadTask::LinguisticResources,
            message: "oops".to_string()
        }
        .category(),
        ErrorCategory::Runtime
    );
}

#[test]
fn test_startup_failed_takes_first_category() {
    let err = ModelError::StartupFailed {
        failures: vec![TaskFailure {
            task: LoadTask::Family(ModelFamily::EnglishQg),
            error: ModelError::NotCached {
                repo_id: "a/b".to_string(),
                filename: "c".to_string(),
                origin: "hub-offline",
            },
        }],
    };
    assert!(err.is_network());

    let empty = ModelError::StartupFailed { failures: vec![] };
    assert_eq!(empty.category(), ErrorCategory::Runtime);
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelError>();
}
