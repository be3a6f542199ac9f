//! Command output tests.

use tempfile::TempDir;

use super::helpers::{run_cli, write_mirror, EXIT_SUCCESS};

// =============================================================================
// list
// =============================================================================

#[test]
fn test_list_prints_every_repo() {
    let result = run_cli(&["list"]);

    assert_eq!(result.exit_code, EXIT_SUCCESS, "stderr: {}", result.stderr);
    for repo in [
        "p208p2002/bart-squad-qg-hl",
        "p208p2002/gpt2-drcd-qg-hl",
        "p208p2002/qmst-qgg",
        "voidful/bart-distractor-generation",
        "voidful/bart-distractor-generation-pm",
        "voidful/bart-distractor-generation-both",
        "LIAMF-USP/roberta-large-finetuned-race",
    ] {
        assert!(result.stdout.contains(repo), "{repo} missing:\n{}", result.stdout);
    }
}

#[test]
fn test_list_filters_by_family() {
    let result = run_cli(&["list", "--family", "en-dg"]);

    assert_eq!(result.exit_code, EXIT_SUCCESS, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("LIAMF-USP/roberta-large-finetuned-race"));
    assert!(!result.stdout.contains("p208p2002/bart-squad-qg-hl"));
}

// =============================================================================
// download / load
// =============================================================================

#[test]
fn test_download_from_local_mirror() {
    let mirror = TempDir::new().unwrap();
    write_mirror(mirror.path());

    let result = run_cli(&["--local-dir", mirror.path().to_str().unwrap(), "download"]);

    assert_eq!(
        result.exit_code, EXIT_SUCCESS,
        "stdout: {}\nstderr: {}",
        result.stdout, result.stderr
    );
    assert!(result.stdout.contains("Loaded 7 models from local"));
    assert!(result.stdout.contains("[download only]"));
    assert!(result.stderr.contains("Pre-downloading language models"));
    assert!(result.stderr.contains("Model loading took"));
}

#[test]
fn test_load_with_details() {
    let mirror = TempDir::new().unwrap();
    write_mirror(mirror.path());

    let result = run_cli(&[
        "--local-dir",
        mirror.path().to_str().unwrap(),
        "load",
        "--details",
    ]);

    assert_eq!(
        result.exit_code, EXIT_SUCCESS,
        "stdout: {}\nstderr: {}",
        result.stdout, result.stderr
    );
    assert!(!result.stdout.contains("[download only]"));
    assert!(result.stdout.contains("en_dg_both"));
    assert!(result.stdout.contains("en_dg_rl"));
    assert!(result.stdout.contains("stanza-en"));
    assert!(result.stdout.contains(" bytes  Cpu"), "{}", result.stdout);
    assert!(result.stderr.contains("English DG model loaded"));
}

#[test]
fn test_download_without_linguistic() {
    let mirror = TempDir::new().unwrap();
    write_mirror(mirror.path());
    std::fs::remove_dir_all(mirror.path().join("stanfordnlp")).unwrap();

    let result = run_cli(&[
        "--local-dir",
        mirror.path().to_str().unwrap(),
        "download",
        "--no-linguistic",
    ]);

    assert_eq!(result.exit_code, EXIT_SUCCESS, "stderr: {}", result.stderr);
    assert!(!result.stdout.contains("linguistic resources"));
}
