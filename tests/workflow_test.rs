//! Workflow Integration Tests
//!
//! AggregationWorkflow の統合テスト

use docgen::adapter::config::Config;
use docgen::domain::error::DocgenError;
use docgen::driver::cli::Args;
use docgen::driver::workflow::AggregationWorkflow;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// テスト用のConfigファイルを作成
fn create_test_config(dir: &Path) -> String {
    let config_path = dir.join("docgen.json");
    let config = serde_json::json!({
        "source_directories": [dir.join("docs").to_string_lossy()],
        "output_path": dir.join("README.md").to_string_lossy(),
        "trailer": "[BACK]",
        "sort_entries": true
    });
    fs::write(&config_path, config.to_string()).unwrap();
    config_path.to_string_lossy().to_string()
}

/// テスト用のドキュメントディレクトリを作成
fn create_test_docs(dir: &Path) {
    let docs = dir.join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("a.md"), "Hello").unwrap();
    fs::write(docs.join("b.md"), "World").unwrap();
}

fn args(config: String, dry_run: bool) -> Args {
    Args {
        dry_run,
        config,
        sources: vec![],
        output: None,
        max_depth: None,
        sort: false,
        inline: false,
    }
}

fn workflow_from(config_path: &str) -> AggregationWorkflow {
    let config = Config::load(config_path).unwrap();
    AggregationWorkflow::new(config.to_aggregate_config())
}

#[tokio::test]
async fn test_workflow_writes_readme() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    create_test_docs(temp_dir.path());

    let workflow = workflow_from(&config_path);
    let result = workflow.execute(&args(config_path, false)).await;

    assert!(result.is_ok(), "Workflow should succeed, but got: {:?}", result);
    let readme = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
    assert_eq!(readme, "Hello\n\n[BACK]\n\nWorld\n\n[BACK]");
}

#[tokio::test]
async fn test_workflow_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    create_test_docs(temp_dir.path());
    let readme_path = temp_dir.path().join("README.md");

    let workflow = workflow_from(&config_path);
    workflow.execute(&args(config_path.clone(), false)).await.unwrap();
    let first = fs::read(&readme_path).unwrap();
    workflow.execute(&args(config_path, false)).await.unwrap();
    let second = fs::read(&readme_path).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_workflow_missing_source_directory_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    let readme_path = temp_dir.path().join("README.md");
    fs::write(&readme_path, "previous output").unwrap();

    let workflow = workflow_from(&config_path);
    let err = workflow
        .execute(&args(config_path, false))
        .await
        .unwrap_err();

    let docgen_err = err.downcast_ref::<DocgenError>().unwrap();
    assert!(matches!(docgen_err, DocgenError::SourceNotFound(_)));
    assert_eq!(fs::read_to_string(&readme_path).unwrap(), "previous output");
}

#[tokio::test]
async fn test_workflow_missing_source_directory_creates_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());

    let workflow = workflow_from(&config_path);
    let result = workflow.execute(&args(config_path, false)).await;

    assert!(result.is_err());
    assert!(!temp_dir.path().join("README.md").exists());
}

#[tokio::test]
async fn test_workflow_empty_directory_truncates_output() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    fs::create_dir(temp_dir.path().join("docs")).unwrap();
    let readme_path = temp_dir.path().join("README.md");
    fs::write(&readme_path, "previous output").unwrap();

    let workflow = workflow_from(&config_path);
    let result = workflow.execute(&args(config_path, false)).await;

    assert!(
        result.is_ok(),
        "Workflow should handle empty directory, but got: {:?}",
        result
    );
    assert_eq!(fs::read_to_string(&readme_path).unwrap(), "");
}

#[tokio::test]
async fn test_workflow_missing_reference_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let docs = temp_dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("a.md"), "Hello").unwrap();
    fs::write(docs.join("b.md"), "[EXAMPLE-FILE-ADDRESS](./missing.ts)").unwrap();

    let mut config = Config {
        source_directories: vec![docs.to_string_lossy().to_string()],
        output_path: temp_dir.path().join("README.md").to_string_lossy().to_string(),
        reference_root: temp_dir.path().to_string_lossy().to_string(),
        sort_entries: true,
        ..Config::default()
    };
    let cli = Args {
        inline: true,
        ..args("unused.json".to_string(), false)
    };
    cli.apply_overrides(&mut config);

    let workflow = AggregationWorkflow::new(config.to_aggregate_config());
    let err = workflow.execute(&cli).await.unwrap_err();

    let docgen_err = err.downcast_ref::<DocgenError>().unwrap();
    assert!(docgen_err.is_not_found());
    assert!(!temp_dir.path().join("README.md").exists());
}

#[tokio::test]
async fn test_workflow_dry_run_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(temp_dir.path());
    create_test_docs(temp_dir.path());

    let workflow = workflow_from(&config_path);
    let result = workflow.execute(&args(config_path, true)).await;

    assert!(result.is_ok());
    assert!(!temp_dir.path().join("README.md").exists());
}
