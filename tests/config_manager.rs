use std::fs;
use tempfile::TempDir;
use chat_invoker::config::config_manager::ConfigManager;
use chat_invoker::config::constants::{DEFAULT_MODEL, DEFAULT_PROMPT};
use chat_invoker::enums::commands::{AskArgs, Commands};
use chat_invoker::errors::AppError;
use chat_invoker::structs::config::config::Config;
use chat_invoker::workers::command_runner::CommandRunner;

#[test]
fn loads_values_from_an_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai]\nmodel = \"claude-sonnet-4-20250514\"\n\n[prompt]\ntext = \"hello\"\n").unwrap();

    let config = ConfigManager::load(Some(path.as_path())).unwrap();

    assert_eq!(config.ai.model, "claude-sonnet-4-20250514");
    assert_eq!(config.prompt.text, "hello");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let error = ConfigManager::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(error, AppError::ConfigurationFileError { .. }));
}

#[test]
fn malformed_toml_reports_the_path_and_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai]\nmax_tokens = \"many\"\n").unwrap();

    let message = ConfigManager::load(Some(path.as_path())).unwrap_err().to_string();
    assert!(message.contains(&path.display().to_string()));
    assert!(message.contains("line 2"), "no line number in: {message}");
}

#[test]
fn cli_overrides_win_over_file_values() {
    let mut config = Config::default();
    config.apply_overrides(&AskArgs {
        prompt: Some("what is rust?".to_string()),
        model: None,
        max_tokens: Some(64),
    });

    assert_eq!(config.prompt.text, "what is rust?");
    assert_eq!(config.ai.model, DEFAULT_MODEL);
    assert_eq!(config.ai.max_tokens, 64);
}

#[test]
fn init_writes_sample_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let written = ConfigManager::create_sample_config(Some(path.as_path())).unwrap();
    assert_eq!(written, path);

    let config = ConfigManager::load(Some(path.as_path())).unwrap();
    assert_eq!(config.prompt.text, DEFAULT_PROMPT);

    assert!(ConfigManager::create_sample_config(Some(path.as_path())).is_err());
}

#[tokio::test]
async fn validate_command_rejects_zero_max_tokens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ai]\nmax_tokens = 0\n").unwrap();

    let mut out = Vec::new();
    let error = CommandRunner::new(Some(path))
        .run_command(Some(Commands::Validate), &mut out)
        .await
        .unwrap_err();

    match error {
        AppError::ValidationError { errors } => assert_eq!(errors.len(), 1),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn validate_command_accepts_a_good_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, ConfigManager::sample_config()).unwrap();

    let mut out = Vec::new();
    CommandRunner::new(Some(path))
        .run_command(Some(Commands::Validate), &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "✅ Configuration is valid\n");
}
