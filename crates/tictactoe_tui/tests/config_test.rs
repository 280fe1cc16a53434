//! Tests for loading the front-end configuration.

use std::io::Write;
use std::path::{Path, PathBuf};
use tictactoe_tui::TuiConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "log_file = \"/tmp/ttt.log\"\nlog_filter = \"debug,tictactoe_engine=trace\"\ncell_hints = false"
    )
    .expect("write config");

    let config = TuiConfig::load(Some(file.path())).expect("valid config");

    assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug,tictactoe_engine=trace");
    assert!(!config.cell_hints());
}

#[test]
fn test_no_file_means_defaults() {
    assert_eq!(TuiConfig::load(None).expect("defaults"), TuiConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TuiConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_cli_log_file_overrides() {
    let config = TuiConfig::default().with_log_file(PathBuf::from("other.log"));
    assert_eq!(config.log_file().as_path(), Path::new("other.log"));
}
