//! Tests for loading driver configuration from disk.

use std::io::Write;
use strictly_othello::Side;
use strictly_othello_cli::{AppConfig, SeatChoice, Session};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
board_size = 10
human_side = "second"
auto_play = false
max_attempts = 50
seed = 42
"#,
    );

    let config = AppConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.board_size(), 10);
    assert_eq!(*config.human_side(), SeatChoice::Second);
    assert_eq!(*config.max_attempts(), 50);
    assert_eq!(*config.seed(), Some(42));

    let session = Session::from_config(&config).expect("Valid session");
    assert_eq!(session.size(), 10);
    assert_eq!(session.human(), Some(Side::Second));
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("board_size = 6\n");
    let config = AppConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.board_size(), 6);
    assert_eq!(*config.human_side(), SeatChoice::Random);
    assert_eq!(*config.max_attempts(), 1000);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_cli_values_override_file() {
    let file = write_config("board_size = 6\nhuman_side = \"first\"\nseed = 1\n");
    let mut config = AppConfig::load(Some(file.path())).expect("Valid config");
    config.apply_overrides(Some(12), Some(SeatChoice::Second), false, None);

    assert_eq!(*config.board_size(), 12);
    assert_eq!(*config.human_side(), SeatChoice::Second);
    assert_eq!(*config.seed(), Some(1));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("board_size = \"eight\"\n");
    let error = AppConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let error = AppConfig::from_file("/nonexistent/othello.toml").unwrap_err();
    assert!(error.message.starts_with("Failed to read config file"));
}

#[test]
fn test_unknown_seat_rejected() {
    let file = write_config("human_side = \"middle\"\n");
    assert!(AppConfig::from_file(file.path()).is_err());
}
