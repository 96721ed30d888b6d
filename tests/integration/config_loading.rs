// tests/integration/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;
use taskplan::config::{load_and_validate, load_or_default};
use taskplan::errors::TaskplanError;
use taskplan::types::{OutputFormat, TitleOrder};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn reads_every_section() {
    let file = config_file(
        r#"
[schedule]
title_order = "ordinal"
cycle_witness = true

[output]
format = "json"

[limits]
max_tasks = 250
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    let options = cfg.schedule_options();
    assert_eq!(options.title_order, TitleOrder::Ordinal);
    assert!(options.cycle_witness);
    assert_eq!(options.max_tasks, Some(250));
    assert_eq!(cfg.output.format, OutputFormat::Json);
}

#[test]
fn empty_file_uses_defaults() {
    let file = config_file("");
    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.schedule.title_order, TitleOrder::Locale);
    assert!(!cfg.schedule.cycle_witness);
    assert_eq!(cfg.limits.max_tasks, None);
}

#[test]
fn unknown_title_order_is_a_toml_error() {
    let file = config_file("[schedule]\ntitle_order = \"alphabetical\"\n");
    match load_and_validate(file.path()) {
        Err(TaskplanError::TomlError(_)) => {}
        other => panic!("expected TomlError, got {other:?}"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file("[schedule]\nwitness = true\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(TaskplanError::TomlError(_))
    ));
}

#[test]
fn zero_task_limit_is_a_config_error() {
    let file = config_file("[limits]\nmax_tasks = 0\n");
    match load_and_validate(file.path()) {
        Err(TaskplanError::ConfigError(msg)) => assert!(msg.contains("max_tasks")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn explicit_missing_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        load_or_default(Some(&missing)),
        Err(TaskplanError::IoError(_))
    ));
}
