use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::{tempdir, NamedTempFile};

use dirwatch::cli::CliArgs;
use dirwatch::config::{load_from_path, resolve_settings};
use dirwatch::errors::DirwatchError;
use dirwatch::types::ErrorKind;

type TestResult = Result<(), Box<dyn Error>>;

fn args(directory: Option<PathBuf>, magic: Option<&str>) -> CliArgs {
    CliArgs {
        directory,
        magic: magic.map(str::to_string),
        ..CliArgs::default()
    }
}

fn expect_config_error(args: &CliArgs, needle: &str) {
    match resolve_settings(args) {
        Err(DirwatchError::Config(msg)) => {
            assert!(msg.contains(needle), "message {msg:?} should mention {needle:?}");
        }
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(s) => panic!("Expected error, got Ok({:?})", s),
    }
}

#[test]
fn cli_only_settings_use_defaults() -> TestResult {
    let dir = tempdir()?;
    let settings = resolve_settings(&args(Some(dir.path().to_path_buf()), Some("MAGIC")))?;

    assert!(settings.directory().is_absolute());
    assert_eq!(settings.magic(), "MAGIC");
    assert_eq!(settings.filter().suffix(), ".txt");
    assert_eq!(settings.interval(), Duration::from_secs(1));
    assert_eq!(settings.backoff(), Duration::from_secs(5));
    Ok(())
}

#[test]
fn missing_directory_is_rejected() {
    expect_config_error(
        &args(Some(PathBuf::from("not/there/yet")), Some("x")),
        "cannot resolve directory",
    );
}

#[test]
fn parent_components_are_resolved_away() -> TestResult {
    let root = tempdir()?;
    std::fs::create_dir(root.path().join("x"))?;
    std::fs::create_dir(root.path().join("logs"))?;

    let dotted = root.path().join("x").join("..").join("logs");
    let settings = resolve_settings(&args(Some(dotted), Some("MAGIC")))?;

    assert_eq!(settings.directory(), std::fs::canonicalize(root.path().join("logs"))?);
    assert!(
        !settings
            .directory()
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
    );
    Ok(())
}

#[test]
fn config_file_values_are_overridden_by_cli() -> TestResult {
    let dir = tempdir()?;
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[watch]
directory = {:?}
magic = "FROM_FILE"
extension = ".log"
interval = 0.25
"#,
        dir.path()
    )?;

    let mut cli = args(None, Some("FROM_CLI"));
    cli.config = Some(file.path().to_path_buf());
    cli.backoff = Some(2.0);

    let settings = resolve_settings(&cli)?;
    assert_eq!(settings.magic(), "FROM_CLI");
    assert_eq!(settings.filter().suffix(), ".log");
    assert_eq!(settings.interval(), Duration::from_millis(250));
    assert_eq!(settings.backoff(), Duration::from_secs(2));
    assert_eq!(settings.directory(), std::fs::canonicalize(dir.path())?);
    Ok(())
}

#[test]
fn missing_inputs_are_config_errors() -> TestResult {
    let dir = tempdir()?;
    expect_config_error(&args(Some(dir.path().to_path_buf()), None), "magic");
    expect_config_error(&args(None, Some("MAGIC")), "directory");
    Ok(())
}

#[test]
fn invalid_values_are_config_errors() -> TestResult {
    let dir = tempdir()?;
    let base = args(Some(dir.path().to_path_buf()), Some("MAGIC"));

    expect_config_error(&args(Some(dir.path().to_path_buf()), Some("")), "magic");

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut cli = base.clone();
        cli.interval = Some(bad);
        expect_config_error(&cli, "interval");
    }

    let mut cli = base.clone();
    cli.backoff = Some(0.0);
    expect_config_error(&cli, "backoff");

    let mut cli = base.clone();
    cli.extension = Some(String::new());
    expect_config_error(&cli, "extension");
    Ok(())
}

#[test]
fn regular_file_is_not_a_watch_directory() -> TestResult {
    let file = NamedTempFile::new()?;
    expect_config_error(
        &args(Some(file.path().to_path_buf()), Some("MAGIC")),
        "not a directory",
    );
    Ok(())
}

#[test]
fn unknown_config_keys_are_rejected() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[watch]
magic = "x"
recursive = true
"#
    )?;

    match load_from_path(file.path()) {
        Err(err @ DirwatchError::Toml(_)) => assert_eq!(err.kind(), ErrorKind::Unexpected),
        other => panic!("Expected Toml error, got: {:?}", other),
    }
    Ok(())
}
