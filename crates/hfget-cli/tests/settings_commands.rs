//! End-to-end checks of the non-interactive commands.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn hfget(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hfget"))
        .args(args)
        .env("HFGET_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env_remove("HF_TOKEN")
        .current_dir(config_dir)
        .output()
        .expect("failed to run hfget")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn config_without_file_hints_at_init() {
    let temp = tempdir().unwrap();
    let output = hfget(temp.path(), &["config"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(&format!(
        "Config file location: {}",
        temp.path().join("config.json").display()
    )));
    assert!(text.contains("Config file does not exist"));
    assert!(text.contains("Run 'hfget init' to create it"));
}

#[test]
fn init_then_config_shows_defaults() {
    let temp = tempdir().unwrap();

    let output = hfget(temp.path(), &["init"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Config file created at"));

    let written = std::fs::read_to_string(temp.path().join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["token"], "");
    assert_eq!(json["defaultDownloadDir"], "/opt/llms/models");
    assert_eq!(json["defaultSearchLimit"], 20);
    assert_eq!(json["storageStrategy"], "organized");

    let output = hfget(temp.path(), &["config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Config file exists"));
    assert!(text.contains("\"storageStrategy\": \"organized\""));
}

#[test]
fn second_init_fails() {
    let temp = tempdir().unwrap();
    assert!(hfget(temp.path(), &["init"]).status.success());

    let output = hfget(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn version_and_help_exit_cleanly() {
    let temp = tempdir().unwrap();

    let output = hfget(temp.path(), &["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));

    let output = hfget(temp.path(), &["-h"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("hfget [COMMAND]"));
}

#[test]
fn wizard_without_token_exits_with_one() {
    let temp = tempdir().unwrap();
    let output = hfget(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("HF_TOKEN not set."));
}
