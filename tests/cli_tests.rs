//! CLI integration tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with config, telemetry and colors isolated under `home`
fn convox_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_convox"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("DEBUG")
        .env_remove("CONVOX_LOG")
        .env_remove("CONVOX_ID")
        .env_remove("CONVOX_SEGMENT_WRITE_KEY")
        .env_remove("CONVOX_ROLLBAR_TOKEN")
        .env_remove("CONVOX_SETTINGS_DIR")
        .env("CONVOX_TELEMETRY", "false");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convox: convox command-line interface"))
        .stdout(predicate::str::contains("apps"))
        .stdout(predicate::str::contains("switch"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn no_arguments_prints_help() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Subcommands:"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn subcommand_help_uses_full_path() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .args(["help", "apps"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("convox apps: inspect apps"))
        .stdout(predicate::str::contains("(convox apps help <subcommand>)"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("convox-apps").not());
}

#[test]
fn nested_command_help_heading() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .args(["apps", "info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "convox apps info: show the app this directory maps to",
        ));
}

#[test]
fn switch_then_info() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("Project");
    fs::create_dir(&project).unwrap();

    convox_bin(home.path())
        .current_dir(&project)
        .args(["switch", "MyApp"])
        .assert()
        .success();

    let setting = fs::read_to_string(project.join(".convox").join("app")).unwrap();
    assert_eq!(setting, "myapp");

    convox_bin(home.path())
        .current_dir(&project)
        .args(["apps", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: myapp"));

    convox_bin(home.path())
        .current_dir(&project)
        .arg("switch")
        .assert()
        .success()
        .stdout("myapp\n");
}

#[test]
fn app_defaults_to_lowercased_directory_name() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("WebSite");
    fs::create_dir(&project).unwrap();

    convox_bin(home.path())
        .current_dir(&project)
        .args(["apps", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: website"));
}

#[test]
fn app_flag_overrides_setting() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");
    fs::create_dir_all(project.join(".convox")).unwrap();
    fs::write(project.join(".convox").join("app"), "pinned\n").unwrap();

    convox_bin(home.path())
        .current_dir(&project)
        .args(["apps", "info", "--app", "Other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: other"));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("convox"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_and_get() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .args(["config", "set", "id", "ops@example.com"])
        .assert()
        .success();

    convox_bin(home.path())
        .args(["config", "get", "id"])
        .assert()
        .success()
        .stdout("ops@example.com\n");
}

#[test]
fn completion_script() {
    let home = TempDir::new().unwrap();

    convox_bin(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("convox"));
}
