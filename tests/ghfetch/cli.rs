//! Tests for argument handling and exit codes

use super::common::ghfetch_command;
use predicates::prelude::*;

#[test]
fn test_help_exits_zero_without_prompting() {
    ghfetch_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--no-token"));

    ghfetch_command().arg("-h").assert().success();
}

#[test]
fn test_version() {
    ghfetch_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_quit_token_exits_zero() {
    ghfetch_command()
        .args(["https://github.com/o/r", "--token-stdin"])
        .write_stdin("-q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quitting"));
}

#[test]
fn test_unsupported_host_exit_code() {
    ghfetch_command()
        .args(["https://gitlab.com/o/r", "--no-token"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported host: gitlab.com"));
}

#[test]
fn test_unparseable_url_with_unreachable_api() {
    ghfetch_command()
        .args(["https://github.com/lonely", "--no-token"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("unreachable"));
}

#[test]
fn test_invalid_timeout_env_is_config_error() {
    ghfetch_command()
        .args(["https://github.com/o/r", "--no-token"])
        .env("GHFETCH_TIMEOUT_SECS", "later")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_conflicting_token_flags() {
    ghfetch_command()
        .args(["https://github.com/o/r", "--no-token", "--token-stdin"])
        .assert()
        .failure();
}
