//! Common utilities for integration tests

use assert_cmd::Command;

/// Address nothing listens on, so any accidental request fails fast
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1";

pub fn ghfetch_command() -> Command {
    let mut cmd = Command::cargo_bin("ghfetch").unwrap();
    cmd.env_remove("GHFETCH_TIMEOUT_SECS")
        .env("GHFETCH_API_URL", UNREACHABLE_API)
        .env("NO_COLOR", "1");
    cmd
}
