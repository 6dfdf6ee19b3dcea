//! Integration tests for the `gnso` binary.
//!
//! These cover argument parsing and startup failures; nothing here binds
//! a port or talks to a controller.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `gnso` binary with env isolation.
///
/// Clears every variable the gateway reads and runs inside `dir` so the
/// default `tls/` paths never resolve to real files.
fn gnso_cmd(dir: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gnso");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("NSO_URL")
        .env_remove("NSO_USERNAME")
        .env_remove("NSO_PASSWORD")
        .env_remove("TOKEN")
        .env_remove("PORT")
        .env_remove("GNSO_CONFIG")
        .env_remove("GNSO_PLAINTEXT")
        .env_remove("GNSO_NSO_URL")
        .env_remove("GNSO_HOST")
        .env_remove("GNSO_PORT")
        .env_remove("GNSO_TLS_CERT")
        .env_remove("GNSO_TLS_KEY")
        .env_remove("GNSO_CA_CERT")
        .env_remove("GNSO_INSECURE")
        .env_remove("GNSO_TIMEOUT");
    cmd
}

fn tempdir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let dir = tempdir();
    gnso_cmd(&dir).arg("--help").assert().success().stdout(
        predicate::str::contains("NSO")
            .and(predicate::str::contains("--config"))
            .and(predicate::str::contains("--plaintext")),
    );
}

#[test]
fn test_version_flag() {
    let dir = tempdir();
    gnso_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gnso"));
}

#[test]
fn test_unknown_log_format_is_a_usage_error() {
    let dir = tempdir();
    gnso_cmd(&dir)
        .args(["--log-format", "xml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}

// ── Startup failures ────────────────────────────────────────────────

#[test]
fn test_missing_controller_url() {
    let dir = tempdir();
    gnso_cmd(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("NSO_URL"));
}

#[test]
fn test_invalid_controller_url() {
    let dir = tempdir();
    gnso_cmd(&dir)
        .env("NSO_URL", "not a url")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nso_url"));
}

#[test]
fn test_named_config_file_must_exist() {
    let dir = tempdir();
    gnso_cmd(&dir)
        .args(["--config", "absent.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_missing_tls_material() {
    let dir = tempdir();
    gnso_cmd(&dir)
        .env("NSO_URL", "http://127.0.0.1:9/restconf")
        .env("PORT", "0")
        .assert()
        .code(3)
        .stderr(
            predicate::str::contains("tls/cert.pem").and(predicate::str::contains("--plaintext")),
        );
}

#[test]
fn test_tls_paths_from_config_file() {
    let dir = tempdir();
    std::fs::write(
        dir.path().join("gnso.toml"),
        "nso_url = \"http://127.0.0.1:9/restconf\"\n\
         port = 0\n\
         tls_cert = \"certs/gw.pem\"\n\
         tls_key = \"certs/gw.key\"\n",
    )
    .unwrap();

    gnso_cmd(&dir)
        .args(["--config", "gnso.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("certs/gw.pem"));
}
