//! Integration tests for the install command
//!
//! Real installs are environment-mutating, so these tests only drive paths
//! that are safe everywhere: already-present targets (skip without invoking
//! any manager) and targets that fail fast (no URL to clone). The Linux-only
//! tests put a stub apt-get on PATH so the bootstrap pre-flight passes on
//! any distribution.

mod common;

use assert_cmd::Command;
use common::TestDir;
use predicates::prelude::*;

#[allow(deprecated)]
fn devup_cmd() -> Command {
    let mut cmd = Command::cargo_bin("devup").unwrap();
    cmd.env_remove("DEVUP_MANIFEST");
    cmd
}

/// PATH with a stub apt-get in front, so the bootstrap step succeeds
#[cfg(target_os = "linux")]
fn path_with_stub_apt(dir: &TestDir) -> std::ffi::OsString {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.create_dir("stub-bin");
    let apt = bin.join("apt-get");
    std::fs::write(&apt, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&apt, std::fs::Permissions::from_mode(0o755)).unwrap();

    let current = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![bin];
    paths.extend(std::env::split_paths(&current));
    std::env::join_paths(paths).unwrap()
}

#[cfg(target_os = "linux")]
#[test]
fn test_install_skips_present_target() {
    let dir = TestDir::new();
    let dest = dir.create_dir("tools/some-tool");
    let manifest = dir.clone_target_manifest(&dest);
    let path = path_with_stub_apt(&dir);

    devup_cmd()
        .env("PATH", &path)
        .args(["install", "--no-profile", "--manifest"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"))
        .stdout(predicate::str::contains("Run summary"))
        .stdout(predicate::str::contains("Skipped"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_install_failed_target_reports_remediation_and_exits_zero() {
    let dir = TestDir::new();
    let dest = dir.path.join("tools/absent-tool");
    let manifest = dir.clone_target_manifest(&dest);
    let path = path_with_stub_apt(&dir);

    // example.invalid never resolves, so the clone fails on every attempt;
    // failures are reported, not fatal
    devup_cmd()
        .env("PATH", &path)
        .args([
            "install",
            "--no-profile",
            "--retries",
            "1",
            "--backoff-secs",
            "0",
            "--manifest",
        ])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed (1)"))
        .stdout(predicate::str::contains("To retry by hand"))
        .stdout(predicate::str::contains("git clone --depth 1"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_install_second_run_all_skipped() {
    let dir = TestDir::new();
    let dest = dir.create_dir("tools/some-tool");
    let manifest = dir.clone_target_manifest(&dest);
    let path = path_with_stub_apt(&dir);

    for _ in 0..2 {
        devup_cmd()
            .env("PATH", &path)
            .args(["install", "--no-profile", "--manifest"])
            .arg(&manifest)
            .assert()
            .success()
            .stdout(predicate::str::contains("Installed (0)"))
            .stdout(predicate::str::contains("Skipped (1)"));
    }
}
