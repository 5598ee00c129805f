//! CLI integration tests for mksdk.
//!
//! These tests run the `mksdk` binary against temporary source trees and
//! inspect the generated SDK bundle.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the mksdk binary command, isolated from the user's config and env.
fn mksdk(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mksdk").unwrap();
    cmd.current_dir(dir).env("HOME", dir);
    for var in [
        "MKSDK_CONFIG",
        "MKSDK_SDK_NAME",
        "MKSDK_CANONICAL_NAME",
        "MKSDK_VERSION",
        "MKSDK_ARCH",
        "MKSDK_TARGET",
        "MKSDK_PLATFORM",
        "MKSDK_SOURCE",
        "MKSDK_OUTPUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a temporary directory for test runs.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// ============================================================================
// mksdk create
// ============================================================================

#[test]
fn test_create_without_sources() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["--color", "never", "create"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Creating"))
        .stderr(predicate::str::contains("Finished"));

    let root = tmp.path().join("PocketDarwin01.sdk");
    assert!(root.join("System/Library/Frameworks").is_dir());
    assert!(root.join("System/usr/include").is_dir());
    assert!(root.join("System/usr/lib").is_dir());

    let settings = fs::read_to_string(root.join("SDKSettings.plist")).unwrap();
    assert!(settings.contains("<key>CanonicalName</key>"));
    assert!(settings.contains("<string>pocketdarwin01</string>"));
    assert!(settings.contains("<key>SupportedArchitectures</key>"));
    assert!(settings.contains("<string>PocketDarwin</string>"));
}

#[test]
fn test_create_full_sdk() {
    let tmp = temp_dir();
    let src = tmp.path().join("sdk_sources");
    write(&src.join("headers/stdio.h"), "int puts(const char *);");
    write(&src.join("headers/sys/cdefs.h"), "#define __BEGIN_DECLS");
    write(&src.join("frameworks/IOKit/IOKitLib.h"), "// iokit");
    write(&src.join("symbols/libfoo.txt"), "_foo_init\n\n_foo_exit\n");

    mksdk(tmp.path())
        .args(["create", "--arch", "arm64", "--target", "arm64-apple-darwin"])
        .assert()
        .success();

    let root = tmp.path().join("PocketDarwin01.sdk");
    assert_eq!(
        fs::read_to_string(root.join("System/usr/include/sys/cdefs.h")).unwrap(),
        "#define __BEGIN_DECLS"
    );
    assert_eq!(
        fs::read_to_string(
            root.join("System/Library/Frameworks/IOKit.framework/Headers/IOKitLib.h")
        )
        .unwrap(),
        "// iokit"
    );

    let tbd = fs::read_to_string(root.join("System/usr/lib/libfoo.tbd")).unwrap();
    assert_eq!(
        tbd,
        "--- !tapi-tbd\n\
         tbd-version:     4\n\
         targets:         [ arm64-apple-darwin ]\n\
         install-name:    /usr/lib/libfoo.dylib\n\
         exports:\n  \
         - archs:       [ arm64 ]\n    \
         symbols:\n      \
         - _foo_init\n      \
         - _foo_exit\n\
         ...\n"
    );
}

#[test]
fn test_create_custom_paths_and_target() {
    let tmp = temp_dir();
    write(&tmp.path().join("inputs/symbols/libm.txt"), "_sin\n_cos\n");

    mksdk(tmp.path())
        .args([
            "create",
            "--source",
            "inputs",
            "--output",
            "out/Tiny.sdk",
            "--sdk-name",
            "Tiny",
            "--arch",
            "x86_64",
            "--target",
            "x86_64-apple-darwin",
        ])
        .assert()
        .success();

    let root = tmp.path().join("out/Tiny.sdk");
    let tbd = fs::read_to_string(root.join("System/usr/lib/libm.tbd")).unwrap();
    assert!(tbd.contains("targets:         [ x86_64-apple-darwin ]"));
    assert!(tbd.contains("  - archs:       [ x86_64 ]"));

    let settings = fs::read_to_string(root.join("SDKSettings.plist")).unwrap();
    assert!(settings.contains("<string>tiny</string>"));
    assert!(settings.contains("<string>x86_64</string>"));
}

#[test]
fn test_create_reads_project_config() {
    let tmp = temp_dir();
    write(
        &tmp.path().join("mksdk.toml"),
        "[sdk]\nsdk_name = \"Configured\"\nversion = \"3.1\"\n\n[paths]\nsource = \"src-tree\"\n",
    );
    write(&tmp.path().join("src-tree/symbols/libz"), "_inflate\n");

    mksdk(tmp.path()).args(["create"]).assert().success();

    let root = tmp.path().join("Configured.sdk");
    assert!(root.join("System/usr/lib/libz.tbd").is_file());
    let settings = fs::read_to_string(root.join("SDKSettings.plist")).unwrap();
    assert!(settings.contains("<string>3.1</string>"));
}

#[test]
fn test_create_twice_is_byte_identical() {
    let tmp = temp_dir();
    write(&tmp.path().join("sdk_sources/symbols/libc.txt"), "_printf\n_puts\n");

    mksdk(tmp.path()).arg("create").assert().success();
    let root = tmp.path().join("PocketDarwin01.sdk");
    let settings = fs::read(root.join("SDKSettings.plist")).unwrap();
    let stub = fs::read(root.join("System/usr/lib/libc.tbd")).unwrap();

    mksdk(tmp.path()).arg("create").assert().success();
    assert_eq!(fs::read(root.join("SDKSettings.plist")).unwrap(), settings);
    assert_eq!(fs::read(root.join("System/usr/lib/libc.tbd")).unwrap(), stub);
}

#[test]
fn test_create_quiet_prints_nothing() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["-q", "create"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_create_json_events() {
    let tmp = temp_dir();
    write(&tmp.path().join("sdk_sources/symbols/libfoo.txt"), "_foo\n");

    let output = mksdk(tmp.path())
        .args(["--message-format", "json", "create"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let reasons: Vec<&str> = events
        .iter()
        .filter_map(|e| e["reason"].as_str())
        .collect();
    assert!(reasons.contains(&"settings-written"));
    assert!(reasons.contains(&"stub-written"));
    assert_eq!(reasons.last(), Some(&"sdk-created"));

    let created = events.last().unwrap();
    assert_eq!(created["summary"]["stubs"][0]["library"], "libfoo");
    assert_eq!(created["summary"]["stubs"][0]["symbols"], 1);
}

#[test]
fn test_create_fails_on_invalid_arch() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["create", "--arch", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("architecture"));

    assert!(!tmp.path().join("PocketDarwin01.sdk").exists());
}

#[test]
fn test_quiet_still_reports_errors() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["-q", "--color", "never", "create", "--arch", ""])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("architecture"));
}

#[test]
fn test_json_error_event() {
    let tmp = temp_dir();

    let output = mksdk(tmp.path())
        .args(["--message-format", "json", "create", "--target", ""])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value = serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["reason"], "error");
    assert!(last["message"].as_str().unwrap().contains("target_triple"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: "));
}

#[test]
fn test_create_fails_with_missing_explicit_config() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["create", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_create_fails_when_output_is_a_file() {
    let tmp = temp_dir();
    fs::write(tmp.path().join("PocketDarwin01.sdk"), "occupied").unwrap();

    mksdk(tmp.path())
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create directory"));
}

// ============================================================================
// mksdk settings / stub
// ============================================================================

#[test]
fn test_settings_prints_plist() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["settings", "--platform", "Pocket"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("<string>Pocket</string>"));

    assert!(!tmp.path().join("PocketDarwin01.sdk").exists());
}

#[test]
fn test_stub_prints_tbd() {
    let tmp = temp_dir();
    write(&tmp.path().join("libbar.txt"), "  _bar_a  \n\n\t\n_bar_b\n");

    mksdk(tmp.path())
        .args(["stub", "libbar.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install-name:    /usr/lib/libbar.dylib"))
        .stdout(predicate::str::contains("      - _bar_a\n      - _bar_b\n...\n"));
}

#[test]
fn test_stub_missing_file_fails() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["stub", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read file"));
}

// ============================================================================
// mksdk completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    mksdk(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mksdk"));
}
