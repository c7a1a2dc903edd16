use std::process::Command;

use crate::helpers::CommandExt;
use crate::helpers::binary_path;

#[test]
fn test_help() {
    for flag in ["--help", "-h"] {
        let output = Command::new(binary_path()).arg(flag).run();
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.contains("Usage: lint [OPTIONS] <FILES>..."));
        assert!(output.stdout.contains("--fix"));
        assert!(output.stdout.contains("Global options"));
    }
}

#[test]
fn test_must_pass_files() {
    let output = Command::new(binary_path()).run();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.contains("Usage: lint [OPTIONS] <FILES>..."));

    let output = Command::new(binary_path()).arg("--fix").run();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.contains("Usage: lint [OPTIONS] <FILES>..."));
}

#[test]
fn test_version() {
    let output = Command::new(binary_path()).arg("--version").run();
    assert!(output.status.success());
    assert_eq!(output.stdout.trim(), format!("lint {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag() {
    let output = Command::new(binary_path()).arg("--unsafe-fixes").arg("a.css").run();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("unexpected argument '--unsafe-fixes'"));
}
