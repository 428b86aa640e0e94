// End-to-end tests for the convop binary
//
// Each test writes a source file into a temporary directory and runs the
// built binary on it.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Write `source` to a fresh temp dir and return (dir guard, file path)
fn source_file(source: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("temp dir: {err}"));
    let path = dir.path().join("main.cv");
    fs::write(&path, source).unwrap();
    (dir, path)
}

/// Run convop and return (stdout, stderr, exit_code)
fn run_convop(path: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_convop"))
        .args(args)
        .arg(path)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run convop");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_reports_suggestions() {
    let (_dir, path) = source_file("val same = a.equals(b)\nval sum = a.plus(b)\n");
    let (stdout, stderr, code) = run_convop(&path, &[]);

    assert_eq!(code, 0);
    assert_eq!(stdout, "");
    assert!(stderr.contains("Replace with '==' operator"), "{}", stderr);
    assert!(stderr.contains("Replace with '+' operator"), "{}", stderr);
}

#[test]
fn test_check_fails_when_rewrites_exist() {
    let (_dir, path) = source_file("val less = 0 > a.compareTo(b)\n");
    let (_, stderr, code) = run_convop(&path, &["--check"]);
    assert_eq!(code, 1, "{}", stderr);
    assert!(stderr.contains("1 rewrite(s) available"), "{}", stderr);
}

#[test]
fn test_check_passes_on_clean_source() {
    let (_dir, path) = source_file("val same = a == b\nval order = a.compareTo(b)\n");
    let (_, stderr, code) = run_convop(&path, &["--check"]);
    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(stderr, "");
}

#[test]
fn test_apply_prints_rewritten_program() {
    let source = "\
fun equals(other, strict = false)
val different = !(a.equals(b))
val total = a.plus(b).times(c)
val order = a.compareTo(b)
";
    let (_dir, path) = source_file(source);
    let (stdout, stderr, code) = run_convop(&path, &["--apply"]);

    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(
        stdout,
        "\
fun equals(other, strict = false)
val different = a != b
val total = (a + b) * c
val order = a.compareTo(b)
"
    );
    // The file itself is untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_apply_in_place() {
    let (_dir, path) = source_file("val x = a.minus(b - c)\n");
    let (stdout, stderr, code) = run_convop(&path, &["--apply", "--in-place"]);

    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(stdout, "");
    assert!(stderr.contains("1 rewrite(s) applied"), "{}", stderr);
    assert_eq!(fs::read_to_string(&path).unwrap(), "val x = a - (b - c)\n");
}

#[test]
fn test_in_place_keeps_comments_and_layout() {
    let source = "\
// keep me
val keep = (x)

val s = a.plus(b) // sum
val t =
    !s.equals(keep)   // differs
";
    let (_dir, path) = source_file(source);
    let (_, stderr, code) = run_convop(&path, &["--apply", "--in-place"]);

    assert_eq!(code, 0, "{}", stderr);
    assert!(stderr.contains("2 rewrite(s) applied"), "{}", stderr);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\
// keep me
val keep = (x)

val s = a + b // sum
val t =
    s != keep   // differs
"
    );
}

#[test]
fn test_in_place_without_rewrites_keeps_file() {
    let source = "// nothing here\nval x = a.compareTo(b)\n";
    let (_dir, path) = source_file(source);
    let (_, stderr, code) = run_convop(&path, &["--apply", "--in-place"]);

    assert_eq!(code, 0, "{}", stderr);
    assert!(stderr.contains("0 rewrite(s) applied"), "{}", stderr);
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_in_place_requires_apply() {
    let (_dir, path) = source_file("a.plus(b)\n");
    let (_, _, code) = run_convop(&path, &["--in-place"]);
    assert_eq!(code, 2);
}

#[test]
fn test_parse_error_is_reported() {
    let (_dir, path) = source_file("val x = a.plus(\n");
    let (stdout, stderr, code) = run_convop(&path, &[]);

    assert_eq!(code, 5, "{}", stderr);
    assert_eq!(stdout, "");
    assert!(stderr.contains("E001"), "{}", stderr);
    assert!(stderr.contains("parse error(s)"), "{}", stderr);
}

#[test]
fn test_invalid_character_is_reported() {
    let (_dir, path) = source_file("val x = a # b\n");
    let (_, stderr, code) = run_convop(&path, &[]);

    assert_eq!(code, 4, "{}", stderr);
    assert!(stderr.contains("E002"), "{}", stderr);
    assert!(stderr.contains("1 invalid character(s)"), "{}", stderr);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.cv");
    let (_, stderr, code) = run_convop(&path, &[]);

    assert_eq!(code, 3);
    assert!(stderr.contains("absent.cv"), "{}", stderr);
}

#[test]
fn test_verbose_logs_applied_rewrites() {
    let (_dir, path) = source_file("val x = a.times(b)\n");
    let (stdout, stderr, code) = run_convop(&path, &["--apply", "-v"]);

    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(stdout, "val x = a * b\n");
    assert!(stderr.contains("applied rewrite"), "{}", stderr);
}
