//! Integration tests for CLI commands.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    run_cli_with_stdin(args, None)
}

fn run_cli_with_stdin(args: &[&str], stdin: Option<&str>) -> (bool, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_roman"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_convert_arguments() {
    let (success, stdout, stderr) = run_cli(&["convert", "MCMXCIV", "iv", "Ⅻ", "nulla"]);
    assert!(success);
    assert_eq!(stdout, "1994\n4\n12\n0\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_convert_warns_on_dropped_symbols() {
    let (success, stdout, stderr) = run_cli(&["convert", "HELLO"]);
    assert!(success);
    assert_eq!(stdout.trim(), "100");
    assert!(stderr.contains("unexpected symbol 'H' at position 0"));
    assert!(stderr.contains("unexpected symbol 'O' at position 4"));
}

#[test]
fn test_convert_json_output() {
    let (success, stdout, _) = run_cli(&["convert", "--json", "IIX", "V+V"]);
    assert!(success);

    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("Invalid JSON");
    assert_eq!(first["value"], 10);
    assert_eq!(first["status"], "Irregular");
    let second: serde_json::Value = serde_json::from_str(lines[1]).expect("Invalid JSON");
    assert_eq!(second["status"], "Lossy");
    assert_eq!(second["errors"][0]["position"], 1);
    assert_eq!(second["errors"][0]["symbol"], "+");
}

#[test]
fn test_convert_strict_rejects() {
    let (success, stdout, stderr) = run_cli(&["convert", "--strict", "XIV", "IIX", ""]);
    assert!(!success);
    assert_eq!(stdout, "14\n");
    assert!(stderr.contains("'IIX' is not a classical numeral"));
    assert!(stderr.contains("input is empty"));
    assert!(stderr.contains("2 of 3 numerals rejected in strict mode"));
}

#[test]
fn test_convert_reads_stdin() {
    let (success, stdout, _) = run_cli_with_stdin(&["convert"], Some("X\n\nXL\r\nCD\n"));
    assert!(success);
    assert_eq!(stdout, "10\n40\n400\n");
}

#[test]
fn test_convert_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("numerals.txt");
    std::fs::write(&path, "LDVLIV\nⅿⅿⅹⅹⅵ\n").unwrap();

    let (success, stdout, _) = run_cli(&["convert", "--file", path.to_str().unwrap()]);
    assert!(success);
    assert_eq!(stdout, "499\n2026\n");
}

#[test]
fn test_convert_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let (success, _, stderr) = run_cli(&["convert", "--file", path.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("failed to read file"));
}

#[test]
fn test_normalize_command() {
    let (success, stdout, stderr) = run_cli(&["normalize", "Ⅷ x"]);
    assert!(success);
    assert_eq!(stdout.trim(), "VIIIX");
    assert!(stderr.contains("unexpected symbol ' ' at position 1"));
}

#[test]
fn test_normalize_json_output() {
    let (success, stdout, _) = run_cli(&["normalize", "--json", "ⅳ"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["canonical"], "IV");
    assert_eq!(parsed["letters"], serde_json::json!(["I", "V"]));
    assert_eq!(parsed["errors"], serde_json::json!([]));
}

#[test]
fn test_symbols_command() {
    let (success, stdout, _) = run_cli(&["symbols"]);
    assert!(success);
    assert!(stdout.contains("GLYPH"));
    assert!(stdout.contains("U+2167  Ⅷ"));
    assert!(stdout.contains("VIII"));
}

#[test]
fn test_symbols_json_output() {
    let (success, stdout, _) = run_cli(&["symbols", "--json"]);
    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 46);
    assert_eq!(entries[0]["symbol"], "C");
    assert_eq!(entries[0]["code_point"], "U+0043");
}
