//! CLI integration tests for tagbase
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tagbase() -> Command {
    let mut cmd = Command::cargo_bin("tagbase").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A scratch directory holding the hash inputs, used as working directory.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("message.txt"), "correct horse battery staple").unwrap();
    fs::write(dir.path().join("nonce.txt"), "0123456789abcdef").unwrap();
    dir
}

fn hash_cmd(dir: &Path) -> Command {
    let mut cmd = tagbase();
    cmd.current_dir(dir)
        .args(["hash", "-t", "16", "-i", "1", "-p", "1", "-M", "64"]);
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    tagbase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hash files with Argon2id"));
}

#[test]
fn test_version() {
    tagbase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tagbase"));
}

#[test]
fn test_list_alphabets() {
    tagbase()
        .args(["alphabet", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base94"))
        .stdout(predicate::str::contains("base-58"));
}

#[test]
fn test_inspect_alphabet_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "alpha\r\nbeta\r\n\r\ngamma\r\ndelta").unwrap();

    tagbase()
        .args(["alphabet", "-t", "32", "-a"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("base:             4"))
        .stdout(predicate::str::contains("max symbol bytes: 5"))
        .stdout(predicate::str::contains("digit bound:      130 (32-byte tag)"));
}

#[test]
fn test_config_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    tagbase()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tag_length = 32"))
        .stdout(predicate::str::contains("alphabet = \"base94.txt\""));
}

#[test]
fn test_config_file_override() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tagbase.toml"), "[output]\nheader = true\n").unwrap();

    tagbase()
        .current_dir(dir.path())
        .args(["encode", "--builtin", "base16", "--hex"])
        .write_stdin("ff")
        .assert()
        .success()
        .stdout("Found 16 characters\nff\n");
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_hex_input() {
    tagbase()
        .args(["encode", "--builtin", "base16", "--hex"])
        .write_stdin("0100\n")
        .assert()
        .success()
        .stdout("100\n");
}

#[test]
fn test_encode_binary() {
    tagbase()
        .args(["encode", "-b", "base2"])
        .write_stdin(vec![0x00u8, 0xff])
        .assert()
        .success()
        .stdout("11111111\n");
}

#[test]
fn test_encode_multibyte_symbols_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let alphabet = dir.path().join("lohi.txt");
    let output = dir.path().join("output.txt");
    fs::write(&alphabet, "lo\r\nhi\r\n").unwrap();

    tagbase()
        .arg("encode")
        .arg("-a")
        .arg(&alphabet)
        .arg("-o")
        .arg(&output)
        .write_stdin(vec![0x01u8])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "hi");
}

#[test]
fn test_encode_with_header_flag() {
    tagbase()
        .args(["encode", "-b", "base16", "--hex", "--header"])
        .write_stdin("0100")
        .assert()
        .success()
        .stdout("Found 16 characters\n100\n");
}

#[test]
fn test_single_symbol_alphabet_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let alphabet = dir.path().join("one.txt");
    fs::write(&alphabet, "x\n").unwrap();

    tagbase()
        .arg("encode")
        .arg("-a")
        .arg(&alphabet)
        .write_stdin(vec![0x01u8])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 symbols, found 1"));
}

#[test]
fn test_decode_restores_tag_length() {
    tagbase()
        .args(["decode", "-b", "base2", "-t", "4"])
        .write_stdin("11111111\n")
        .assert()
        .success()
        .stdout("000000ff\n");
}

#[test]
fn test_decode_skips_header() {
    tagbase()
        .args(["decode", "-b", "base16", "-t", "2", "--header"])
        .write_stdin("Found 16 characters\n100\n")
        .assert()
        .success()
        .stdout("0100\n");
}

#[test]
fn test_decode_invalid_symbol() {
    tagbase()
        .args(["decode", "-b", "base10", "-t", "4"])
        .write_stdin("12x4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no alphabet symbol matches at byte 2"));
}

#[test]
fn test_encode_decode_roundtrip() {
    let encoded = tagbase()
        .args(["encode", "-b", "base58", "--hex"])
        .write_stdin("00000102030405060708090a0b0c0d0e0f")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    tagbase()
        .args(["decode", "-b", "base58", "-t", "17"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("00000102030405060708090a0b0c0d0e0f\n");
}

// ============================================================================
// Hash pipeline
// ============================================================================

#[test]
fn test_hash_is_deterministic() {
    let dir = workspace();
    let first = hash_cmd(dir.path())
        .args(["-b", "base10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = hash_cmd(dir.path())
        .args(["-b", "base10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.trim_end().bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn test_hash_hex_matches_encode() {
    let dir = workspace();
    let hex = hash_cmd(dir.path())
        .arg("--hex")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(hex.len(), 33);

    let rendered = hash_cmd(dir.path())
        .args(["-b", "base94"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    tagbase()
        .args(["encode", "-b", "base94", "--hex"])
        .write_stdin(hex)
        .assert()
        .success()
        .stdout(String::from_utf8(rendered).unwrap());
}

#[test]
fn test_hash_default_alphabet_is_base94() {
    let dir = workspace();
    let output = hash_cmd(dir.path())
        .arg("--header")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(output).unwrap().starts_with("Found 94 characters\n"));
}

#[test]
fn test_hash_secret_changes_output() {
    let dir = workspace();
    let without = hash_cmd(dir.path())
        .arg("--hex")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    fs::write(dir.path().join("secret.txt"), "pepper").unwrap();
    let with = hash_cmd(dir.path())
        .arg("--hex")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_ne!(without, with);
}

#[test]
fn test_hash_rejects_alphabet_before_reading_inputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "only\n").unwrap();

    // message.txt does not exist: the alphabet error must come first
    hash_cmd(dir.path())
        .args(["-a", "one.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn test_hash_missing_message_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    hash_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error on message.txt"));
}

#[test]
fn test_hash_failure_writes_no_output() {
    let dir = workspace();
    fs::write(dir.path().join("nonce.txt"), "short").unwrap();

    hash_cmd(dir.path())
        .args(["-o", "output.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hash error"));

    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn test_hash_interactive_defaults() {
    let dir = workspace();
    fs::write(dir.path().join("secret.txt"), "").unwrap();
    fs::write(dir.path().join("data.txt"), "ctx").unwrap();
    // Every answer empty: defaults for files and numbers, output.txt at the end
    let answers = "\n".repeat(10);
    tagbase()
        .current_dir(dir.path())
        .args(["hash", "--interactive", "--hex"])
        .write_stdin(answers)
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing entered, defaulting to \"message.txt\""));

    let written = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert_eq!(written.len(), 64);
}
