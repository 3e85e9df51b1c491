#![allow(missing_docs)]
use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn test_caesar_encrypt_from_argument() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("caesar")
        .arg("--key").arg("3")
        .arg("Hello, World!")
        .assert().success()
        .stdout("Khoor, Zruog!\n");
}

#[test]
fn test_negative_key_is_not_taken_for_a_flag() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("decrypt").arg("caesar")
        .arg("--key").arg("-3")
        .arg("ABC")
        .assert().success()
        .stdout("DEF\n");
}

#[test]
fn test_rail_fence_decrypt() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("decrypt").arg("railfence")
        .arg("--key").arg("3")
        .arg("WECRLTEERDSOEEFEAOCAIVDEN")
        .assert().success()
        .stdout("WEAREDISCOVEREDFLEEATONCE\n");
}

#[test]
fn test_text_from_stdin() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("vigenere")
        .arg("--key").arg("LEMON")
        .write_stdin("ATTACKATDAWN\n")
        .assert().success()
        .stdout("LXFOPVEFRNHR\n");
}

#[test]
fn test_file_roundtrip_with_playfair() {
    // 1. Setup
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("letter.txt");
    let encrypted_path = temp_dir.path().join("letter.enc");
    let decrypted_path = temp_dir.path().join("letter.dec");
    fs::write(&input_path, "Hello\n").expect("Failed to write input file");

    // 2. Encrypt to a file
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("playfair")
        .arg("--key").arg("MONARCHY")
        .arg("--input").arg(&input_path)
        .arg("--output").arg(&encrypted_path)
        .assert().success()
        .stdout(predicate::str::contains("Successfully wrote the encrypted text"));
    let encrypted = fs::read_to_string(&encrypted_path).expect("Failed to read encrypted file");
    assert_eq!(encrypted, "CFSUPM");

    // 3. Decrypt it back
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("decrypt").arg("playfair")
        .arg("--key").arg("MONARCHY")
        .arg("--input").arg(&encrypted_path)
        .arg("--output").arg(&decrypted_path)
        .assert().success();
    let decrypted = fs::read_to_string(&decrypted_path).expect("Failed to read decrypted file");
    assert_eq!(decrypted, "HELLO");
}

#[test]
fn test_json_output() {
    let output = Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("transposition")
        .arg("--key").arg("3")
        .arg("--json")
        .arg("HELLOWORLD")
        .output().expect("Failed to run cipher-cli");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["cipher"], "transposition");
    assert_eq!(value["mode"], "encrypt");
    assert_eq!(value["result"], "HLODEORLWL");
}

#[test]
fn test_invalid_key_fails() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("caesar")
        .arg("--key").arg("three")
        .arg("ABC")
        .assert().failure()
        .stderr(predicate::str::contains("invalid key 'three'"));

    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("railfence")
        .arg("--key").arg("1")
        .arg("ABC")
        .assert().failure()
        .stderr(predicate::str::contains("at least 2"));
}

#[test]
fn test_unknown_cipher_is_rejected_by_the_parser() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("encrypt").arg("enigma")
        .arg("--key").arg("1")
        .arg("ABC")
        .assert().failure()
        .stderr(predicate::str::contains("unknown cipher 'enigma'"));
}

#[test]
fn test_matrix_and_list() {
    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("matrix").arg("--key").arg("MONARCHY")
        .assert().success()
        .stdout("M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z\n");

    Command::cargo_bin("cipher-cli").expect("Failed to find cipher-cli binary")
        .arg("list")
        .assert().success()
        .stdout(predicate::str::contains("railfence"))
        .stdout(predicate::str::contains("Rail Fence"))
        .stdout(predicate::str::contains("keyword"));
}
