//! Binary tests for the `biobalance` command

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn biobalance(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("biobalance").unwrap();
    cmd.env("BIOBALANCE_DATA_DIR", data_dir)
        .env_remove("BIOBALANCE_PASSPHRASE")
        .env_remove("COLORFGBG")
        .current_dir(data_dir);
    cmd
}

fn write_profile(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("profile.json");
    std::fs::write(
        &path,
        r#"{"name": "Alice", "age": 30, "systolic": 118, "diastolic": 76,
            "bloodSugar": 90, "oxygen": 99, "conditions": ["asthma"]}"#,
    )
    .unwrap();
    path
}

#[test]
fn theme_set_and_cycle_persist() {
    let dir = TempDir::new().unwrap();

    biobalance(dir.path())
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: system"));

    biobalance(dir.path())
        .args(["theme", "set", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    biobalance(dir.path())
        .args(["theme", "cycle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    biobalance(dir.path())
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn theme_rejects_unknown_value() {
    let dir = TempDir::new().unwrap();

    biobalance(dir.path())
        .args(["theme", "set", "sepia"])
        .assert()
        .failure();
}

#[test]
fn save_show_and_wrong_passphrase() {
    let dir = TempDir::new().unwrap();
    let profile = write_profile(dir.path());

    biobalance(dir.path())
        .args(["--passphrase", "pw", "profile", "save", "--from"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved"));

    biobalance(dir.path())
        .args(["profile", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("An encrypted profile is saved."));

    biobalance(dir.path())
        .args(["profile", "show"])
        .env("BIOBALANCE_PASSPHRASE", "pw")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: Alice"))
        .stdout(predicate::str::contains("118/76 mmHg"));

    biobalance(dir.path())
        .args(["profile", "show", "--passphrase", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));

    // Stored data never holds the plaintext name
    let storage = std::fs::read_to_string(dir.path().join("data").join("storage.json")).unwrap();
    assert!(!storage.contains("Alice"));
}

#[test]
fn export_then_import_elsewhere() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let profile = write_profile(source.path());
    let export = source.path().join("out.json");

    biobalance(source.path())
        .args(["--passphrase", "pw", "profile", "export", "--from"])
        .arg(&profile)
        .arg("--out")
        .arg(&export)
        .assert()
        .success();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export).unwrap()).unwrap();
    assert!(document["encrypted"].is_string());

    biobalance(target.path())
        .args(["--passphrase", "pw", "profile", "import", "--save"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile imported"))
        .stdout(predicate::str::contains("Profile: Alice"));

    biobalance(target.path())
        .args(["activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IMPORT"));
}

#[test]
fn import_file_without_envelope_fails() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.json");
    std::fs::write(&bogus, r#"{"cipher": "x"}"#).unwrap();

    biobalance(dir.path())
        .args(["--passphrase", "pw", "profile", "import"])
        .arg(&bogus)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}

#[test]
fn show_without_saved_profile_fails() {
    let dir = TempDir::new().unwrap();

    biobalance(dir.path())
        .args(["--passphrase", "pw", "profile", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved encrypted profile"));
}
