use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn stockroom(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.env("STOCKROOM_HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

#[test]
fn test_add_list_and_stats() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .args(["add", "Mouse Logitech", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added: Mouse Logitech"));
    stockroom(temp_dir.path())
        .args(["add", "Monitor 24", "0"])
        .assert()
        .success();

    stockroom(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mouse Logitech"))
        .stdout(predicate::str::contains("Out of stock"))
        .stdout(predicate::str::contains("Total: 2  Low stock: 1  Out of stock: 1"));

    assert!(temp_dir.path().join("inventory-products.json").exists());
}

#[test]
fn test_duplicate_name_fails_with_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    stockroom(temp_dir.path())
        .args(["add", "Mouse", "3"])
        .assert()
        .success();

    stockroom(temp_dir.path())
        .args(["add", "MOUSE", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    stockroom(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1"));
}

#[test]
fn test_validation_messages() {
    let temp_dir = tempfile::tempdir().unwrap();
    stockroom(temp_dir.path())
        .args(["add", "M", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 characters"));
    stockroom(temp_dir.path())
        .args(["add", "Mouse", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn test_search_keeps_indexes_and_edit_by_index() {
    let temp_dir = tempfile::tempdir().unwrap();
    stockroom(temp_dir.path()).arg("seed").assert().success();

    stockroom(temp_dir.path())
        .args(["search", "webcam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5."))
        .stdout(predicate::str::contains("Webcam HD"))
        .stdout(predicate::str::contains("Notebook Dell").not());

    stockroom(temp_dir.path())
        .args(["edit", "5", "--quantity", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated (5): Webcam HD (2)"));
}

#[test]
fn test_remove_unknown_index_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    stockroom(temp_dir.path())
        .args(["rm", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 4"));
}

#[test]
fn test_export_then_import_into_fresh_store() {
    let source = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    let backups = source.path().join("backups");

    stockroom(source.path()).arg("seed").assert().success();
    stockroom(source.path())
        .arg("export")
        .arg("-o")
        .arg(&backups)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 products"));

    let backup = std::fs::read_dir(&backups)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();

    stockroom(target.path())
        .arg("import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 5"));
}

#[test]
fn test_clear_requires_yes() {
    let temp_dir = tempfile::tempdir().unwrap();
    stockroom(temp_dir.path()).arg("seed").assert().success();
    stockroom(temp_dir.path()).arg("clear").assert().failure();
    stockroom(temp_dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 5 products"));
    stockroom(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn test_config_storage_key_switches_slot() {
    let temp_dir = tempfile::tempdir().unwrap();
    stockroom(temp_dir.path())
        .args(["config", "storage-key", "branch-2"])
        .assert()
        .success();
    stockroom(temp_dir.path())
        .args(["add", "Mouse", "3"])
        .assert()
        .success();

    assert!(temp_dir.path().join("branch-2.json").exists());
    assert!(!temp_dir.path().join("inventory-products.json").exists());

    stockroom(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage-key = branch-2"));
}
