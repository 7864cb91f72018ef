//! End-to-end lifecycle: init → edit → check → summary

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::my_profile;

#[test]
fn test_init_edit_check_summary() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    // Step 1: Write the starter file
    my_profile(dir)
        .arg("init")
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created profile.toml"));

    // Step 2: The starter file is valid as written
    my_profile(dir).arg("check").current_dir(dir).assert().success();

    // Step 3: Replace it with a real profile
    fs::write(
        dir.join("profile.toml"),
        r#"name = "Ada Lovelace"
role = "Pionera de la programación"
skills = ["Matemática", "Algoritmos", "algoritmos", "Documentación"]
location = "Londres, Reino Unido"
"#,
    )
    .unwrap();

    // Step 4: Summary reads the default file
    my_profile(dir)
        .arg("summary")
        .current_dir(dir)
        .assert()
        .success()
        .stdout(
            "Ada Lovelace — Pionera de la programación | Location: Londres, Reino Unido \
             | Skills: Algoritmos, Documentación, Matemática\n",
        );
}

#[test]
fn test_init_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("profile.toml"), "keep me").unwrap();

    my_profile(dir)
        .arg("init")
        .current_dir(dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(dir.join("profile.toml")).unwrap(), "keep me");

    my_profile(dir).args(["init", "--force"]).current_dir(dir).assert().success();
    assert!(fs::read_to_string(dir.join("profile.toml")).unwrap().contains("name ="));
}

#[test]
fn test_init_custom_path() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    my_profile(dir)
        .args(["init", "--file", "profiles/me.toml"])
        .current_dir(dir)
        .assert()
        .success();

    my_profile(dir)
        .args(["check", "-f", "profiles/me.toml"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: profiles/me.toml"));
}
