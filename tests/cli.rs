//! End-to-end tests of the `appver` binary against properties files in temporary directories.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PROPERTIES: &str = "\
# Project-wide Gradle settings.
org.gradle.jvmargs=-Xmx2048m -Dfile.encoding=UTF-8
android.useAndroidX=true
appVersionName=1.2.3
appVersionCode=17
";

fn appver(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("appver").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("APPVER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn project(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("gradle.properties"), content).unwrap();
    dir
}

fn properties(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("gradle.properties")).unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:").and(predicate::str::contains("<BUMP_TYPE>")));

    assert_eq!(PROPERTIES, properties(&dir));
}

#[test]
fn one_argument_prints_usage() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .arg("1.2.3")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:"));

    assert_eq!(PROPERTIES, properties(&dir));
}

#[test]
fn bump_minor() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["1.2.3", "minor"])
        .assert()
        .success()
        .stdout("1.3.0\n");

    assert_eq!(
        PROPERTIES
            .replace("appVersionName=1.2.3", "appVersionName=1.3.0")
            .replace("appVersionCode=17", "appVersionCode=18"),
        properties(&dir)
    );
}

#[test]
fn bump_major() {
    let dir = project("appVersionName=2.9.9\nappVersionCode=5\n");

    appver(&dir)
        .args(["2.9.9", "major"])
        .assert()
        .success()
        .stdout("3.0.0\n");

    assert_eq!("appVersionName=3.0.0\nappVersionCode=6\n", properties(&dir));
}

#[test]
fn bump_patch_without_version_code() {
    let dir = project("appVersionName=1.0.0\n");

    appver(&dir)
        .args(["1.0.0", "patch"])
        .assert()
        .success()
        .stdout("1.0.1\n");

    assert_eq!("appVersionName=1.0.1\n", properties(&dir));
}

#[test]
fn unknown_bump_type_keeps_version() {
    let dir = project("appVersionName=1.0.0\nappVersionCode=5\n");

    appver(&dir)
        .args(["1.2.3", "foo"])
        .assert()
        .success()
        .stdout("1.2.3\n")
        .stderr(predicate::str::contains("unrecognized bump type"));

    // the file is still written, and the build code still moves
    assert_eq!("appVersionName=1.2.3\nappVersionCode=6\n", properties(&dir));
}

#[test]
fn unknown_bump_type_strict_fails() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["1.2.3", "foo", "--strict"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unknown bump type `foo`"));

    assert_eq!(PROPERTIES, properties(&dir));
}

#[test]
fn malformed_version_fails() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["1.2", "minor"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("should have 3 dot-separated fields"));

    assert_eq!(PROPERTIES, properties(&dir));
}

#[test]
fn missing_properties_file_fails() {
    let dir = TempDir::new().unwrap();

    appver(&dir)
        .args(["1.2.3", "patch"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("gradle.properties"));

    assert!(!dir.path().join("gradle.properties").exists());
}

#[test]
fn file_option() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("app")).unwrap();
    let path = dir.path().join("app").join("version.properties");
    fs::write(&path, "appVersionName=0.1.0\nappVersionCode=1\n").unwrap();

    appver(&dir)
        .args(["0.1.0", "minor", "--file", "app/version.properties"])
        .assert()
        .success()
        .stdout("0.2.0\n");

    assert_eq!(
        "appVersionName=0.2.0\nappVersionCode=2\n",
        fs::read_to_string(path).unwrap()
    );
}

#[test]
fn file_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("release.properties");
    fs::write(&path, "appVersionName=0.1.0\nappVersionCode=1\n").unwrap();

    appver(&dir)
        .env("APPVER_FILE", &path)
        .args(["0.1.0", "patch"])
        .assert()
        .success()
        .stdout("0.1.1\n");

    assert_eq!(
        "appVersionName=0.1.1\nappVersionCode=2\n",
        fs::read_to_string(path).unwrap()
    );
}

#[test]
fn dry_run_leaves_file() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["1.2.3", "major", "--dry-run"])
        .assert()
        .success()
        .stdout("2.0.0\n");

    assert_eq!(PROPERTIES, properties(&dir));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["1.2.3", "patch", "-v"])
        .assert()
        .success()
        .stdout("1.2.4\n")
        .stderr(predicate::str::contains("incremented version code"));
}

#[test]
fn strict_requires_version_name() {
    let dir = project("appVersionCode=5\n");

    appver(&dir)
        .args(["1.2.3", "patch", "--strict"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("appVersionName"));

    assert_eq!("appVersionCode=5\n", properties(&dir));
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["1.2.3", "minor", "extra"])
        .assert()
        .success()
        .stdout("1.3.0\n");

    assert!(properties(&dir).contains("appVersionName=1.3.0\nappVersionCode=18\n"));
}

#[test]
fn hyphen_bump_type_keeps_version() {
    let dir = project("appVersionName=1.2.3\nappVersionCode=5\n");

    appver(&dir)
        .args(["1.2.3", "-x"])
        .assert()
        .success()
        .stdout("1.2.3\n");

    assert_eq!("appVersionName=1.2.3\nappVersionCode=6\n", properties(&dir));
}

#[test]
fn hyphen_bump_type_strict_fails() {
    let dir = project(PROPERTIES);

    appver(&dir)
        .args(["--strict", "1.2.3", "-x"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unknown bump type `-x`"));

    assert_eq!(PROPERTIES, properties(&dir));
}
