// tests/integration_test.rs
use git2::Repository;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

struct CliOutput {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn cli(args: &[&str], cwd: &Path) -> CliOutput {
    let output: Output = Command::new(env!("CARGO_BIN_EXE_versionize"))
        .args(args)
        .current_dir(cwd)
        // keep user configuration and forced colours out of the picture
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd)
        .env_remove("CLICOLOR_FORCE")
        .env_remove("VERSIONIZE_LOG")
        .output()
        .expect("Failed to execute versionize");

    CliOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}

fn write_json(dir: &Path, name: &str, content: Value) {
    fs::write(dir.join(name), content.to_string()).unwrap();
}

fn read_version(dir: &Path, name: &str) -> String {
    let value: Value = serde_json::from_str(&fs::read_to_string(dir.join(name)).unwrap()).unwrap();
    value["version"].as_str().unwrap().to_string()
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "package.json", json!({ "version": "0.3.0" }));
    write_json(dir.path(), "manifest.json", json!({ "version": "0.4.0-2" }));
    dir
}

fn git_project() -> TempDir {
    let dir = project();
    let repo = Repository::init(dir.path()).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Versionize Test").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();
    dir
}

fn in_repository(dir: &Path) -> bool {
    Repository::discover(dir).is_ok()
}

fn head_message(dir: &Path) -> String {
    let repo = Repository::open(dir).unwrap();
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    commit.message().unwrap().to_string()
}

fn tags(dir: &Path) -> Vec<String> {
    let repo = Repository::open(dir).unwrap();
    let names = repo.tag_names(None).unwrap();
    names.iter().flatten().map(str::to_string).collect()
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let result = cli(&["--help"], dir.path());
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("versionize"));
    assert!(result.stdout.contains("--raw"));
}

#[test]
fn test_current_version() {
    let dir = project();
    let result = cli(&[], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stderr, "");
    assert_eq!(result.stdout, "info Current version is 0.4.0-2\n");
}

#[test]
fn test_current_version_raw() {
    let dir = project();
    let result = cli(&["--raw"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stderr, "");
    assert_eq!(result.stdout, "0.4.0-2\n");
}

#[test]
fn test_latest() {
    let dir = project();
    let result = cli(&["latest"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stderr, "");
    assert_eq!(
        result.stdout,
        "info Current version is 0.4.0-2\ninfo New version is 0.4.0-3\n"
    );
    assert_eq!(read_version(dir.path(), "package.json"), "0.3.0");
    assert_eq!(read_version(dir.path(), "manifest.json"), "0.4.0-3");
}

#[test]
fn test_stable_raw() {
    let dir = project();
    let result = cli(&["stable", "--raw"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "0.4.0\n");
    assert_eq!(read_version(dir.path(), "package.json"), "0.4.0");
    assert_eq!(read_version(dir.path(), "manifest.json"), "0.4.0");
}

#[test]
fn test_hotfix() {
    let dir = project();
    let result = cli(&["hotfix"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(
        result.stdout,
        "info Current version is 0.4.0-2\ninfo New version is 0.3.1\n"
    );
    assert_eq!(read_version(dir.path(), "package.json"), "0.3.1");
    assert_eq!(read_version(dir.path(), "manifest.json"), "0.3.1");
}

#[test]
fn test_unknown_release_type_is_a_usage_error() {
    let dir = project();
    let result = cli(&["major"], dir.path());
    assert_eq!(result.code, Some(2));
    assert_eq!(read_version(dir.path(), "manifest.json"), "0.4.0-2");
}

#[test]
fn test_inconsistent_versions() {
    for flags in [&[][..], &["--commit"][..], &["--tag"][..]] {
        let dir = TempDir::new().unwrap();
        write_json(dir.path(), "package.json", json!({ "version": "0.3.0" }));
        write_json(dir.path(), "manifest.json", json!({ "version": "0.5.0-2" }));

        let mut args = vec!["latest"];
        args.extend_from_slice(flags);
        let result = cli(&args, dir.path());

        assert_ne!(result.code, Some(0));
        assert_eq!(
            result.stderr,
            "error Versions in package.json and manifest.json are inconsistent\n"
        );
        assert_eq!(result.stdout, "");
    }
}

#[test]
fn test_not_in_package_directory() {
    let dir = TempDir::new().unwrap();
    let result = cli(&["stable"], dir.path());
    assert_eq!(result.code, Some(1));
    assert_eq!(result.stderr, "error Not in package directory\n");
    assert!(!dir.path().join("package.json").exists());
    assert!(!dir.path().join("manifest.json").exists());
}

#[test]
fn test_commit_without_repository_warns() {
    for flag in ["--commit", "--tag"] {
        let dir = project();
        if in_repository(dir.path()) {
            return;
        }

        let result = cli(&["latest", flag], dir.path());
        assert_eq!(result.code, Some(0));
        assert_eq!(result.stderr, "warning git execution failed\n");
        assert_eq!(
            result.stdout,
            "info Current version is 0.4.0-2\ninfo New version is 0.4.0-3\n"
        );
        assert_eq!(read_version(dir.path(), "manifest.json"), "0.4.0-3");
    }
}

#[test]
fn test_latest_commit() {
    let dir = git_project();
    let result = cli(&["latest", "--commit"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stderr, "");
    assert_eq!(
        result.stdout,
        "info Current version is 0.4.0-2\ninfo New version is 0.4.0-3\n"
    );

    assert_eq!(head_message(dir.path()), "v0.4.0-3");
    assert!(tags(dir.path()).is_empty());
}

#[test]
fn test_stable_tag() {
    let dir = git_project();
    let result = cli(&["stable", "--tag"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stderr, "");

    assert_eq!(head_message(dir.path()), "v0.4.0");
    assert_eq!(tags(dir.path()), vec!["v0.4.0"]);

    let repo = Repository::open(dir.path()).unwrap();
    let tag = repo
        .find_reference("refs/tags/v0.4.0")
        .unwrap()
        .peel_to_tag()
        .unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(tag.target_id(), head.id());
    assert_eq!(tag.message(), Some("v0.4.0"));
}

#[test]
fn test_hotfix_tag_commits_both_records() {
    let dir = git_project();
    let result = cli(&["hotfix", "--tag"], dir.path());
    assert_eq!(result.code, Some(0));

    let repo = Repository::open(dir.path()).unwrap();
    let tree = repo.head().unwrap().peel_to_tree().unwrap();
    assert!(tree.get_name("package.json").is_some());
    assert!(tree.get_name("manifest.json").is_some());
    assert_eq!(tags(dir.path()), vec!["v0.3.1"]);
}

#[test]
fn test_config_file_changes_record_names() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "app.json", json!({ "version": "1.0.0" }));
    fs::write(
        dir.path().join("versionize.toml"),
        "[records]\nprimary = \"app.json\"\nsecondary = \"store.json\"\n",
    )
    .unwrap();

    let result = cli(&["latest", "--raw"], dir.path());
    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "1.1.0-0\n");
    assert_eq!(read_version(dir.path(), "store.json"), "1.1.0-0");
}
