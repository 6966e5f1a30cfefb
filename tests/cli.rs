use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn righter(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resume-righter").unwrap();
    cmd.env("RESUME_RIGHTER_CONFIG_DIR", config_dir.path())
        .env_remove("RESUME_RIGHTER_BASE_URL")
        .env_remove("RESUME_RIGHTER_CSRF_TOKEN")
        .env_remove("RESUME_RIGHTER_DOWNLOAD_DIR");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    righter(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("console"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    righter(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:8000"))
        .stdout(predicate::str::contains("(fetched from service)"))
        .stdout(predicate::str::contains("Request timeout: none"));
}

#[test]
fn test_config_applies_overrides() {
    let dir = TempDir::new().unwrap();
    righter(&dir)
        .args(["--base-url", "http://resume.test", "config"])
        .env("RESUME_RIGHTER_CSRF_TOKEN", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://resume.test"))
        .stdout(predicate::str::contains("(configured)"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    righter(&dir)
        .args(["--base-url", "http://resume.test", "init"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("http://resume.test"));

    righter(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://resume.test"));
}
