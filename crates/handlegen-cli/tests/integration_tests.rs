//! End-to-end tests for the `handlegen` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config and environment.
fn handlegen(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("handlegen").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("SITE_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

fn write_config(home: &TempDir, body: &str) -> std::path::PathBuf {
    let path = home.path().join("handlegen.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    handlegen(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Username suggestions"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    handlegen(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_nova_minimal_short() {
    let home = TempDir::new().unwrap();
    let names = stdout_lines(handlegen(&home).args([
        "generate", "-k", "Nova", "-s", "minimal", "-l", "short", "-n", "5", "--format", "list",
    ]));

    assert!(!names.is_empty());
    assert!(names.len() <= 5);
    for name in &names {
        assert!(name.starts_with("Nova"), "{name}");
        assert!((4..=8).contains(&name.len()), "{name}");
    }
}

#[test]
fn test_generate_punctuation_keyword_falls_back_to_nova() {
    let home = TempDir::new().unwrap();
    let names = stdout_lines(handlegen(&home).args(["g", "-k", "!!!", "--format", "list"]));
    assert!(!names.is_empty());
    assert!(names.len() <= 24);
    assert!(names.iter().all(|n| n.starts_with("Nova")));
}

#[test]
fn test_generate_same_seed_same_output() {
    let home = TempDir::new().unwrap();
    let args = ["generate", "-k", "river", "--seed", "42", "--format", "list"];
    let first = stdout_lines(handlegen(&home).args(args));
    let second = stdout_lines(handlegen(&home).args(args));
    assert_eq!(first, second);
}

#[test]
fn test_generate_json_report() {
    let home = TempDir::new().unwrap();
    let output = handlegen(&home)
        .args(["generate", "-k", "zen", "-l", "long", "-n", "6", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["keyword"], "zen");
    assert_eq!(report["length"], "long");
    assert_eq!(report["budget"], 18);
    let suggestions = report["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty() && suggestions.len() <= 6);
}

#[test]
fn test_global_json_output_overrides_table() {
    let home = TempDir::new().unwrap();
    let output = handlegen(&home)
        .args(["--output-format", "json", "generate", "-n", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(report["suggestions"].is_array());
}

#[test]
fn test_generate_csv() {
    let home = TempDir::new().unwrap();
    let lines = stdout_lines(handlegen(&home).args(["generate", "-n", "3", "--format", "csv"]));
    assert_eq!(lines[0], "index,username");
    assert!(lines[1].starts_with("1,Nova"));
}

#[test]
fn test_generate_uses_config_defaults() {
    let home = TempDir::new().unwrap();
    let config = write_config(
        &home,
        "[generator]\nkeyword = \"orbit\"\nlength = \"short\"\ncount = 4\n",
    );
    let names = stdout_lines(
        handlegen(&home)
            .arg("--config")
            .arg(&config)
            .args(["generate", "--format", "list"]),
    );
    assert!(names.len() <= 4);
    assert!(names.iter().all(|n| n.starts_with("Orbit") && n.len() <= 8));
}

#[test]
fn test_styles_lists_presets_and_budgets() {
    let home = TempDir::new().unwrap();
    handlegen(&home)
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("minimal"))
        .stdout(predicate::str::contains("up to 18 chars"));
}

#[test]
fn test_site_robots_default_url() {
    let home = TempDir::new().unwrap();
    handlegen(&home)
        .args(["site", "robots"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("User-Agent: Googlebot\n"))
        .stdout(predicate::str::contains("User-Agent: GPTBot"))
        .stdout(predicate::str::contains("Crawl-delay: 1"))
        .stdout(predicate::str::contains(
            "Sitemap: https://username-generator.app/sitemap.xml",
        ));
}

#[test]
fn test_site_url_env_overrides_sitemap() {
    let home = TempDir::new().unwrap();
    handlegen(&home)
        .env("SITE_URL", "https://handles.example/")
        .args(["site", "sitemap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<loc>https://handles.example/</loc>"))
        .stdout(predicate::str::contains("<changefreq>weekly</changefreq>"));
}

#[test]
fn test_site_schema_is_json_array() {
    let home = TempDir::new().unwrap();
    let output = handlegen(&home)
        .args(["site", "schema"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items[0]["@type"], "WebSite");
    assert_eq!(items[1]["@type"], "FAQPage");
}

#[test]
fn test_site_build_writes_documents() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("public");

    handlegen(&home)
        .args(["site", "build", "--out"])
        .arg(&out)
        .assert()
        .success();

    for file in ["robots.txt", "sitemap.xml", "schema.jsonld"] {
        assert!(Path::new(&out).join(file).is_file(), "{file}");
    }
}

#[test]
fn test_config_get_reads_file() {
    let home = TempDir::new().unwrap();
    let config = write_config(&home, "[site]\nurl = \"https://file.example\"\n");
    handlegen(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "site.url"])
        .assert()
        .success()
        .stdout("https://file.example\n");
}

#[test]
fn test_env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config = write_config(&home, "[generator]\ncount = 4\n");
    handlegen(&home)
        .env("HANDLEGEN_GENERATOR__COUNT", "7")
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "generator.count"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_init_then_list() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("conf/handlegen.toml");

    handlegen(&home)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.is_file());

    handlegen(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[generator]"))
        .stdout(predicate::str::contains("count = 24"));
}

#[test]
fn test_config_path_honours_flag() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "").unwrap();
    handlegen(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    handlegen(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("handlegen"));
}
