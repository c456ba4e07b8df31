use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn storefront(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_storefront"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run storefront")
}

fn unreachable_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[catalog]
endpoint = "http://127.0.0.1:9/api/data"
timeout_seconds = 2
connect_timeout_seconds = 1
"#,
    )
    .expect("write config");
    path
}

#[test]
fn help_lists_flags() {
    let output = storefront(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--config", "--endpoint", "--query", "--per-page", "--print"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn print_with_unreachable_catalog_shows_empty_state() {
    let dir = TempDir::new().expect("tempdir");
    let config = unreachable_config(&dir);
    let output = storefront(&[
        "--config",
        config.to_str().expect("utf-8 path"),
        "--print",
        "--query",
        "keyword=hat&sort=price_high",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-- No items found"));
    assert!(stdout.contains("http://localhost:3000/store?keyword=hat&sort=price_high"));
}

#[test]
fn invalid_config_fails_before_fetching() {
    let dir = TempDir::new().expect("tempdir");
    let config = unreachable_config(&dir);
    let output = storefront(&[
        "--config",
        config.to_str().expect("utf-8 path"),
        "--per-page",
        "0",
        "--print",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("items_per_page"));
}

#[test]
fn invalid_query_url_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let config = unreachable_config(&dir);
    let output = storefront(&[
        "--config",
        config.to_str().expect("utf-8 path"),
        "--query",
        "http://[bad",
        "--print",
    ]);
    assert!(!output.status.success());
}

#[test]
fn query_value_containing_url_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    let config = unreachable_config(&dir);
    let output = storefront(&[
        "--config",
        config.to_str().expect("utf-8 path"),
        "--query",
        "keyword=https://shop.example",
        "--print",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://localhost:3000/store?keyword=https://shop.example"));
}
