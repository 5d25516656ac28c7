// SPDX-License-Identifier: MPL-2.0
//! Runs the `copy-assets` and `verify-deploy` binaries and checks their exit
//! codes and log lines.

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};
use std::thread;
use tempfile::tempdir;

const COPY_ASSETS: &str = env!("CARGO_BIN_EXE_copy-assets");
const VERIFY_DEPLOY: &str = env!("CARGO_BIN_EXE_verify-deploy");

/// Runs a binary with an isolated config directory and no inherited log
/// filter or proxy settings.
fn run(binary: &str, config_dir: &Path, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .arg("--config-dir")
        .arg(config_dir)
        .env_remove("RUST_LOG")
        .env_remove("CRAB_PRESENTATION_CONFIG_DIR")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_PROXY", "127.0.0.1")
        .output()
        .expect("binary should start")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Answers every connection with `status_line` from a background thread.
fn serve_status(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else {
                break;
            };
            let mut buffer = [0_u8; 1024];
            let _ = stream.read(&mut buffer);
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nX-Served-By: loopback\r\nConnection: close\r\n\r\n"
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/DS_6306_Project/")
}

#[test]
fn copy_assets_fails_on_missing_source() {
    let root = tempdir().expect("root dir");
    let source = root.path().join("absent");
    let destination = root.path().join("out");

    let output = run(
        COPY_ASSETS,
        root.path(),
        &[
            "--source",
            source.to_str().expect("utf-8 temp path"),
            "--destination",
            destination.to_str().expect("utf-8 temp path"),
        ],
    );

    assert_eq!(output.status.code(), Some(1), "{}", stderr(&output));
    assert!(stderr(&output).contains("Error copying files"));
}

#[test]
fn copy_assets_succeeds_and_logs_each_file() {
    let root = tempdir().expect("root dir");
    let source = root.path().join("plots");
    let destination = root.path().join("public").join("output").join("plots");
    fs::create_dir(&source).expect("create source");
    fs::write(source.join("a.png"), b"a").expect("write fixture");
    fs::write(source.join("notes.txt"), b"skip").expect("write fixture");

    let output = run(
        COPY_ASSETS,
        root.path(),
        &[
            "--source",
            source.to_str().expect("utf-8 temp path"),
            "--destination",
            destination.to_str().expect("utf-8 temp path"),
        ],
    );

    let log = stderr(&output);
    assert_eq!(output.status.code(), Some(0), "{log}");
    assert!(log.contains("Copied a.png successfully"), "{log}");
    assert!(log.contains("All plots copied successfully!"), "{log}");
    assert!(!log.contains('\u{1b}'), "piped logs carry no color codes: {log}");
    assert!(destination.join("a.png").exists());
    assert!(!destination.join("notes.txt").exists());
}

#[test]
fn verify_deploy_exits_zero_after_every_check() {
    let config_dir = tempdir().expect("config dir");
    let url = serve_status("200 OK");

    let output = run(
        VERIFY_DEPLOY,
        config_dir.path(),
        &["--url", &url, "--interval-secs", "0", "--max-checks", "2"],
    );

    let log = stderr(&output);
    assert_eq!(output.status.code(), Some(0), "{log}");
    assert!(log.contains("Check 2 of 2"), "{log}");
    assert!(log.contains("Status: 200"), "{log}");
    assert!(log.contains("x-served-by: loopback"), "{log}");
    assert!(log.contains("Site is accessible!"), "{log}");
}

#[test]
fn verify_deploy_exits_zero_even_when_site_is_missing() {
    let config_dir = tempdir().expect("config dir");
    let url = serve_status("404 Not Found");

    let output = run(
        VERIFY_DEPLOY,
        config_dir.path(),
        &["--url", &url, "--interval-secs", "0", "--max-checks", "1"],
    );

    let log = stderr(&output);
    assert_eq!(output.status.code(), Some(0), "{log}");
    assert!(log.contains("Site returned status code: 404"), "{log}");
}

#[test]
fn zero_checks_is_rejected_from_flag_and_config() {
    let config_dir = tempdir().expect("config dir");
    let flag = run(VERIFY_DEPLOY, config_dir.path(), &["--max-checks", "0"]);
    assert_eq!(flag.status.code(), Some(1), "{}", stderr(&flag));

    fs::write(
        config_dir.path().join("settings.toml"),
        "[deploy]\nmax_checks = 0\n",
    )
    .expect("write settings");
    let from_config = run(VERIFY_DEPLOY, config_dir.path(), &[]);
    assert_eq!(from_config.status.code(), Some(1), "{}", stderr(&from_config));
    assert!(stderr(&from_config).contains("max_checks must be between 1 and"));
}
