// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks for the `copy-assets` and `verify-deploy` helpers.

use crab_presentation::app::config::PLOT_EXTENSION;
use crab_presentation::tools::copy_assets::copy_plots;
use crab_presentation::tools::deploy_check::{poll, HttpProbe, PollSchedule, Verdict};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read destination")
        .map(|entry| {
            entry
                .expect("directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

#[test]
fn copy_twice_gives_identical_listing() {
    let source = tempdir().expect("source dir");
    let root = tempdir().expect("destination root");
    let destination = root.path().join("output").join("plots");
    for name in ["age_distribution.png", "correlation_matrix.png", "notes.md"] {
        fs::write(source.path().join(name), name.as_bytes()).expect("write fixture");
    }

    let first = copy_plots(source.path(), &destination, PLOT_EXTENSION).expect("first run");
    let after_first = listing(&destination);
    let second = copy_plots(source.path(), &destination, PLOT_EXTENSION).expect("second run");

    assert_eq!(first, second);
    assert_eq!(after_first, listing(&destination));
    assert_eq!(
        after_first,
        vec!["age_distribution.png", "correlation_matrix.png"]
    );
    assert_eq!(
        fs::read(destination.join("age_distribution.png")).expect("read copy"),
        b"age_distribution.png"
    );
}

/// Serves every connection with the same status line until the test ends.
async fn serve_status(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut buffer = [0_u8; 1024];
            let _ = socket.read(&mut buffer).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nX-Served-By: loopback\r\nConnection: close\r\n\r\n"
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}/DS_6306_Project/")
}

fn loopback_client(url: String) -> HttpProbe {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("build client");
    HttpProbe::with_client(client, url)
}

fn fast_schedule() -> PollSchedule {
    PollSchedule {
        interval: Duration::ZERO,
        max_checks: 10,
    }
}

#[tokio::test]
async fn poll_reports_ten_successes_against_ok_server() {
    let url = serve_status("200 OK").await;
    let outcomes = poll(&loopback_client(url), fast_schedule()).await;

    assert_eq!(outcomes.len(), 10);
    assert!(outcomes.iter().all(|o| o.verdict == Verdict::Accessible));
    assert!(outcomes[0]
        .headers
        .iter()
        .any(|(name, value)| name == "x-served-by" && value == "loopback"));
}

#[tokio::test]
async fn poll_keeps_going_against_missing_site() {
    let url = serve_status("404 Not Found").await;
    let outcomes = poll(&loopback_client(url), fast_schedule()).await;

    assert_eq!(outcomes.len(), 10);
    assert!(outcomes
        .iter()
        .all(|o| o.verdict == Verdict::UnexpectedStatus(404)));
}

#[tokio::test]
async fn poll_survives_refused_connections() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);

    let schedule = PollSchedule {
        interval: Duration::ZERO,
        max_checks: 2,
    };
    let outcomes = poll(&loopback_client(format!("http://{addr}/")), schedule).await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes
        .iter()
        .all(|o| matches!(o.verdict, Verdict::TransportError(_))));
}
