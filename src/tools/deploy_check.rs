// SPDX-License-Identifier: MPL-2.0
//! Polls the published site until a fixed number of checks have run.
//!
//! Each check is one GET request. The poller never stops early: a 200 is
//! reported as accessible, any other status or a transport failure is
//! logged, and the next check starts on the following interval tick.
//! Ticks are counted from the first check, so a slow response does not push
//! later checks back.

use crate::app::config::{DEFAULT_CHECK_INTERVAL_SECS, DEFAULT_MAX_CHECKS, MAX_MAX_CHECKS};
use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

const USER_AGENT: &str = concat!("CrabPresentation/", env!("CARGO_PKG_VERSION"));

/// Status line and headers of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

/// Something that can be asked for the current state of the site.
pub trait Probe {
    fn probe(&self) -> impl Future<Output = Result<ProbeResponse>> + Send;
}

/// [`Probe`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpProbe {
    /// Builds a client with the given per-request timeout. Redirects are
    /// reported, not followed.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Probe for HttpProbe {
    async fn probe(&self) -> Result<ProbeResponse> {
        let response = self.client.get(&self.url).send().await?;
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        Ok(ProbeResponse {
            status: response.status().as_u16(),
            headers,
        })
    }
}

/// How often and how many times to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub interval: Duration,
    pub max_checks: u32,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_SECS),
            max_checks: DEFAULT_MAX_CHECKS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accessible,
    UnexpectedStatus(u16),
    TransportError(String),
}

impl Verdict {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Accessible)
    }
}

/// Result of a single check. `attempt` counts from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub attempt: u32,
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    pub verdict: Verdict,
}

impl CheckOutcome {
    fn from_result(attempt: u32, result: Result<ProbeResponse>) -> Self {
        match result {
            Ok(response) => {
                let verdict = if response.status == 200 {
                    Verdict::Accessible
                } else {
                    Verdict::UnexpectedStatus(response.status)
                };
                Self {
                    attempt,
                    status: Some(response.status),
                    headers: response.headers,
                    verdict,
                }
            }
            Err(err) => Self {
                attempt,
                status: None,
                headers: Vec::new(),
                verdict: Verdict::TransportError(err.to_string()),
            },
        }
    }
}

/// `name: value` pairs joined on one line.
fn format_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn log_outcome(outcome: &CheckOutcome) {
    if let Some(status) = outcome.status {
        tracing::info!("Status: {status}");
    }
    if !outcome.headers.is_empty() {
        tracing::info!("Headers: {}", format_headers(&outcome.headers));
    }
    match &outcome.verdict {
        Verdict::Accessible => tracing::info!("Site is accessible!"),
        Verdict::UnexpectedStatus(code) => tracing::warn!("Site returned status code: {code}"),
        Verdict::TransportError(message) => tracing::error!("Error checking deployment: {message}"),
    }
}

/// Fixed-rate ticker, or `None` for a zero interval (checks run back to back).
fn fixed_rate(interval: Duration) -> Option<Interval> {
    if interval.is_zero() {
        return None;
    }
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    Some(ticker)
}

/// Runs exactly `schedule.max_checks` checks, the first one immediately and
/// the rest on a fixed `schedule.interval` cadence measured from the first.
pub async fn poll<P: Probe>(probe: &P, schedule: PollSchedule) -> Vec<CheckOutcome> {
    let total = schedule.max_checks;
    let mut outcomes = Vec::with_capacity(total as usize);
    let mut ticker = fixed_rate(schedule.interval);

    for attempt in 1..=total {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }
        tracing::info!("Check {attempt} of {total}");
        let outcome = CheckOutcome::from_result(attempt, probe.probe().await);
        log_outcome(&outcome);
        outcomes.push(outcome);
    }

    tracing::info!("Finished {total} deployment checks");
    outcomes
}

/// Accepts between 1 and [`MAX_MAX_CHECKS`] checks, wherever the count
/// came from.
pub fn validate(schedule: &PollSchedule) -> Result<()> {
    if !(1..=MAX_MAX_CHECKS).contains(&schedule.max_checks) {
        return Err(Error::InvalidArgument(format!(
            "max_checks must be between 1 and {MAX_MAX_CHECKS}, got {}",
            schedule.max_checks
        )));
    }
    Ok(())
}
