// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Navigation**: start route and the compact-layout breakpoint
//! - **Assets**: where plot images are read from and copied to
//! - **Deployment check**: target URL and polling schedule

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Route shown when neither the CLI nor the config names one.
pub const DEFAULT_START_ROUTE: &str = "/";

/// Below this window width (logical px) the tab row collapses into a drawer.
pub const DEFAULT_DRAWER_BREAKPOINT: f32 = 600.0;

/// Smallest accepted breakpoint.
pub const MIN_DRAWER_BREAKPOINT: f32 = 320.0;

/// Largest accepted breakpoint.
pub const MAX_DRAWER_BREAKPOINT: f32 = 1920.0;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Directory the presentation resolves `assets/...` and `output/...` against.
pub const DEFAULT_ASSETS_DIR: &str = "./public";

/// Where the external analysis pipeline writes rendered plots.
pub const DEFAULT_PLOT_SOURCE_DIR: &str = "../output/plots";

/// Where `copy-assets` places plots for the plain presentation.
pub const DEFAULT_PLOT_TARGET_DIR: &str = "./public/output/plots";

/// File suffix selected by `copy-assets`.
pub const PLOT_EXTENSION: &str = ".png";

// ==========================================================================
// Deployment Check Defaults
// ==========================================================================

/// Host serving the published site.
pub const DEFAULT_DEPLOY_HOST: &str = "jonx0037.github.io";

/// Path of the published site on that host.
pub const DEFAULT_DEPLOY_PATH: &str = "/DS_6306_Project/";

/// Seconds between two deployment checks.
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 30;

/// Number of checks performed before the poller stops.
pub const DEFAULT_MAX_CHECKS: u32 = 10;

/// Per-request timeout for a single check.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Largest accepted `max_checks`, from the config file or the CLI.
pub const MAX_MAX_CHECKS: u32 = 1_000;

/// Full URL checked by default.
pub fn default_deploy_url() -> String {
    format!("https://{DEFAULT_DEPLOY_HOST}{DEFAULT_DEPLOY_PATH}")
}

const _: () = {
    assert!(MIN_DRAWER_BREAKPOINT < DEFAULT_DRAWER_BREAKPOINT);
    assert!(DEFAULT_DRAWER_BREAKPOINT < MAX_DRAWER_BREAKPOINT);
    assert!(DEFAULT_MAX_CHECKS > 0);
    assert!(DEFAULT_MAX_CHECKS <= MAX_MAX_CHECKS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS < DEFAULT_CHECK_INTERVAL_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_deploy_url_joins_host_and_path() {
        assert_eq!(
            default_deploy_url(),
            "https://jonx0037.github.io/DS_6306_Project/"
        );
    }

    #[test]
    fn polling_schedule_matches_published_contract() {
        assert_eq!(DEFAULT_CHECK_INTERVAL_SECS, 30);
        assert_eq!(DEFAULT_MAX_CHECKS, 10);
    }
}
