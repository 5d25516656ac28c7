// SPDX-License-Identifier: MPL-2.0
//! Settings shared by the presentation and the two utilities, stored in a
//! `settings.toml` file. Every key is optional.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode, start route
//! - `[presentation]` - Styled/plain rendition, assets directory, drawer breakpoint
//! - `[assets]` - Source and destination used by `copy-assets`
//! - `[deploy]` - Target and schedule used by `verify-deploy`
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `CRAB_PRESENTATION_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The file is only ever read; nothing in the presentation writes it back.
//!
//! # Examples
//!
//! ```no_run
//! use crab_presentation::app::config;
//!
//! let (config, _warning) = config::load();
//! println!("checking {} every {:?}", config.deploy.url(), config.deploy.interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Which of the two page renditions to show.
///
/// `Styled` is the themed presentation with cards and the lightbox; `Plain`
/// is the bare rendition that reads plots from the `copy-assets` destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationStyle {
    #[default]
    Styled,
    Plain,
}

impl PresentationStyle {
    /// Plot directory relative to the assets root.
    #[must_use]
    pub fn plot_dir(self) -> &'static str {
        match self {
            PresentationStyle::Styled => "assets/plots",
            PresentationStyle::Plain => "output/plots",
        }
    }

    #[must_use]
    pub fn is_styled(self) -> bool {
        matches!(self, PresentationStyle::Styled)
    }
}

impl FromStr for PresentationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "styled" => Ok(PresentationStyle::Styled),
            "plain" => Ok(PresentationStyle::Plain),
            other => Err(Error::InvalidArgument(format!(
                "unknown presentation style: {other} (expected styled or plain)"
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Route opened at startup (e.g. "/models").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_route: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            start_route: None,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<PresentationStyle>,

    /// Root directory containing `assets/` and `output/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,

    /// Window width under which navigation switches to the drawer.
    #[serde(
        default = "default_drawer_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub drawer_breakpoint: Option<f32>,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            style: Some(PresentationStyle::default()),
            assets_dir: None,
            drawer_breakpoint: default_drawer_breakpoint(),
        }
    }
}

impl PresentationConfig {
    /// Breakpoint clamped to the supported range.
    #[must_use]
    pub fn drawer_breakpoint(&self) -> f32 {
        self.drawer_breakpoint
            .unwrap_or(DEFAULT_DRAWER_BREAKPOINT)
            .clamp(MIN_DRAWER_BREAKPOINT, MAX_DRAWER_BREAKPOINT)
    }

    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        PathBuf::from(self.assets_dir.as_deref().unwrap_or(DEFAULT_ASSETS_DIR))
    }
}

/// Plot copy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AssetsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<String>,
}

impl AssetsConfig {
    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        PathBuf::from(
            self.source_dir
                .as_deref()
                .unwrap_or(DEFAULT_PLOT_SOURCE_DIR),
        )
    }

    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        PathBuf::from(
            self.target_dir
                .as_deref()
                .unwrap_or(DEFAULT_PLOT_TARGET_DIR),
        )
    }
}

/// Deployment check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeployConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_checks: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl DeployConfig {
    #[must_use]
    pub fn url(&self) -> String {
        self.url.clone().unwrap_or_else(default_deploy_url)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.unwrap_or(DEFAULT_CHECK_INTERVAL_SECS))
    }

    #[must_use]
    /// Configured check count, unclamped. Out-of-range values are rejected by
    /// `deploy_check::validate` exactly like the `--max-checks` flag.
    pub fn max_checks(&self) -> u32 {
        self.max_checks.unwrap_or(DEFAULT_MAX_CHECKS)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub presentation: PresentationConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_drawer_breakpoint() -> Option<f32> {
    Some(DEFAULT_DRAWER_BREAKPOINT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(config: &Config, path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create config dir");
        }
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn serialized_config_loads_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
                start_route: Some("/models".to_string()),
            },
            presentation: PresentationConfig {
                style: Some(PresentationStyle::Plain),
                assets_dir: Some("/srv/crab".to_string()),
                drawer_breakpoint: Some(720.0),
            },
            assets: AssetsConfig {
                source_dir: Some("plots-in".to_string()),
                target_dir: Some("plots-out".to_string()),
            },
            deploy: DeployConfig {
                url: Some("https://example.org/site/".to_string()),
                interval_secs: Some(5),
                max_checks: Some(3),
                timeout_secs: Some(2),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        write_config(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.general.start_route, None);
        assert_eq!(config.presentation.style, Some(PresentationStyle::Styled));
        assert_eq!(
            config.presentation.drawer_breakpoint(),
            DEFAULT_DRAWER_BREAKPOINT
        );
        assert_eq!(config.assets.source_dir(), PathBuf::from("../output/plots"));
        assert_eq!(
            config.assets.target_dir(),
            PathBuf::from("./public/output/plots")
        );
        assert_eq!(config.deploy.interval(), Duration::from_secs(30));
        assert_eq!(config.deploy.max_checks(), 10);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[deploy]\nmax_checks = 4\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.deploy.max_checks(), 4);
        assert_eq!(loaded.deploy.url(), default_deploy_url());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.presentation.style, Some(PresentationStyle::Styled));
    }

    #[test]
    fn drawer_breakpoint_is_clamped() {
        let presentation = PresentationConfig {
            drawer_breakpoint: Some(10.0),
            ..PresentationConfig::default()
        };
        assert_eq!(presentation.drawer_breakpoint(), MIN_DRAWER_BREAKPOINT);
    }

    #[test]
    fn max_checks_is_passed_through_for_validation() {
        let zero = DeployConfig {
            max_checks: Some(0),
            ..DeployConfig::default()
        };
        let huge = DeployConfig {
            max_checks: Some(MAX_MAX_CHECKS + 1),
            ..DeployConfig::default()
        };
        assert_eq!(zero.max_checks(), 0);
        assert_eq!(huge.max_checks(), MAX_MAX_CHECKS + 1);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn presentation_style_parses_case_insensitively() {
        assert_eq!(
            "Plain".parse::<PresentationStyle>().unwrap(),
            PresentationStyle::Plain
        );
        assert_eq!(
            "styled".parse::<PresentationStyle>().unwrap(),
            PresentationStyle::Styled
        );
        assert!("fancy".parse::<PresentationStyle>().is_err());
    }

    #[test]
    fn plot_dir_differs_per_style() {
        assert_eq!(PresentationStyle::Styled.plot_dir(), "assets/plots");
        assert_eq!(PresentationStyle::Plain.plot_dir(), "output/plots");
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };

        write_config(&config, &base_dir.join("settings.toml"));

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
