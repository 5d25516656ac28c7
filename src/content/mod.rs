// SPDX-License-Identifier: MPL-2.0
//! Page-local datasets and the resolver that turns plot file names into paths.
//!
//! Every dataset is `'static` read-only data. Image locations are stored as
//! bare file names and resolved at render time against the configured assets
//! root, because the styled and plain renditions read plots from different
//! directories.

pub mod analysis;
pub mod home;
pub mod models;
pub mod visualizations;

use crate::app::config::PresentationStyle;
use std::path::{Path, PathBuf};

pub use analysis::{ANALYSIS_ITEMS, KEY_FINDINGS};
pub use home::FEATURES;
pub use models::MODELS;
pub use visualizations::CATEGORIES;

/// A captioned plot shown on the Analysis and Visualizations pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotItem {
    pub title: &'static str,
    pub description: &'static str,
    pub file_name: &'static str,
}

/// A named group of plots, one sub-tab on the Visualizations page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotCategory {
    pub name: &'static str,
    pub items: &'static [PlotItem],
}

/// Headline numbers for one trained model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetrics {
    pub model_name: &'static str,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
    pub description: &'static str,
    pub performance_plot: &'static str,
}

/// Metrics are always shown with two decimals.
#[must_use]
pub fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

/// A short statement on the Analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFinding {
    pub title: &'static str,
    pub body: &'static str,
}

/// Resolves on-disk locations of static assets for one rendition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
    style: PresentationStyle,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>, style: PresentationStyle) -> Self {
        Self {
            root: root.into(),
            style,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn style(&self) -> PresentationStyle {
        self.style
    }

    /// Path of a plot image for the active rendition.
    #[must_use]
    pub fn plot(&self, file_name: &str) -> PathBuf {
        self.root.join(self.style.plot_dir()).join(file_name)
    }

    #[must_use]
    pub fn logo(&self) -> PathBuf {
        self.root.join("assets").join("smu-logo.png")
    }

    #[must_use]
    pub fn hero(&self) -> PathBuf {
        self.root.join("assets").join("hero-crab.jpg")
    }

    #[must_use]
    pub fn visualization_preview(&self) -> PathBuf {
        self.root.join("assets").join("visualization-preview.jpg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_plots_live_under_assets() {
        let paths = AssetPaths::new("/srv/public", PresentationStyle::Styled);
        assert_eq!(
            paths.plot("age_distribution.png"),
            Path::new("/srv/public/assets/plots/age_distribution.png")
        );
    }

    #[test]
    fn plain_plots_live_under_output() {
        let paths = AssetPaths::new("/srv/public", PresentationStyle::Plain);
        assert_eq!(
            paths.plot("residual_plot.png"),
            Path::new("/srv/public/output/plots/residual_plot.png")
        );
    }

    #[test]
    fn logo_is_shared_between_styles() {
        let styled = AssetPaths::new("public", PresentationStyle::Styled);
        let plain = AssetPaths::new("public", PresentationStyle::Plain);
        assert_eq!(styled.logo(), plain.logo());
    }

    #[test]
    fn metrics_format_with_two_decimals() {
        assert_eq!(format_metric(0.85), "0.85");
        assert_eq!(format_metric(1.5), "1.50");
        assert_eq!(format_metric(1.0), "1.00");
    }

    #[test]
    fn every_plot_file_is_a_png() {
        let analysis = ANALYSIS_ITEMS.iter().map(|item| item.file_name);
        let visual = CATEGORIES
            .iter()
            .flat_map(|category| category.items.iter().map(|item| item.file_name));
        let models = MODELS.iter().map(|model| model.performance_plot);

        for name in analysis.chain(visual).chain(models) {
            assert!(name.ends_with(".png"), "{name}");
            assert!(!name.contains('/'), "{name}");
        }
    }
}
