// SPDX-License-Identifier: MPL-2.0
//! Home page feature cards.

use crate::app::screen::Screen;
use crate::ui::icons::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Glyph,
    pub target: Screen,
}

pub static FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "Data Analysis",
        description: "Comprehensive analysis of crab physical characteristics and their correlation with age",
        icon: Glyph::Insights,
        target: Screen::Analysis,
    },
    FeatureCard {
        title: "Visualizations",
        description: "Interactive charts and plots showing key relationships in the data",
        icon: Glyph::BarChart,
        target: Screen::Visualizations,
    },
    FeatureCard {
        title: "Models",
        description: "Machine learning models for accurate age prediction",
        icon: Glyph::Timeline,
        target: Screen::Models,
    },
    FeatureCard {
        title: "Results",
        description: "Model performance metrics and key findings",
        icon: Glyph::Assessment,
        target: Screen::Models,
    },
];

/// Paragraph under the "Data-Driven Insights" highlight.
pub const HIGHLIGHT_BODY: &str = "Our analysis reveals key relationships between physical attributes and crab age, with weight and shell dimensions being the strongest predictors. We applied various machine learning algorithms to find the most accurate model for age prediction.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_card_shares_the_models_route() {
        assert_eq!(FEATURES[3].target, FEATURES[2].target);
        assert_eq!(FEATURES[3].target.path(), "/models");
    }
}
