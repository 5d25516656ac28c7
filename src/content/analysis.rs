// SPDX-License-Identifier: MPL-2.0
//! Analysis page dataset.

use super::{KeyFinding, PlotItem};

pub static ANALYSIS_ITEMS: [PlotItem; 4] = [
    PlotItem {
        title: "Age Distribution",
        description: "Distribution of crab ages in the dataset shows clustering around certain age groups. This helps us understand the natural age patterns in the crab population.",
        file_name: "age_distribution.png",
    },
    PlotItem {
        title: "Age by Sex",
        description: "Analysis of age patterns across different crab sexes reveals interesting variations. Female and male crabs show distinct growth and aging characteristics.",
        file_name: "age_by_sex.png",
    },
    PlotItem {
        title: "Correlation Matrix",
        description: "Visualization of relationships between different physical measurements. Strong correlations indicate which features will be most predictive for our models.",
        file_name: "correlation_matrix.png",
    },
    PlotItem {
        title: "Feature Importance",
        description: "Key physical characteristics that best predict crab age. Weight and shell dimensions emerged as the most important predictors in our analysis.",
        file_name: "feature_importance.png",
    },
];

pub static KEY_FINDINGS: [KeyFinding; 2] = [
    KeyFinding {
        title: "Physical Measurements",
        body: "Strong correlations were found between crab age and physical measurements, particularly with shell weight and diameter. These relationships form the foundation of our prediction models. Weight-related measurements showed the highest correlation coefficients, indicating they are reliable predictors of age.",
    },
    KeyFinding {
        title: "Sex-Based Variations",
        body: "Notable differences in age-related characteristics were observed between male and female crabs, suggesting sex-specific growth patterns. Female crabs showed different weight-to-age relationships compared to males, which was incorporated into our prediction models to improve accuracy.",
    },
];
