// SPDX-License-Identifier: MPL-2.0
//! Visualizations page dataset, grouped by sub-tab.

use super::{PlotCategory, PlotItem};

static DISTRIBUTION: [PlotItem; 2] = [
    PlotItem {
        title: "Age Distribution",
        description: "Overall distribution of crab ages in the dataset, showing the frequency of different age groups across the sampled population.",
        file_name: "age_distribution.png",
    },
    PlotItem {
        title: "Age by Sex",
        description: "Age distribution separated by crab sex, highlighting potential differences in age patterns between male and female crabs.",
        file_name: "age_by_sex.png",
    },
];

static CORRELATION: [PlotItem; 2] = [
    PlotItem {
        title: "Correlation Matrix",
        description: "Heatmap showing correlations between different measurements, with stronger colors indicating stronger relationships between variables.",
        file_name: "correlation_matrix.png",
    },
    PlotItem {
        title: "Feature Importance",
        description: "Relative importance of different features in predicting age, based on our machine learning model analysis.",
        file_name: "feature_importance.png",
    },
];

static PHYSICAL: [PlotItem; 4] = [
    PlotItem {
        title: "Length vs Age",
        description: "Relationship between crab length and age, showing how this physical attribute correlates with the age of the crab.",
        file_name: "scatter_Length_vs_age.png",
    },
    PlotItem {
        title: "Weight vs Age",
        description: "Relationship between crab weight and age, demonstrating how weight increases with age across the crab population.",
        file_name: "scatter_Weight_vs_age.png",
    },
    PlotItem {
        title: "Height vs Age",
        description: "Analysis of how crab height relates to age, with trend lines showing the general pattern across the dataset.",
        file_name: "scatter_Height_vs_age.png",
    },
    PlotItem {
        title: "Shell Weight vs Age",
        description: "Examination of the relationship between shell weight and crab age, an important predictor in our models.",
        file_name: "scatter_Shell.Weight_vs_age.png",
    },
];

pub static CATEGORIES: [PlotCategory; 3] = [
    PlotCategory {
        name: "Distribution Analysis",
        items: &DISTRIBUTION,
    },
    PlotCategory {
        name: "Correlation Analysis",
        items: &CORRELATION,
    },
    PlotCategory {
        name: "Physical Measurements",
        items: &PHYSICAL,
    },
];
