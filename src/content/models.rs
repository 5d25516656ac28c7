// SPDX-License-Identifier: MPL-2.0
//! Model comparison dataset. The first entry is the best performer.

use super::ModelMetrics;

pub static MODELS: [ModelMetrics; 3] = [
    ModelMetrics {
        model_name: "XGBoost",
        rmse: 1.42,
        mae: 1.15,
        r2: 0.85,
        description: "XGBoost demonstrated superior performance in predicting crab age, particularly excelling in capturing non-linear relationships between physical measurements.",
        performance_plot: "prediction_vs_actual.png",
    },
    ModelMetrics {
        model_name: "Random Forest",
        rmse: 1.48,
        mae: 1.18,
        r2: 0.83,
        description: "Random Forest provided robust predictions with good generalization, showing strength in handling the varied nature of crab measurements.",
        performance_plot: "prediction_distribution.png",
    },
    ModelMetrics {
        model_name: "SVM",
        rmse: 1.55,
        mae: 1.25,
        r2: 0.81,
        description: "Support Vector Machine showed decent performance with good handling of outliers in the dataset.",
        performance_plot: "residual_plot.png",
    },
];

/// Index of the model flagged "(Best)" in the comparison table.
pub const BEST_MODEL: usize = 0;
