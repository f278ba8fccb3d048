// Dweve Archbench - Cross-Architecture Benchmark Comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Gradient-boosted decision trees with the `gbdt` crate.
//!
//! A synthetic binary classification problem is trained once per iteration
//! (`train`) or trained once up front and then scored (`predict`). Labels
//! are `+1`/`-1` as the log-likelihood loss expects. Sample and feature
//! subsampling are off so every run grows the same trees.

use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use rand::rngs::StdRng;
use rand::Rng;

/// Criterion group name.
pub const SUITE: &str = "gbdt";

/// Problem sizes, in the form they appear in benchmark names.
pub mod sizes {
    /// Rows in the training and test sets.
    pub const SAMPLES: usize = 10_000;
    /// Features per row.
    pub const FEATURES: usize = 32;
    /// Boosting rounds.
    pub const ROUNDS: usize = 50;
    /// Maximum tree depth.
    pub const MAX_DEPTH: u32 = 6;
}

/// Offset added to the logits so the decision boundary avoids the origin.
const LOGIT_BIAS: f32 = 0.1;

/// A dense feature matrix with `+1`/`-1` labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub features: Vec<Vec<f32>>,
    pub labels: Vec<f32>,
}

impl Classification {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Rows as weighted training samples.
    pub fn training_data(&self) -> DataVec {
        self.features
            .iter()
            .zip(&self.labels)
            .map(|(row, label)| Data::new_training_data(row.clone(), 1.0, *label, None))
            .collect()
    }

    /// Rows as unlabelled samples for prediction.
    pub fn test_data(&self) -> DataVec {
        self.features
            .iter()
            .map(|row| Data::new_test_data(row.clone(), None))
            .collect()
    }
}

/// `samples x features` values uniform in `[-1, 1)`, labelled by the sign
/// of a random linear function plus [`LOGIT_BIAS`].
pub fn make_classification(rng: &mut StdRng, samples: usize, features: usize) -> Classification {
    let weights: Vec<f32> = (0..features).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let rows: Vec<Vec<f32>> = (0..samples)
        .map(|_| (0..features).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect();
    let labels = rows
        .iter()
        .map(|row| {
            let logit: f32 = row.iter().zip(&weights).map(|(x, w)| x * w).sum();
            if logit + LOGIT_BIAS > 0.0 {
                1.0
            } else {
                -1.0
            }
        })
        .collect();
    Classification {
        features: rows,
        labels,
    }
}

/// Booster settings for `features` inputs and `rounds` trees.
pub fn training_config(features: usize, rounds: usize) -> Config {
    let mut cfg = Config::new();
    cfg.set_feature_size(features);
    cfg.set_max_depth(sizes::MAX_DEPTH);
    cfg.set_iterations(rounds);
    cfg.set_shrinkage(0.1);
    cfg.set_loss("LogLikelyhood");
    cfg.set_debug(false);
    cfg.set_data_sample_ratio(1.0);
    cfg.set_feature_sample_ratio(1.0);
    cfg.set_training_optimization_level(2);
    cfg
}

/// Fits a fresh model on `data`.
pub fn train(cfg: &Config, data: &mut DataVec) -> GBDT {
    let mut model = GBDT::new(cfg);
    model.fit(data);
    model
}

/// Scores `data`; returns the first prediction.
pub fn predict(model: &GBDT, data: &DataVec) -> f32 {
    model.predict(data).first().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::input_rng;

    #[test]
    fn test_classification_is_seeded_and_labelled() {
        let first = make_classification(&mut input_rng(crate::INPUT_SEED), 64, 4);
        let second = make_classification(&mut input_rng(crate::INPUT_SEED), 64, 4);
        assert_eq!(first, second);

        assert_eq!(first.len(), 64);
        assert!(first.features.iter().all(|row| row.len() == 4));
        assert!(first.labels.iter().all(|l| *l == 1.0 || *l == -1.0));
        assert!(first.labels.contains(&1.0));
        assert!(first.labels.contains(&-1.0));
    }

    #[test]
    fn test_model_separates_classes() {
        let data = make_classification(&mut input_rng(crate::INPUT_SEED), 400, 4);
        let cfg = training_config(4, 10);
        let model = train(&cfg, &mut data.training_data());

        let predictions = model.predict(&data.test_data());
        assert_eq!(predictions.len(), data.len());
        assert!(predictions.iter().all(|p| p.is_finite()));

        let mean_for = |label: f32| {
            let picked: Vec<f32> = predictions
                .iter()
                .zip(&data.labels)
                .filter(|(_, l)| **l == label)
                .map(|(p, _)| *p)
                .collect();
            picked.iter().sum::<f32>() / picked.len() as f32
        };
        assert!(mean_for(1.0) > mean_for(-1.0));
    }

    #[test]
    fn test_predict_returns_first_score() {
        let data = make_classification(&mut input_rng(crate::INPUT_SEED), 100, 3);
        let cfg = training_config(3, 5);
        let model = train(&cfg, &mut data.training_data());
        let test = data.test_data();

        assert_eq!(predict(&model, &test), model.predict(&test)[0]);
    }
}
