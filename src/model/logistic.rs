//! Logistic regression shot model
//!
//! Stored as JSON:
//!
//! ```json
//! {
//!   "intercept": -1.2,
//!   "coefficients": [-0.11, -0.02, 0.35, -0.61],
//!   "feature_names": ["distance_to_goal", "angle", "isFoot", "isHead"]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ShotModel;
use crate::{Result, XgError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl LogisticModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        LogisticModel {
            intercept,
            coefficients,
            feature_names: None,
        }
    }

    /// Record the column order the coefficients were fit on
    pub fn with_feature_names(mut self, names: &[&str]) -> Self {
        self.feature_names = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let model: LogisticModel = serde_json::from_str(&content)?;
        model.validate()?;
        Ok(model)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(XgError::Parse("logistic model has no coefficients".to_string()));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(XgError::Parse(
                "logistic model has non-finite parameters".to_string(),
            ));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.coefficients.len() {
                return Err(XgError::Parse(format!(
                    "logistic model names {} features but has {} coefficients",
                    names.len(),
                    self.coefficients.len()
                )));
            }
        }
        Ok(())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl ShotModel for LogisticModel {
    fn predict_probability(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(XgError::FeatureCount {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, f)| c * f)
                .sum::<f64>();
        Ok(sigmoid(z))
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_logit_is_half() {
        let model = LogisticModel::new(0.0, vec![0.0, 0.0]);
        let p = model.predict_probability(&[3.0, 4.0]).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_known_logit() {
        // z = 1 + 2*0.5 - 1*1 = 1
        let model = LogisticModel::new(1.0, vec![2.0, -1.0]);
        let p = model.predict_probability(&[0.5, 1.0]).unwrap();
        assert!((p - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_logits_stay_in_range() {
        let model = LogisticModel::new(0.0, vec![1.0]);
        let high = model.predict_probability(&[1000.0]).unwrap();
        let low = model.predict_probability(&[-1000.0]).unwrap();
        assert!((0.0..=1.0).contains(&high));
        assert!((0.0..=1.0).contains(&low));
    }

    #[test]
    fn test_wrong_feature_count() {
        let model = LogisticModel::new(0.0, vec![1.0, 1.0, 1.0, 1.0]);
        let err = model.predict_probability(&[1.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            XgError::FeatureCount {
                expected: 4,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("op.json");
        let model = LogisticModel::new(-1.2, vec![-0.11, -0.02, 0.35, -0.61]).with_feature_names(
            &["distance_to_goal", "angle", "isFoot", "isHead"],
        );
        model.save(&path).unwrap();

        let loaded = LogisticModel::load(&path).unwrap();
        assert_eq!(loaded, model);
        assert_eq!(loaded.feature_names().unwrap()[2], "isFoot");
    }

    #[test]
    fn test_names_without_matching_coefficients_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"intercept": 0.0, "coefficients": [1.0], "feature_names": ["a", "b"]}"#,
        )
        .unwrap();

        assert!(matches!(LogisticModel::load(&path), Err(XgError::Parse(_))));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(LogisticModel::load(&path), Err(XgError::Json(_))));
    }
}
