//! Scoring models
//!
//! Pre-fit binary classifiers consumed as black boxes. The scorer only
//! ever asks for the probability of the "goal" class.

pub mod logistic;

use std::collections::HashMap;

pub use logistic::LogisticModel;

use crate::{ModelsConfig, Result, XgError};

/// Key of the open-play model in a model mapping
pub const OPEN_PLAY_KEY: &str = "op";
/// Key of the non-open-play model in a model mapping
pub const NON_OPEN_PLAY_KEY: &str = "non_op";

/// Trait for all shot scoring models
pub trait ShotModel: Send + Sync {
    /// Probability in [0, 1] that a shot with these features is a goal
    fn predict_probability(&self, features: &[f64]) -> Result<f64>;

    /// Feature names in the order the model was fit on, when known
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}

/// The two models the scorer routes shots to
pub struct ModelSet {
    op: Box<dyn ShotModel>,
    non_op: Box<dyn ShotModel>,
}

impl ModelSet {
    pub fn new(op: impl ShotModel + 'static, non_op: impl ShotModel + 'static) -> Self {
        ModelSet {
            op: Box::new(op),
            non_op: Box::new(non_op),
        }
    }

    /// Build from a mapping keyed by `"op"` and `"non_op"`
    pub fn from_map(mut models: HashMap<String, Box<dyn ShotModel>>) -> Result<Self> {
        let op = models
            .remove(OPEN_PLAY_KEY)
            .ok_or_else(|| XgError::MissingModel(OPEN_PLAY_KEY.to_string()))?;
        let non_op = models
            .remove(NON_OPEN_PLAY_KEY)
            .ok_or_else(|| XgError::MissingModel(NON_OPEN_PLAY_KEY.to_string()))?;

        for unused in models.keys() {
            log::warn!("Ignoring unknown scoring model `{}`", unused);
        }

        Ok(ModelSet { op, non_op })
    }

    /// Load both logistic models from the configured JSON files
    pub fn load(config: &ModelsConfig) -> Result<Self> {
        let op = LogisticModel::load(&config.op_path)?;
        log::info!("Loaded open-play model from {}", config.op_path);
        let non_op = LogisticModel::load(&config.non_op_path)?;
        log::info!("Loaded non-open-play model from {}", config.non_op_path);
        Ok(Self::new(op, non_op))
    }

    pub fn op(&self) -> &dyn ShotModel {
        self.op.as_ref()
    }

    pub fn non_op(&self) -> &dyn ShotModel {
        self.non_op.as_ref()
    }
}
