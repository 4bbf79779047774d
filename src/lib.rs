//! Expected goals (xG) for soccer shot events
//!
//! Parses a compound event log into typed shot records, derives a fixed
//! feature vector per shot and routes each shot to one of three scoring
//! rules: a fixed penalty value, an open-play model or a non-open-play model.

pub mod data;
pub mod events;
pub mod features;
pub mod model;
pub mod predict;
pub mod stats;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use events::{EventRecord, MalformedPolicy, NormalizedShot};
pub use model::{LogisticModel, ModelSet, ShotModel};
pub use predict::{calc_xg, ScoredShot, ShotGroup, XgScorer};

/// Application-wide errors
#[derive(Debug, Error)]
pub enum XgError {
    #[error("Malformed event {event:?}: expected 4 tokens, found {tokens}")]
    MalformedEvent { event: String, tokens: usize },

    #[error("Shot at row {row} is missing feature column `{column}`")]
    MissingFeature { row: usize, column: &'static str },

    #[error("Shot at row {row} has invalid coordinate {column}={value}")]
    InvalidCoordinate {
        row: usize,
        column: &'static str,
        value: f64,
    },

    #[error("Shot at row {row} matches no scoring group: {reason}")]
    Unclassified { row: usize, reason: String },

    #[error("Missing scoring model: {0}")]
    MissingModel(String),

    #[error("Model expects {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Model `{model}` was fit on features {found:?}, scorer supplies {expected:?}")]
    FeatureOrder {
        model: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Model `{model}` returned invalid probability {value}")]
    Model { model: String, value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, XgError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fixed xG assigned to every penalty
    pub penalty_xg: f64,
    /// Angle in degrees used for shots taken exactly on the goal line
    pub goal_line_angle: f64,
    /// What to do with event descriptors that don't split into 4 tokens
    pub malformed: MalformedPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            penalty_xg: predict::DEFAULT_PENALTY_XG,
            goal_line_angle: features::DEFAULT_GOAL_LINE_ANGLE,
            malformed: MalformedPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Logistic model for open-play shots
    pub op_path: String,
    /// Logistic model for free kicks, corners, set pieces and throw-ins
    pub non_op_path: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        ModelsConfig {
            op_path: "models/expected_goals_op.json".to_string(),
            non_op_path: "models/expected_goals_non_op.json".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            XgError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| XgError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| XgError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }
}

impl ScoringConfig {
    /// Reject values the scorer can't honour
    pub fn validate(&self) -> Result<()> {
        let penalty = self.penalty_xg;
        if !(0.0..=1.0).contains(&penalty) {
            return Err(XgError::Config(format!(
                "penalty_xg must be within [0, 1], got {}",
                penalty
            )));
        }
        let angle = self.goal_line_angle;
        if !(0.0..=90.0).contains(&angle) {
            return Err(XgError::Config(format!(
                "goal_line_angle must be within [0, 90] degrees, got {}",
                angle
            )));
        }
        Ok(())
    }
}
