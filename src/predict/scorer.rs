//! Shot scoring
//!
//! Each shot is first classified into exactly one [`ShotGroup`], then
//! scored by that group's rule: a fixed penalty value, the open-play model
//! or the non-open-play model.

use std::fmt;

use crate::events::{NormalizedShot, ShotIndicators};
use crate::features::{NonOpenPlayFeatures, OpenPlayFeatures, ShotGeometry};
use crate::model::{ModelSet, ShotModel, NON_OPEN_PLAY_KEY, OPEN_PLAY_KEY};
use crate::{Result, ScoringConfig, XgError};

/// Historical penalty conversion rate
pub const DEFAULT_PENALTY_XG: f64 = 0.79;

/// Scoring rule a shot is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotGroup {
    Penalty,
    OpenPlay,
    /// Free kicks, corners, set pieces, throw-ins and anything else that
    /// is neither open play nor a penalty
    NonOpenPlay,
}

impl ShotGroup {
    /// Classify a shot by its situation flags.
    ///
    /// At most one situation flag may be set; anything else means the
    /// indicators were built inconsistently and the shot can't be routed.
    pub fn classify(indicators: &ShotIndicators, row: usize) -> Result<Self> {
        let situations = [
            indicators.is_regular_play,
            indicators.is_direct_free,
            indicators.is_from_corner,
            indicators.is_set_piece,
            indicators.is_penalty,
            indicators.is_throw_in,
        ]
        .iter()
        .filter(|&&set| set)
        .count();

        if situations > 1 {
            return Err(XgError::Unclassified {
                row,
                reason: format!("{} situation flags set", situations),
            });
        }

        Ok(if indicators.is_penalty {
            ShotGroup::Penalty
        } else if indicators.is_regular_play {
            ShotGroup::OpenPlay
        } else {
            ShotGroup::NonOpenPlay
        })
    }
}

impl fmt::Display for ShotGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShotGroup::Penalty => "Penalty",
            ShotGroup::OpenPlay => "OpenPlay",
            ShotGroup::NonOpenPlay => "NonOpenPlay",
        };
        f.pad(name)
    }
}

/// A normalized shot with its geometry and xG
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredShot {
    pub shot: NormalizedShot,
    pub geometry: ShotGeometry,
    pub group: ShotGroup,
    pub xg: f64,
}

impl ScoredShot {
    pub fn row(&self) -> usize {
        self.shot.row()
    }

    pub fn player(&self) -> &str {
        self.shot.player()
    }

    pub fn indicators(&self) -> &ShotIndicators {
        &self.shot.indicators
    }

    pub fn is_goal(&self) -> bool {
        self.shot.indicators.is_goal
    }

    pub fn is_penalty(&self) -> bool {
        self.group == ShotGroup::Penalty
    }

    pub fn is_foot(&self) -> bool {
        self.shot.indicators.is_foot()
    }

    /// xG with penalties counted as zero
    pub fn non_penalty_xg(&self) -> f64 {
        if self.is_penalty() {
            0.0
        } else {
            self.xg
        }
    }
}

/// Scores shots against an injected pair of models
pub struct XgScorer {
    models: ModelSet,
    penalty_xg: f64,
    goal_line_angle: f64,
}

impl XgScorer {
    /// Create a scorer with default penalty value and goal-line convention
    pub fn new(models: ModelSet) -> Result<Self> {
        Self::with_config(models, &ScoringConfig::default())
    }

    /// Create a scorer, checking the scoring values and that models which
    /// publish their feature names were fit on the order this scorer supplies
    pub fn with_config(models: ModelSet, config: &ScoringConfig) -> Result<Self> {
        config.validate()?;
        check_feature_order(models.op(), OPEN_PLAY_KEY, &OpenPlayFeatures::NAMES)?;
        check_feature_order(
            models.non_op(),
            NON_OPEN_PLAY_KEY,
            &NonOpenPlayFeatures::NAMES,
        )?;

        Ok(XgScorer {
            models,
            penalty_xg: config.penalty_xg,
            goal_line_angle: config.goal_line_angle,
        })
    }

    /// Score a batch, preserving order. The first failing shot fails the batch.
    pub fn score(&self, shots: Vec<NormalizedShot>) -> Result<Vec<ScoredShot>> {
        let scored = shots
            .into_iter()
            .map(|shot| self.score_shot(shot))
            .collect::<Result<Vec<_>>>()?;

        let count = |group: ShotGroup| scored.iter().filter(|s| s.group == group).count();
        log::debug!(
            "Scored {} shots: {} open play, {} non-open play, {} penalties",
            scored.len(),
            count(ShotGroup::OpenPlay),
            count(ShotGroup::NonOpenPlay),
            count(ShotGroup::Penalty)
        );

        Ok(scored)
    }

    /// Score already-scored shots again from their normalized fields,
    /// ignoring the xG they carry
    pub fn rescore(&self, scored: &[ScoredShot]) -> Result<Vec<ScoredShot>> {
        self.score(scored.iter().map(|s| s.shot.clone()).collect())
    }

    /// Score a single shot
    pub fn score_shot(&self, shot: NormalizedShot) -> Result<ScoredShot> {
        let geometry = self.geometry(&shot)?;
        let group = ShotGroup::classify(&shot.indicators, shot.row())?;

        let xg = match group {
            ShotGroup::Penalty => self.penalty_xg,
            ShotGroup::OpenPlay => {
                let features = OpenPlayFeatures::new(&geometry, &shot.indicators);
                predict(self.models.op(), OPEN_PLAY_KEY, &features.to_vec())?
            }
            ShotGroup::NonOpenPlay => {
                let features = NonOpenPlayFeatures::new(&geometry, &shot.indicators);
                predict(self.models.non_op(), NON_OPEN_PLAY_KEY, &features.to_vec())?
            }
        };

        Ok(ScoredShot {
            shot,
            geometry,
            group,
            xg,
        })
    }

    fn geometry(&self, shot: &NormalizedShot) -> Result<ShotGeometry> {
        let row = shot.row();
        let x = coordinate(shot.record.x, row, "x")?;
        let y = coordinate(shot.record.y, row, "y")?;
        Ok(ShotGeometry::from_location(x, y, self.goal_line_angle))
    }
}

fn coordinate(value: Option<f64>, row: usize, column: &'static str) -> Result<f64> {
    let value = value.ok_or(XgError::MissingFeature { row, column })?;
    if !value.is_finite() {
        return Err(XgError::InvalidCoordinate { row, column, value });
    }
    Ok(value)
}

fn predict(model: &dyn ShotModel, name: &str, features: &[f64]) -> Result<f64> {
    let p = model.predict_probability(features)?;
    if !(0.0..=1.0).contains(&p) {
        return Err(XgError::Model {
            model: name.to_string(),
            value: p,
        });
    }
    Ok(p)
}

fn check_feature_order(model: &dyn ShotModel, name: &str, expected: &[&str]) -> Result<()> {
    let Some(found) = model.feature_names() else {
        return Ok(());
    };

    let matches = found.len() == expected.len()
        && found.iter().zip(expected).all(|(f, e)| f == e);
    if !matches {
        return Err(XgError::FeatureOrder {
            model: name.to_string(),
            expected: expected.iter().map(|e| e.to_string()).collect(),
            found: found.to_vec(),
        });
    }
    Ok(())
}
