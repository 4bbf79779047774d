//! Shot map caption statistics

use serde::Serialize;

use super::per;
use crate::predict::{ScoredShot, ShotGroup};

/// Totals shown alongside a shot map
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShotMapSummary {
    pub shots: usize,
    pub goals: usize,
    pub xg: f64,
    pub xg_open_play: f64,
    /// Non-open-play xG excluding penalties
    pub xg_set_piece: f64,
    pub xg_penalty: f64,
    pub non_penalty_xg: f64,
    pub non_penalty_shots: usize,
    pub xg_per_shot: f64,
    pub non_penalty_xg_per_shot: f64,
    pub penalties_taken: usize,
    pub penalties_scored: usize,
    pub right_foot: usize,
    pub left_foot: usize,
    pub head: usize,
}

impl ShotMapSummary {
    pub fn from_shots<'a>(shots: impl IntoIterator<Item = &'a ScoredShot>) -> Self {
        let mut summary = ShotMapSummary::default();

        for shot in shots {
            let indicators = shot.indicators();
            summary.shots += 1;
            summary.goals += indicators.is_goal as usize;
            summary.xg += shot.xg;
            summary.right_foot += indicators.is_right_footed as usize;
            summary.left_foot += indicators.is_left_footed as usize;
            summary.head += indicators.is_head as usize;

            match shot.group {
                ShotGroup::OpenPlay => summary.xg_open_play += shot.xg,
                ShotGroup::NonOpenPlay => summary.xg_set_piece += shot.xg,
                ShotGroup::Penalty => {
                    summary.xg_penalty += shot.xg;
                    summary.penalties_taken += 1;
                    summary.penalties_scored += indicators.is_goal as usize;
                }
            }
        }

        summary.non_penalty_xg = summary.xg - summary.xg_penalty;
        summary.non_penalty_shots = summary.shots - summary.penalties_taken;
        summary.xg_per_shot = per(summary.xg, summary.shots);
        summary.non_penalty_xg_per_shot = per(summary.non_penalty_xg, summary.non_penalty_shots);
        summary
    }
}
