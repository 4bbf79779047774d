//! Per-player shot leader table

use std::collections::BTreeMap;

use serde::Serialize;

use super::per;
use crate::predict::ScoredShot;

/// Shooting totals for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerShotSummary {
    pub player: String,
    pub shots: usize,
    pub non_penalty_shots: usize,
    pub open_play_shots: usize,
    pub goals: usize,
    /// Goals per shot
    pub goals_per_shot: f64,
    pub xg: f64,
    /// xG per shot
    pub xg_per_shot: f64,
    pub non_penalty_xg: f64,
    /// Non-penalty xG per non-penalty shot
    pub non_penalty_xg_per_shot: f64,
    /// Finishing: goals minus xG
    pub goals_minus_xg: f64,
}

#[derive(Default)]
struct Tally {
    shots: usize,
    penalties: usize,
    open_play: usize,
    goals: usize,
    xg: f64,
    non_penalty_xg: f64,
}

impl Tally {
    fn add(&mut self, shot: &ScoredShot) {
        let indicators = shot.indicators();
        self.shots += 1;
        self.penalties += indicators.is_penalty as usize;
        self.open_play += indicators.is_regular_play as usize;
        self.goals += indicators.is_goal as usize;
        self.xg += shot.xg;
        self.non_penalty_xg += shot.non_penalty_xg();
    }

    fn finish(self, player: &str) -> PlayerShotSummary {
        let non_penalty_shots = self.shots - self.penalties;
        PlayerShotSummary {
            player: player.to_string(),
            shots: self.shots,
            non_penalty_shots,
            open_play_shots: self.open_play,
            goals: self.goals,
            goals_per_shot: per(self.goals as f64, self.shots),
            xg: self.xg,
            xg_per_shot: per(self.xg, self.shots),
            non_penalty_xg: self.non_penalty_xg,
            non_penalty_xg_per_shot: per(self.non_penalty_xg, non_penalty_shots),
            goals_minus_xg: self.goals as f64 - self.xg,
        }
    }
}

/// Group shots by player, ordered by player name
pub fn shot_leaders(shots: &[ScoredShot]) -> Vec<PlayerShotSummary> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for shot in shots {
        tallies.entry(shot.player()).or_default().add(shot);
    }

    tallies
        .into_iter()
        .map(|(player, tally)| tally.finish(player))
        .collect()
}
