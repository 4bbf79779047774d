//! Shooting statistics
//!
//! Aggregates scored shots for leader tables and shot-map captions.

pub mod leaders;
pub mod summary;

use std::fmt;

use crate::predict::ScoredShot;

pub use leaders::{shot_leaders, PlayerShotSummary};
pub use summary::ShotMapSummary;

/// Label the dashboard used for "no player filter"
pub const ALL_PLAYERS: &str = "All Players";

/// Which players' shots to include
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerFilter {
    #[default]
    All,
    Named(String),
}

impl PlayerFilter {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(ALL_PLAYERS) => PlayerFilter::All,
            Some(name) => PlayerFilter::Named(name.to_string()),
        }
    }

    pub fn matches(&self, player: &str) -> bool {
        match self {
            PlayerFilter::All => true,
            PlayerFilter::Named(name) => name == player,
        }
    }
}

impl fmt::Display for PlayerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerFilter::All => f.pad(ALL_PLAYERS),
            PlayerFilter::Named(name) => f.pad(name),
        }
    }
}

/// Shots taken by players matching the filter, in order
pub fn filter_player<'a>(shots: &'a [ScoredShot], filter: &PlayerFilter) -> Vec<&'a ScoredShot> {
    shots.iter().filter(|s| filter.matches(s.player())).collect()
}

/// `numerator / denominator`, or 0 when there is nothing to divide by
fn per(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}
