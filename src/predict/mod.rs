//! Expected goals scoring
//!
//! Route normalized shots to a scoring rule and attach xG.

pub mod pipeline;
pub mod scorer;

pub use pipeline::calc_xg;
pub use scorer::{ScoredShot, ShotGroup, XgScorer, DEFAULT_PENALTY_XG};
