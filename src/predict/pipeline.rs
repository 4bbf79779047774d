//! Raw events to scored shots in one pass

use super::scorer::{ScoredShot, XgScorer};
use crate::events::{normalize_events, EventRecord, MalformedPolicy};
use crate::Result;

/// Normalize an event table and score its shots.
///
/// Output holds only the shots, in input order.
pub fn calc_xg(
    records: &[EventRecord],
    scorer: &XgScorer,
    policy: MalformedPolicy,
) -> Result<Vec<ScoredShot>> {
    let shots = normalize_events(records, policy)?;
    scorer.score(shots)
}
