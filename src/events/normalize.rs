//! Shot normalization
//!
//! Parses every event, keeps the shots and derives their indicator flags.

use serde::{Deserialize, Serialize};

use super::descriptor::{BodyPart, EventDescriptor, ShotMechanism, Situation};
use super::record::EventRecord;
use crate::{Result, XgError};

/// Substring in the raw event that marks an own goal
const OWN_GOAL_MARKER: &str = "Own Goal";

/// What to do when an event descriptor doesn't split into 4 tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole batch
    #[default]
    Abort,
    /// Drop the row and log a warning
    Skip,
}

/// Boolean indicators derived from a shot's descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotIndicators {
    pub is_left_footed: bool,
    pub is_right_footed: bool,
    pub is_head: bool,
    pub is_other_body_type: bool,
    pub is_regular_play: bool,
    pub is_throw_in: bool,
    pub is_direct_free: bool,
    pub is_from_corner: bool,
    pub is_set_piece: bool,
    pub is_own_goal: bool,
    pub is_penalty: bool,
    pub is_goal: bool,
}

impl ShotIndicators {
    /// Derive all flags from a parsed descriptor and its raw event string
    pub fn derive(raw_event: &str, descriptor: &EventDescriptor) -> Self {
        let right_foot = descriptor.mechanism == ShotMechanism::Right;
        let left_foot = descriptor.mechanism == ShotMechanism::Left;
        let body_part = descriptor.mechanism.body_part();
        let situation = &descriptor.situation;

        ShotIndicators {
            is_left_footed: !right_foot && left_foot,
            is_right_footed: right_foot && !left_foot,
            is_head: body_part == BodyPart::Head,
            is_other_body_type: body_part == BodyPart::OtherBodyPart,
            is_regular_play: *situation == Situation::OpenPlay,
            is_throw_in: *situation == Situation::ThrowIn,
            is_direct_free: *situation == Situation::DirectFreekick,
            is_from_corner: *situation == Situation::FromCorner,
            is_set_piece: *situation == Situation::SetPiece,
            is_own_goal: raw_event.contains(OWN_GOAL_MARKER),
            is_penalty: *situation == Situation::Penalty,
            is_goal: descriptor.is_goal(),
        }
    }

    /// Struck with either foot and not the head
    pub fn is_foot(&self) -> bool {
        (self.is_left_footed || self.is_right_footed) && !self.is_head
    }

    /// Goal as the 0/1 integer the output table carries
    pub fn goal_flag(&self) -> u8 {
        self.is_goal as u8
    }
}

/// A shot event with typed fields and indicators
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedShot {
    pub record: EventRecord,
    pub descriptor: EventDescriptor,
    pub body_part: BodyPart,
    pub indicators: ShotIndicators,
}

impl NormalizedShot {
    /// Parse a record; `Ok(None)` for well-formed events that aren't shots
    pub fn from_record(record: &EventRecord) -> Result<Option<Self>> {
        let descriptor = EventDescriptor::parse(&record.event)?;
        if !descriptor.is_shot() {
            return Ok(None);
        }

        let indicators = ShotIndicators::derive(&record.event, &descriptor);
        Ok(Some(NormalizedShot {
            record: record.clone(),
            body_part: descriptor.mechanism.body_part(),
            descriptor,
            indicators,
        }))
    }

    pub fn row(&self) -> usize {
        self.record.row
    }

    pub fn player(&self) -> &str {
        &self.record.player
    }
}

/// Normalize an event table into shot records, preserving input order.
///
/// Every event is parsed, shots or not. With `MalformedPolicy::Abort` the
/// first malformed descriptor fails the batch and nothing is returned.
pub fn normalize_events(
    records: &[EventRecord],
    policy: MalformedPolicy,
) -> Result<Vec<NormalizedShot>> {
    let mut shots = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        match NormalizedShot::from_record(record) {
            Ok(Some(shot)) => shots.push(shot),
            Ok(None) => {}
            Err(e @ XgError::MalformedEvent { .. }) if policy == MalformedPolicy::Skip => {
                log::warn!("Skipping row {}: {}", record.row, e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!(
        "Normalized {} events into {} shots ({} skipped)",
        records.len(),
        shots.len(),
        skipped
    );

    Ok(shots)
}
