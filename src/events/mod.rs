//! Event log normalization
//!
//! Turns raw event rows into shot records with typed categorical fields
//! and the boolean indicators the scoring models consume.

pub mod descriptor;
pub mod normalize;
pub mod record;

pub use descriptor::{BodyPart, EventDescriptor, ShotMechanism, Situation};
pub use normalize::{normalize_events, MalformedPolicy, NormalizedShot, ShotIndicators};
pub use record::EventRecord;
