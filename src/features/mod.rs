//! Feature extraction
//!
//! Converts normalized shots into the fixed-order vectors the models consume.

pub mod geometry;
pub mod vector;

pub use geometry::{to_statsbomb, ShotGeometry, DEFAULT_GOAL_LINE_ANGLE};
pub use vector::{NonOpenPlayFeatures, OpenPlayFeatures};
