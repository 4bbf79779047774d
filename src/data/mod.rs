//! Event table loading and scored shot export
//!
//! CSV in, CSV or JSON out. The scoring core never touches files itself.

pub mod export;
pub mod table;

pub use export::{
    to_json, write_scored_csv, Coordinates, ShotRow, DERIVED_COLUMNS, STATSBOMB_COLUMNS,
};
pub use table::{load_events, load_events_csv, read_events};
