//! Event CSV loading
//!
//! Header-driven: `Event` and `Player` are required, `X`/`Y` are read when
//! present and every other column is carried through in order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::export::{DERIVED_COLUMNS, STATSBOMB_COLUMNS};
use crate::events::EventRecord;
use crate::{Result, XgError};

const EVENT_COLUMN: &str = "Event";
const PLAYER_COLUMN: &str = "Player";
/// Raw tables use upper case; exported tables use lower case. Both are on
/// the 0-100 event scale.
const X_COLUMNS: [&str; 2] = ["X", "x"];
const Y_COLUMNS: [&str; 2] = ["Y", "y"];

/// Read an event table. Rows are numbered from `first_row`.
pub fn read_events<R: Read>(reader: R, first_row: usize) -> Result<Vec<EventRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let find = |names: &[&str]| headers.iter().position(|h| names.contains(&h));
    let required = |name: &str| {
        find(&[name]).ok_or_else(|| XgError::Parse(format!("missing `{}` column", name)))
    };
    let event_idx = required(EVENT_COLUMN)?;
    let player_idx = required(PLAYER_COLUMN)?;
    let x_idx = find(&X_COLUMNS);
    let y_idx = find(&Y_COLUMNS);

    // Pass-through columns; derived columns from an earlier export are recomputed
    let known = [Some(event_idx), Some(player_idx), x_idx, y_idx];
    let extra_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| {
            !known.contains(&Some(*idx))
                && !DERIVED_COLUMNS.contains(name)
                && !STATSBOMB_COLUMNS.contains(name)
        })
        .collect();

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = first_row + i;
        let field = |idx: usize| record.get(idx).unwrap_or("");

        records.push(EventRecord {
            row,
            event: field(event_idx).to_string(),
            x: parse_coordinate(x_idx.map(field), row, "X")?,
            y: parse_coordinate(y_idx.map(field), row, "Y")?,
            player: field(player_idx).to_string(),
            extra: extra_columns
                .iter()
                .map(|(idx, name)| (name.to_string(), field(*idx).to_string()))
                .collect(),
        });
    }

    Ok(records)
}

fn parse_coordinate(cell: Option<&str>, row: usize, column: &str) -> Result<Option<f64>> {
    match cell {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<f64>().map(Some).map_err(|e| {
            XgError::Parse(format!(
                "row {}: invalid {} value {:?}: {}",
                row, column, value, e
            ))
        }),
    }
}

/// Load one event CSV file
pub fn load_events_csv(path: impl AsRef<Path>, first_row: usize) -> Result<Vec<EventRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        XgError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    read_events(file, first_row)
}

/// Load and concatenate several event files, numbering rows continuously
pub fn load_events<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<EventRecord>> {
    let mut records = Vec::new();
    for path in paths {
        let loaded = load_events_csv(path, records.len())?;
        log::debug!(
            "Loaded {} events from {}",
            loaded.len(),
            path.as_ref().display()
        );
        records.extend(loaded);
    }
    Ok(records)
}
