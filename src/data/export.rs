//! Scored shot export
//!
//! The output table holds the input shot columns followed by the typed
//! fields, indicators (as 0/1), geometry and xG. `x`/`y` always stay on
//! the event scale so an export can be scored again; StatsBomb coordinates
//! go in their own `sb_x`/`sb_y` columns.

use std::io::Write;

use serde::Serialize;

use crate::features::to_statsbomb;
use crate::predict::ScoredShot;
use crate::Result;

/// Columns appended to every exported shot, in order
pub const DERIVED_COLUMNS: [&str; 22] = [
    "type",
    "shotMechanism",
    "situation",
    "outcome",
    "isLeftFooted",
    "isRightFooted",
    "isHead",
    "isOtherBodyType",
    "isRegularPlay",
    "isThrowIn",
    "isDirectFree",
    "isFromCorner",
    "isSetPiece",
    "isOwnGoal",
    "isPenalty",
    "isGoal",
    "distance_to_goal",
    "distance_to_center",
    "angle",
    "isFoot",
    "xG",
    "scoringGroup",
];

/// StatsBomb coordinate columns, written after [`DERIVED_COLUMNS`]
pub const STATSBOMB_COLUMNS: [&str; 2] = ["sb_x", "sb_y"];

/// Which coordinate columns an export carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coordinates {
    /// `x`/`y` on the 0-100 event scale only
    #[default]
    Event,
    /// Event-scale `x`/`y` plus `sb_x`/`sb_y` on a 120 x 80 StatsBomb pitch
    StatsBomb,
}

/// One exported shot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Event")]
    pub event: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    #[serde(skip)]
    pub extra: Vec<(String, String)>,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "shotMechanism")]
    pub shot_mechanism: String,
    pub situation: String,
    pub outcome: String,
    #[serde(rename = "isLeftFooted")]
    pub is_left_footed: u8,
    #[serde(rename = "isRightFooted")]
    pub is_right_footed: u8,
    #[serde(rename = "isHead")]
    pub is_head: u8,
    #[serde(rename = "isOtherBodyType")]
    pub is_other_body_type: u8,
    #[serde(rename = "isRegularPlay")]
    pub is_regular_play: u8,
    #[serde(rename = "isThrowIn")]
    pub is_throw_in: u8,
    #[serde(rename = "isDirectFree")]
    pub is_direct_free: u8,
    #[serde(rename = "isFromCorner")]
    pub is_from_corner: u8,
    #[serde(rename = "isSetPiece")]
    pub is_set_piece: u8,
    #[serde(rename = "isOwnGoal")]
    pub is_own_goal: u8,
    #[serde(rename = "isPenalty")]
    pub is_penalty: u8,
    #[serde(rename = "isGoal")]
    pub is_goal: u8,
    pub distance_to_goal: f64,
    pub distance_to_center: f64,
    pub angle: f64,
    #[serde(rename = "isFoot")]
    pub is_foot: u8,
    #[serde(rename = "xG")]
    pub xg: f64,
    #[serde(rename = "scoringGroup")]
    pub scoring_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sb_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sb_y: Option<f64>,
}

impl ShotRow {
    pub fn from_scored(scored: &ScoredShot, coordinates: Coordinates) -> Self {
        let shot = &scored.shot;
        let record = &shot.record;
        let i = &shot.indicators;
        let flag = |b: bool| b as u8;

        let (sb_x, sb_y) = match (coordinates, record.x, record.y) {
            (Coordinates::StatsBomb, Some(x), Some(y)) => {
                let (x, y) = to_statsbomb(x, y);
                (Some(x), Some(y))
            }
            _ => (None, None),
        };

        ShotRow {
            player: record.player.clone(),
            event: record.event.clone(),
            x: record.x,
            y: record.y,
            extra: record.extra.clone(),
            event_type: shot.descriptor.event_type.clone(),
            shot_mechanism: shot.descriptor.mechanism.to_string(),
            situation: shot.descriptor.situation.to_string(),
            outcome: shot.descriptor.outcome.clone(),
            is_left_footed: flag(i.is_left_footed),
            is_right_footed: flag(i.is_right_footed),
            is_head: flag(i.is_head),
            is_other_body_type: flag(i.is_other_body_type),
            is_regular_play: flag(i.is_regular_play),
            is_throw_in: flag(i.is_throw_in),
            is_direct_free: flag(i.is_direct_free),
            is_from_corner: flag(i.is_from_corner),
            is_set_piece: flag(i.is_set_piece),
            is_own_goal: flag(i.is_own_goal),
            is_penalty: flag(i.is_penalty),
            is_goal: i.goal_flag(),
            distance_to_goal: scored.geometry.distance_to_goal,
            distance_to_center: scored.geometry.distance_to_center,
            angle: scored.geometry.angle,
            is_foot: flag(i.is_foot()),
            xg: scored.xg,
            scoring_group: scored.group.to_string(),
            sb_x,
            sb_y,
        }
    }

    /// Values for [`DERIVED_COLUMNS`], in the same order
    fn derived_values(&self) -> Vec<String> {
        let mut values = vec![
            self.event_type.clone(),
            self.shot_mechanism.clone(),
            self.situation.clone(),
            self.outcome.clone(),
        ];
        values.extend(
            [
                self.is_left_footed,
                self.is_right_footed,
                self.is_head,
                self.is_other_body_type,
                self.is_regular_play,
                self.is_throw_in,
                self.is_direct_free,
                self.is_from_corner,
                self.is_set_piece,
                self.is_own_goal,
                self.is_penalty,
                self.is_goal,
            ]
            .iter()
            .map(|f| f.to_string()),
        );
        values.push(self.distance_to_goal.to_string());
        values.push(self.distance_to_center.to_string());
        values.push(self.angle.to_string());
        values.push(self.is_foot.to_string());
        values.push(self.xg.to_string());
        values.push(self.scoring_group.clone());
        values
    }

    fn extra_value(&self, name: &str) -> &str {
        self.extra
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

/// Union of pass-through column names, in first-seen order
fn extra_columns(rows: &[ShotRow]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for row in rows {
        for (name, _) in &row.extra {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

fn coordinate(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write scored shots as CSV
pub fn write_scored_csv<W: Write>(
    writer: W,
    shots: &[ScoredShot],
    coordinates: Coordinates,
) -> Result<()> {
    let rows: Vec<ShotRow> = shots
        .iter()
        .map(|s| ShotRow::from_scored(s, coordinates))
        .collect();
    let extras = extra_columns(&rows);

    let mut writer = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = vec!["Player", "Event", "x", "y"];
    header.extend(extras.iter().map(String::as_str));
    header.extend(DERIVED_COLUMNS);
    let statsbomb = coordinates == Coordinates::StatsBomb;
    if statsbomb {
        header.extend(STATSBOMB_COLUMNS);
    }
    writer.write_record(&header)?;

    for row in &rows {
        let mut record = vec![
            row.player.clone(),
            row.event.clone(),
            coordinate(row.x),
            coordinate(row.y),
        ];
        record.extend(extras.iter().map(|name| row.extra_value(name).to_string()));
        record.extend(row.derived_values());
        if statsbomb {
            record.push(coordinate(row.sb_x));
            record.push(coordinate(row.sb_y));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Scored shots as a pretty-printed JSON array
pub fn to_json(shots: &[ScoredShot], coordinates: Coordinates) -> Result<String> {
    let mut values = Vec::with_capacity(shots.len());
    for shot in shots {
        let row = ShotRow::from_scored(shot, coordinates);
        let mut value = serde_json::to_value(&row)?;
        if let Some(object) = value.as_object_mut() {
            for (name, v) in &row.extra {
                object.insert(name.clone(), serde_json::Value::String(v.clone()));
            }
        }
        values.push(value);
    }
    Ok(serde_json::to_string_pretty(&values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_events;
    use crate::events::{EventRecord, NormalizedShot};
    use crate::features::ShotGeometry;
    use crate::predict::ShotGroup;

    fn scored(record: EventRecord, xg: f64) -> ScoredShot {
        let shot = NormalizedShot::from_record(&record).unwrap().unwrap();
        let group = ShotGroup::classify(&shot.indicators, record.row).unwrap();
        let geometry =
            ShotGeometry::from_location(record.x.unwrap(), record.y.unwrap(), 90.0);
        ScoredShot {
            shot,
            geometry,
            group,
            xg,
        }
    }

    fn sample() -> Vec<ScoredShot> {
        vec![
            scored(
                EventRecord::new(0, "Shot Right OpenPlay Goal", 90.0, 50.0, "Rom Brown")
                    .with_column("MatchId", "081724"),
                0.25,
            ),
            scored(
                EventRecord::new(1, "Shot Head Penalty Missed", 88.0, 50.0, "Ian M. Murray")
                    .with_column("Minute", "77"),
                0.79,
            ),
        ]
    }

    #[test]
    fn test_csv_columns() {
        let mut out = Vec::new();
        write_scored_csv(&mut out, &sample(), Coordinates::Event).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        let header: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(&header[..6], &["Player", "Event", "x", "y", "MatchId", "Minute"]);
        assert_eq!(&header[6..], &DERIVED_COLUMNS[..]);

        let first: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(first[0], "Rom Brown");
        assert_eq!(first[4], "081724");
        assert_eq!(first[5], "");
        let xg_idx = header.iter().position(|h| *h == "xG").unwrap();
        assert_eq!(first[xg_idx], "0.25");
        let goal_idx = header.iter().position(|h| *h == "isGoal").unwrap();
        assert_eq!(first[goal_idx], "1");
    }

    #[test]
    fn test_exported_csv_reads_back_without_duplicates() {
        let mut out = Vec::new();
        write_scored_csv(&mut out, &sample(), Coordinates::Event).unwrap();

        let records = read_events(out.as_slice(), 0).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].x, Some(90.0));
        assert_eq!(records[0].event, "Shot Right OpenPlay Goal");
        let names: Vec<&str> = records[0].extra.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["MatchId", "Minute"]);
    }

    #[test]
    fn test_statsbomb_coordinates() {
        let row = ShotRow::from_scored(&sample()[0], Coordinates::StatsBomb);
        assert_eq!(row.x, Some(90.0));
        assert_eq!(row.y, Some(50.0));
        assert!((row.sb_x.unwrap() - 108.0).abs() < 1e-9);
        assert!((row.sb_y.unwrap() - 40.0).abs() < 1e-9);
        // geometry is unaffected by the export system
        assert!((row.distance_to_goal - 10.0).abs() < 1e-9);

        let row = ShotRow::from_scored(&sample()[0], Coordinates::Event);
        assert_eq!(row.sb_x, None);
    }

    #[test]
    fn test_statsbomb_export_reads_back_on_event_scale() {
        let mut out = Vec::new();
        write_scored_csv(&mut out, &sample(), Coordinates::StatsBomb).unwrap();
        let text = String::from_utf8(out.clone()).unwrap();
        let header: Vec<&str> = text.lines().next().unwrap().split(',').collect();
        assert_eq!(&header[header.len() - 2..], &STATSBOMB_COLUMNS[..]);

        let records = read_events(out.as_slice(), 0).unwrap();
        assert_eq!(records[0].x, Some(90.0));
        assert_eq!(records[0].y, Some(50.0));
        let names: Vec<&str> = records[0].extra.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["MatchId", "Minute"]);
    }

    #[test]
    fn test_event_export_has_no_statsbomb_columns() {
        let mut out = Vec::new();
        write_scored_csv(&mut out, &sample(), Coordinates::Event).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.lines().next().unwrap().contains("sb_x"));

        let json = to_json(&sample(), Coordinates::Event).unwrap();
        assert!(!json.contains("sb_x"));
        let json = to_json(&sample(), Coordinates::StatsBomb).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["x"], 90.0);
        assert!((parsed[0]["sb_x"].as_f64().unwrap() - 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_has_all_columns() {
        let json = to_json(&sample(), Coordinates::Event).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = parsed[0].as_object().unwrap();

        for column in DERIVED_COLUMNS {
            assert!(first.contains_key(column), "missing {}", column);
        }
        assert_eq!(first["MatchId"], "081724");
        assert_eq!(first["isPenalty"], 0);
        assert_eq!(parsed[1]["isPenalty"], 1);
        assert_eq!(parsed[1]["scoringGroup"], "Penalty");
    }
}
