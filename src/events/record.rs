//! Raw event rows

/// One row of the input event table.
///
/// `X`/`Y` arrive as `x`/`y` here. Coordinates are optional because a
/// table may lack them entirely; that only becomes an error at scoring time.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Position in the original (concatenated) table
    pub row: usize,
    /// Compound descriptor, e.g. "Shot Right OpenPlay Goal"
    pub event: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub player: String,
    /// Remaining columns in their original order
    pub extra: Vec<(String, String)>,
}

impl EventRecord {
    pub fn new(
        row: usize,
        event: impl Into<String>,
        x: f64,
        y: f64,
        player: impl Into<String>,
    ) -> Self {
        EventRecord {
            row,
            event: event.into(),
            x: Some(x),
            y: Some(y),
            player: player.into(),
            extra: Vec::new(),
        }
    }

    /// Attach a pass-through column
    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Look up a pass-through column by name
    pub fn column(&self, name: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_columns() {
        let record = EventRecord::new(0, "Shot Right OpenPlay Goal", 90.0, 50.0, "Rom Brown")
            .with_column("Team", "United SC")
            .with_column("MatchId", "081724");

        assert_eq!(record.column("Team"), Some("United SC"));
        assert_eq!(record.column("MatchId"), Some("081724"));
        assert_eq!(record.column("Minute"), None);
        assert_eq!(record.extra[0].0, "Team");
    }
}
