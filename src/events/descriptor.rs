//! Compound event descriptor parsing
//!
//! An `Event` cell packs four whitespace-separated tokens:
//! event type, shot mechanism, situation and outcome,
//! e.g. `"Shot Right OpenPlay Goal"`.

use std::fmt;

use crate::{Result, XgError};

/// Event type token for shot attempts
pub const SHOT_EVENT: &str = "Shot";

/// Outcome token for a scored shot
pub const GOAL_OUTCOME: &str = "Goal";

/// How the shot was struck
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShotMechanism {
    Right,
    Left,
    Head,
    /// Any other token, kept verbatim
    Other(String),
}

impl ShotMechanism {
    pub fn from_token(token: &str) -> Self {
        match token {
            "Right" => ShotMechanism::Right,
            "Left" => ShotMechanism::Left,
            "Head" => ShotMechanism::Head,
            other => ShotMechanism::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ShotMechanism::Right => "Right",
            ShotMechanism::Left => "Left",
            ShotMechanism::Head => "Head",
            ShotMechanism::Other(token) => token,
        }
    }

    /// Body-part category; the single source of truth for body-part flags
    pub fn body_part(&self) -> BodyPart {
        match self {
            ShotMechanism::Head => BodyPart::Head,
            ShotMechanism::Right | ShotMechanism::Left => BodyPart::Foot,
            ShotMechanism::Other(_) => BodyPart::OtherBodyPart,
        }
    }
}

impl fmt::Display for ShotMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Foot,
    Head,
    OtherBodyPart,
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyPart::Foot => "Foot",
            BodyPart::Head => "Head",
            BodyPart::OtherBodyPart => "OtherBodyPart",
        };
        f.pad(name)
    }
}

/// Phase of play the shot came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Situation {
    OpenPlay,
    DirectFreekick,
    FromCorner,
    SetPiece,
    Penalty,
    ThrowIn,
    Other(String),
}

impl Situation {
    pub fn from_token(token: &str) -> Self {
        match token {
            "OpenPlay" => Situation::OpenPlay,
            "DirectFreekick" => Situation::DirectFreekick,
            "FromCorner" => Situation::FromCorner,
            "SetPiece" => Situation::SetPiece,
            "Penalty" => Situation::Penalty,
            "ThrowIn" => Situation::ThrowIn,
            other => Situation::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Situation::OpenPlay => "OpenPlay",
            Situation::DirectFreekick => "DirectFreekick",
            Situation::FromCorner => "FromCorner",
            Situation::SetPiece => "SetPiece",
            Situation::Penalty => "Penalty",
            Situation::ThrowIn => "ThrowIn",
            Situation::Other(token) => token,
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The four typed fields of an `Event` cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub event_type: String,
    pub mechanism: ShotMechanism,
    pub situation: Situation,
    pub outcome: String,
}

impl EventDescriptor {
    /// Split a raw `Event` string into its four tokens.
    ///
    /// Any other token count is a `MalformedEvent` error; nothing is defaulted.
    pub fn parse(raw: &str) -> Result<Self> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [event_type, mechanism, situation, outcome] = tokens.as_slice() else {
            return Err(XgError::MalformedEvent {
                event: raw.to_string(),
                tokens: tokens.len(),
            });
        };

        Ok(EventDescriptor {
            event_type: event_type.to_string(),
            mechanism: ShotMechanism::from_token(mechanism),
            situation: Situation::from_token(situation),
            outcome: outcome.to_string(),
        })
    }

    pub fn is_shot(&self) -> bool {
        self.event_type == SHOT_EVENT
    }

    pub fn is_goal(&self) -> bool {
        self.outcome == GOAL_OUTCOME
    }
}

impl fmt::Display for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.event_type, self.mechanism, self.situation, self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open_play_goal() {
        let d = EventDescriptor::parse("Shot Right OpenPlay Goal").unwrap();
        assert_eq!(d.event_type, "Shot");
        assert_eq!(d.mechanism, ShotMechanism::Right);
        assert_eq!(d.situation, Situation::OpenPlay);
        assert_eq!(d.outcome, "Goal");
        assert!(d.is_shot());
        assert!(d.is_goal());
    }

    #[test]
    fn test_parse_unknown_tokens_kept_verbatim() {
        let d = EventDescriptor::parse("Shot Chest Rebound Saved").unwrap();
        assert_eq!(d.mechanism, ShotMechanism::Other("Chest".to_string()));
        assert_eq!(d.mechanism.body_part(), BodyPart::OtherBodyPart);
        assert_eq!(d.situation, Situation::Other("Rebound".to_string()));
        assert!(!d.is_goal());
        assert_eq!(d.to_string(), "Shot Chest Rebound Saved");
    }

    #[test]
    fn test_parse_non_shot() {
        let d = EventDescriptor::parse("Pass Right OpenPlay Complete").unwrap();
        assert!(!d.is_shot());
    }

    #[test]
    fn test_three_tokens_is_malformed() {
        let err = EventDescriptor::parse("Shot OpenPlay Goal").unwrap_err();
        assert!(matches!(err, XgError::MalformedEvent { tokens: 3, .. }));
    }

    #[test]
    fn test_five_tokens_is_malformed() {
        let err = EventDescriptor::parse("Shot Right OpenPlay Own Goal").unwrap_err();
        assert!(matches!(err, XgError::MalformedEvent { tokens: 5, .. }));
    }

    #[test]
    fn test_empty_is_malformed() {
        let err = EventDescriptor::parse("   ").unwrap_err();
        assert!(matches!(err, XgError::MalformedEvent { tokens: 0, .. }));
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        let d = EventDescriptor::parse("  Shot\tHead  FromCorner Goal ").unwrap();
        assert_eq!(d.mechanism, ShotMechanism::Head);
        assert_eq!(d.situation, Situation::FromCorner);
    }

    #[test]
    fn test_body_part_category() {
        assert_eq!(ShotMechanism::Right.body_part(), BodyPart::Foot);
        assert_eq!(ShotMechanism::Left.body_part(), BodyPart::Foot);
        assert_eq!(ShotMechanism::Head.body_part(), BodyPart::Head);
    }

    #[test]
    fn test_display_honours_width() {
        let line = format!(
            "[{:<8}] [{:<16}] [{:>6}]",
            ShotMechanism::Right,
            Situation::OpenPlay,
            BodyPart::Head
        );
        assert_eq!(line, "[Right   ] [OpenPlay        ] [  Head]");
        assert_eq!(
            format!("[{:<6}]", ShotMechanism::Other("Chest".to_string())),
            "[Chest ]"
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let d = EventDescriptor::parse("shot right openplay goal").unwrap();
        assert!(!d.is_shot());
        assert_eq!(d.mechanism, ShotMechanism::Other("right".to_string()));
        assert!(!d.is_goal());
    }
}
