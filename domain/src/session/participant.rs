//! Participant value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// One of the two sides of a session.
///
/// Stored under the labels the persisted ledger has always used
/// (`"Participant 1"` / `"Participant 2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    #[serde(rename = "Participant 1")]
    One,
    #[serde(rename = "Participant 2")]
    Two,
}

impl Participant {
    pub fn label(&self) -> &'static str {
        match self {
            Participant::One => "Participant 1",
            Participant::Two => "Participant 2",
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Participant {
    type Err = ValidationError;

    /// Accepts `1`, `p1`, `participant 1` (any case) and the same for 2.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "p1" | "one" | "participant 1" | "participant1" => Ok(Participant::One),
            "2" | "p2" | "two" | "participant 2" | "participant2" => Ok(Participant::Two),
            _ => Err(ValidationError::UnknownParticipant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_ledger_labels() {
        assert_eq!(
            serde_json::to_string(&Participant::One).unwrap(),
            "\"Participant 1\""
        );
        let p: Participant = serde_json::from_str("\"Participant 2\"").unwrap();
        assert_eq!(p, Participant::Two);
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("1".parse::<Participant>().unwrap(), Participant::One);
        assert_eq!("P2".parse::<Participant>().unwrap(), Participant::Two);
        assert_eq!(
            "Participant 1".parse::<Participant>().unwrap(),
            Participant::One
        );
        assert!("3".parse::<Participant>().is_err());
    }
}
