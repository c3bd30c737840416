//! Statement entity

use crate::core::error::ValidationError;
use crate::session::participant::Participant;
use serde::{Deserialize, Serialize};

/// A statement submitted by one participant (Entity)
///
/// Serialized as `{"user": "Participant 1", "text": "..."}`, the shape the
/// ledger is persisted in. The text is stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "user")]
    pub participant: Participant,
    pub text: String,
}

impl Statement {
    pub fn new(participant: Participant, text: impl Into<String>) -> Self {
        Self {
            participant,
            text: text.into(),
        }
    }

    /// Check that the text has content beyond whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_input(&self.text)
    }
}

/// Reject text that is empty after trimming whitespace.
pub fn validate_input(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::EmptyStatement)
    } else {
        Ok(())
    }
}

/// The most recent statement by `participant`.
///
/// Recency is position in the sequence: the last matching element wins.
pub fn latest_by(statements: &[Statement], participant: Participant) -> Option<&Statement> {
    statements
        .iter()
        .rev()
        .find(|s| s.participant == participant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input() {
        assert!(validate_input("I feel unheard").is_ok());
        assert_eq!(validate_input(""), Err(ValidationError::EmptyStatement));
        assert_eq!(
            validate_input(" \t\n "),
            Err(ValidationError::EmptyStatement)
        );
    }

    #[test]
    fn test_persisted_shape() {
        let statement = Statement::new(Participant::One, "I feel unheard");
        let value = serde_json::to_value(&statement).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"user": "Participant 1", "text": "I feel unheard"})
        );
    }

    #[test]
    fn test_latest_by_returns_last_match() {
        let statements = vec![
            Statement::new(Participant::One, "a"),
            Statement::new(Participant::Two, "x"),
            Statement::new(Participant::One, "b"),
        ];
        assert_eq!(latest_by(&statements, Participant::One).unwrap().text, "b");
        assert_eq!(latest_by(&statements, Participant::Two).unwrap().text, "x");
    }

    #[test]
    fn test_latest_by_absent() {
        let statements = vec![Statement::new(Participant::One, "a")];
        assert!(latest_by(&statements, Participant::Two).is_none());
        assert!(latest_by(&[], Participant::One).is_none());
    }
}
