//! Session code value object

use crate::core::error::ValidationError;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

/// Length of a generated session code.
pub const CODE_LENGTH: usize = 6;

/// Upper bound for manually entered codes.
const MAX_ENTERED_LENGTH: usize = 64;

/// Short identifier grouping two participants' statements (Value Object)
///
/// Generated codes are [`CODE_LENGTH`] characters drawn uniformly from
/// `[A-Za-z0-9]`. Nothing checks generated codes against existing sessions,
/// so two sessions can collide.
///
/// Codes entered by hand are accepted as long as they are ASCII alphanumeric
/// and not longer than 64 characters, because the code doubles as a storage
/// key. They are not held to [`CODE_LENGTH`]: `"abc"` is a valid entered
/// code, so a mistyped code silently opens a different (empty) session.
///
/// # Examples
///
/// ```
/// use resolver_domain::SessionCode;
///
/// let code = SessionCode::parse(" AB12cd ").unwrap();
/// assert_eq!(code.as_str(), "AB12cd");
///
/// assert!(SessionCode::parse("not a code!").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionCode(String);

impl SessionCode {
    /// Generate a fresh random code.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a code from the given random source.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let code = (0..CODE_LENGTH)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        Self(code)
    }

    /// Validate a code typed in by a participant.
    ///
    /// Surrounding whitespace is ignored. Any length from 1 to 64 is
    /// accepted; only generated codes are [`CODE_LENGTH`] long.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(ValidationError::InvalidCode(
                "code cannot be empty".to_string(),
            ));
        }
        if code.len() > MAX_ENTERED_LENGTH {
            return Err(ValidationError::InvalidCode(format!(
                "code is longer than {} characters",
                MAX_ENTERED_LENGTH
            )));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidCode(format!(
                "'{}' must contain only letters and digits",
                code
            )));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SessionCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SessionCode> for String {
    fn from(code: SessionCode) -> Self {
        code.0
    }
}

impl AsRef<str> for SessionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..200 {
            let code = SessionCode::generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = SessionCode::generate_with(&mut StdRng::seed_from_u64(7));
        let b = SessionCode::generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generation_covers_all_character_classes() {
        let mut rng = StdRng::seed_from_u64(42);
        let sample: String = (0..100)
            .map(|_| SessionCode::generate_with(&mut rng).into())
            .collect::<Vec<String>>()
            .concat();
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let code = SessionCode::parse("  AB12cd\n").unwrap();
        assert_eq!(code.as_str(), "AB12cd");
    }

    #[test]
    fn test_parse_rejects_empty_and_symbols() {
        assert!(matches!(
            SessionCode::parse("   "),
            Err(ValidationError::InvalidCode(_))
        ));
        assert!(SessionCode::parse("AB-12").is_err());
        assert!(SessionCode::parse("../etc").is_err());
        assert!(SessionCode::parse(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_parse_accepts_codes_of_other_lengths() {
        assert_eq!(SessionCode::parse("abc").unwrap().as_str(), "abc");
        assert_eq!(SessionCode::parse("a").unwrap().as_str().len(), 1);
        let longest = "a".repeat(MAX_ENTERED_LENGTH);
        assert_eq!(SessionCode::parse(&longest).unwrap().as_str(), longest);
    }

    #[test]
    fn test_serde_roundtrip_as_plain_string() {
        let code = SessionCode::parse("AB12cd").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"AB12cd\"");
        let back: SessionCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<SessionCode>("\"bad code\"").is_err());
    }
}
