//! Self-reported severity levels.

use crate::validation::normalise_token;
use crate::{TriageError, TriageResult};
use std::fmt;
use std::str::FromStr;

/// Severity chosen on the assessment's radio group.
///
/// Ordering follows the radio group from mildest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl SeverityLevel {
    /// Every level, mildest first.
    pub const ALL: [SeverityLevel; 4] = [
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::Severe,
        SeverityLevel::VerySevere,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Severe => "Severe",
            SeverityLevel::VerySevere => "Very Severe",
        }
    }

    /// Parses a severity token, rejecting anything outside the four levels.
    ///
    /// An unselected radio group arrives as an empty token and is rejected rather than
    /// defaulted.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` for empty or unrecognised tokens.
    pub fn parse_token(token: &str) -> TriageResult<Self> {
        if token.trim().is_empty() {
            return Err(TriageError::InvalidInput(
                "severity level must be selected".into(),
            ));
        }
        let wanted = normalise_token(token)?;

        if wanted == "verysevere" {
            return Ok(SeverityLevel::VerySevere);
        }

        SeverityLevel::ALL
            .into_iter()
            .find(|level| level.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                TriageError::InvalidInput(format!("unrecognised severity level: {}", token.trim()))
            })
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityLevel {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

impl serde::Serialize for SeverityLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for SeverityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_token(&s).map_err(serde::de::Error::custom)
    }
}
