//! Symptom duration in whole days.

use crate::constants::{MAX_DURATION_DAYS, MIN_DURATION_DAYS};
use crate::{TriageError, TriageResult};
use std::fmt;

/// How long symptoms have lasted, in days, within the slider's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DurationDays(u8);

impl DurationDays {
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if `days` is outside
    /// `MIN_DURATION_DAYS..=MAX_DURATION_DAYS`.
    pub fn new(days: u32) -> TriageResult<Self> {
        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&days) {
            return Err(TriageError::InvalidInput(format!(
                "duration must be between {} and {} days, got {}",
                MIN_DURATION_DAYS, MAX_DURATION_DAYS, days
            )));
        }
        Ok(Self(days as u8))
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// True if the duration is strictly longer than `threshold` days.
    pub fn exceeds(self, threshold: u32) -> bool {
        self.get() > threshold
    }

    /// Every valid duration, shortest first.
    pub fn all() -> impl Iterator<Item = DurationDays> {
        (MIN_DURATION_DAYS..=MAX_DURATION_DAYS).map(|d| DurationDays(d as u8))
    }
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.0)
        }
    }
}

impl serde::Serialize for DurationDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}

impl<'de> serde::Deserialize<'de> for DurationDays {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let days = u32::deserialize(deserializer)?;
        DurationDays::new(days).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_inclusive_bounds() {
        assert_eq!(DurationDays::new(1).unwrap().get(), 1);
        assert_eq!(DurationDays::new(14).unwrap().get(), 14);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        for days in [0, 15, 365] {
            let err = DurationDays::new(days).expect_err("should reject out of range");
            assert!(matches!(err, TriageError::InvalidInput(msg) if msg.contains("between 1 and 14")));
        }
    }

    #[test]
    fn test_exceeds_is_strict() {
        let week = DurationDays::new(7).unwrap();
        assert!(!week.exceeds(7));
        assert!(DurationDays::new(8).unwrap().exceeds(7));
    }

    #[test]
    fn test_all_covers_slider_range() {
        let all: Vec<u32> = DurationDays::all().map(DurationDays::get).collect();
        assert_eq!(all, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_deserialise_rejects_out_of_range() {
        assert!(serde_json::from_str::<DurationDays>("0").is_err());
        assert_eq!(
            serde_json::from_str::<DurationDays>("10").unwrap(),
            DurationDays::new(10).unwrap()
        );
    }
}
