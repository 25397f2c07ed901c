//! Symptom vocabulary and symptom sets.
//!
//! The symptom checklist offers a fixed vocabulary. A [`SymptomSet`] is the validated selection
//! from that checklist: never empty, no duplicates, and ordered by checklist position so that
//! display and storage are deterministic.

use crate::constants::SYMPTOM_LIST_SEPARATOR;
use crate::validation::normalise_token;
use crate::{TriageError, TriageResult};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A symptom from the checklist vocabulary.
///
/// Variant order is checklist order; [`SymptomSet`] iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symptom {
    Fever,
    Cough,
    Headache,
    SoreThroat,
    Fatigue,
    Nausea,
    Vomiting,
    AbdominalPain,
    ChestPain,
    ShortnessOfBreath,
    Dizziness,
}

impl Symptom {
    /// Every symptom in checklist order.
    pub const ALL: [Symptom; 11] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Headache,
        Symptom::SoreThroat,
        Symptom::Fatigue,
        Symptom::Nausea,
        Symptom::Vomiting,
        Symptom::AbdominalPain,
        Symptom::ChestPain,
        Symptom::ShortnessOfBreath,
        Symptom::Dizziness,
    ];

    /// The display label shown on the checklist.
    pub const fn label(self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Headache => "Headache",
            Symptom::SoreThroat => "Sore Throat",
            Symptom::Fatigue => "Fatigue",
            Symptom::Nausea => "Nausea",
            Symptom::Vomiting => "Vomiting",
            Symptom::AbdominalPain => "Abdominal Pain",
            Symptom::ChestPain => "Chest Pain",
            Symptom::ShortnessOfBreath => "Shortness of Breath",
            Symptom::Dizziness => "Dizziness",
        }
    }

    /// Red-flag symptoms escalate to emergency care at any severity above mild.
    pub const fn is_red_flag(self) -> bool {
        matches!(self, Symptom::ChestPain | Symptom::ShortnessOfBreath)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symptom {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise_token(s)?;
        Symptom::ALL
            .into_iter()
            .find(|symptom| symptom.label().to_lowercase() == wanted)
            .ok_or_else(|| TriageError::InvalidInput(format!("unrecognised symptom: {}", s.trim())))
    }
}

impl serde::Serialize for Symptom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Symptom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A non-empty set of symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymptomSet(BTreeSet<Symptom>);

impl SymptomSet {
    /// Creates a symptom set from any collection of symptoms.
    ///
    /// Duplicates collapse. An empty selection is rejected, since an assessment needs at least
    /// one symptom to classify.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if `symptoms` yields nothing.
    pub fn new(symptoms: impl IntoIterator<Item = Symptom>) -> TriageResult<Self> {
        let set: BTreeSet<Symptom> = symptoms.into_iter().collect();
        if set.is_empty() {
            return Err(TriageError::InvalidInput(
                "at least one symptom must be selected".into(),
            ));
        }
        Ok(Self(set))
    }

    /// Parses a set from individual symptom tokens.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if any token is not in the vocabulary or if there are
    /// no tokens.
    pub fn from_tokens<T: AsRef<str>>(tokens: &[T]) -> TriageResult<Self> {
        let symptoms = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Symptom>())
            .collect::<TriageResult<Vec<_>>>()?;
        Self::new(symptoms)
    }

    /// Parses the comma-separated form used when records store symptoms as a single string,
    /// e.g. `"Fever, Cough"`. Empty segments are skipped.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` for unknown symptoms or an empty list.
    pub fn parse_list(list: &str) -> TriageResult<Self> {
        let tokens: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        Self::from_tokens(&tokens)
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.0.contains(&symptom)
    }

    /// True if any selected symptom is a red flag.
    pub fn has_red_flag(&self) -> bool {
        self.0.iter().any(|s| s.is_red_flag())
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SymptomSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(Symptom::label)
            .collect::<Vec<_>>()
            .join(SYMPTOM_LIST_SEPARATOR);
        f.write_str(&joined)
    }
}

impl serde::Serialize for SymptomSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> serde::Deserialize<'de> for SymptomSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let symptoms = Vec::<Symptom>::deserialize(deserializer)?;
        SymptomSet::new(symptoms).map_err(serde::de::Error::custom)
    }
}
