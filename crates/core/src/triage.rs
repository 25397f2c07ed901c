//! Rule-based symptom triage.
//!
//! Classification walks an ordered cascade of rules and stops at the first one whose predicate
//! holds. Anything no rule claims falls through to self-care. The cascade order is the precedence:
//! tiers are never blended.
//!
//! | Order | Rule | Condition | Tier |
//! | --- | --- | --- | --- |
//! | 1 | `emergency` | very severe, or a red-flag symptom at any severity above mild | Emergency |
//! | 2 | `urgent` | severe, or symptoms lasting more than 7 days | Urgent |
//! | 3 | `telehealth` | moderate | Telehealth |
//! | - | `self_care` | otherwise | Self-care |

use crate::constants::PROLONGED_DURATION_DAYS;
use crate::{
    DurationDays, SeverityLevel, SymptomSet, TriageError, TriageResult, TriageTier, TriageVerdict,
};

/// A validated (symptoms, severity, duration) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageAssessment {
    pub symptoms: SymptomSet,
    pub severity: SeverityLevel,
    pub duration: DurationDays,
}

impl TriageAssessment {
    pub fn new(symptoms: SymptomSet, severity: SeverityLevel, duration: DurationDays) -> Self {
        Self {
            symptoms,
            severity,
            duration,
        }
    }

    /// Builds an assessment from raw checklist, radio group and slider values.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if no symptoms are given, a symptom or the severity is
    /// not recognised, or the duration is out of range.
    pub fn from_tokens<T: AsRef<str>>(
        symptoms: &[T],
        severity: &str,
        duration_days: u32,
    ) -> TriageResult<Self> {
        Ok(Self {
            symptoms: SymptomSet::from_tokens(symptoms)?,
            severity: SeverityLevel::parse_token(severity)?,
            duration: DurationDays::new(duration_days)?,
        })
    }
}

/// One step of the cascade.
#[derive(Clone, Copy)]
pub struct TriageRule {
    pub name: &'static str,
    pub applies: fn(&TriageAssessment) -> bool,
    pub tier: TriageTier,
}

impl std::fmt::Debug for TriageRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageRule")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish()
    }
}

fn emergency(a: &TriageAssessment) -> bool {
    a.severity == SeverityLevel::VerySevere
        || (a.symptoms.has_red_flag() && a.severity != SeverityLevel::Mild)
}

fn urgent(a: &TriageAssessment) -> bool {
    a.severity == SeverityLevel::Severe || a.duration.exceeds(PROLONGED_DURATION_DAYS)
}

fn telehealth(a: &TriageAssessment) -> bool {
    a.severity == SeverityLevel::Moderate
}

/// The ordered cascade, highest precedence first.
pub const TRIAGE_RULES: [TriageRule; 3] = [
    TriageRule {
        name: "emergency",
        applies: emergency,
        tier: TriageTier::Emergency,
    },
    TriageRule {
        name: "urgent",
        applies: urgent,
        tier: TriageTier::Urgent,
    },
    TriageRule {
        name: "telehealth",
        applies: telehealth,
        tier: TriageTier::Telehealth,
    },
];

/// Rule name reported when nothing in the cascade matches.
pub const FALLBACK_RULE: &str = "self_care";

/// Stateless triage classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriageClassifier;

impl TriageClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a symptom set, severity and duration.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if `symptoms` is empty.
    pub fn classify(
        &self,
        symptoms: &SymptomSet,
        severity: SeverityLevel,
        duration: DurationDays,
    ) -> TriageResult<TriageVerdict> {
        if symptoms.is_empty() {
            return Err(TriageError::InvalidInput(
                "at least one symptom must be selected".into(),
            ));
        }
        let assessment = TriageAssessment::new(symptoms.clone(), severity, duration);
        Ok(self.classify_assessment(&assessment))
    }

    /// Classifies an already validated assessment. Always yields a verdict.
    pub fn classify_assessment(&self, assessment: &TriageAssessment) -> TriageVerdict {
        let verdict = TRIAGE_RULES
            .iter()
            .find(|rule| (rule.applies)(assessment))
            .map(|rule| TriageVerdict::new(rule.tier, rule.name))
            .unwrap_or_else(|| TriageVerdict::new(TriageTier::SelfCare, FALLBACK_RULE));

        tracing::debug!(
            rule = verdict.rule(),
            tier = verdict.tier().tag(),
            severity = %assessment.severity,
            duration_days = assessment.duration.get(),
            "triage rule fired"
        );

        verdict
    }

    /// Validates raw tokens and classifies them.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` under the same conditions as
    /// [`TriageAssessment::from_tokens`].
    pub fn classify_tokens<T: AsRef<str>>(
        &self,
        symptoms: &[T],
        severity: &str,
        duration_days: u32,
    ) -> TriageResult<TriageVerdict> {
        let assessment = TriageAssessment::from_tokens(symptoms, severity, duration_days)?;
        Ok(self.classify_assessment(&assessment))
    }
}
