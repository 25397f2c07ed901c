//! Triage outcomes.
//!
//! A tier carries its recommendation, urgency colour and advice together, so the three can never
//! disagree with one another.

use serde::Serialize;
use std::fmt;

/// Display urgency attached to a tier, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Colour used by the results view, as `#RRGGBB`.
    pub const fn color_hex(self) -> &'static str {
        match self {
            Urgency::Critical => "#B71C1C",
            Urgency::High => "#E65100",
            Urgency::Medium => "#FFB300",
            Urgency::Low => "#33691E",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four ranked triage recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageTier {
    Emergency,
    Urgent,
    Telehealth,
    SelfCare,
}

impl TriageTier {
    pub const ALL: [TriageTier; 4] = [
        TriageTier::Emergency,
        TriageTier::Urgent,
        TriageTier::Telehealth,
        TriageTier::SelfCare,
    ];

    /// Stable machine-readable tag, matching the serde representation.
    pub const fn tag(self) -> &'static str {
        match self {
            TriageTier::Emergency => "emergency",
            TriageTier::Urgent => "urgent",
            TriageTier::Telehealth => "telehealth",
            TriageTier::SelfCare => "self_care",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            TriageTier::Emergency => "Seek immediate emergency care",
            TriageTier::Urgent => "Schedule an appointment with a doctor",
            TriageTier::Telehealth => "Consider a telehealth consultation",
            TriageTier::SelfCare => "Self-care at home",
        }
    }

    pub const fn urgency(self) -> Urgency {
        match self {
            TriageTier::Emergency => Urgency::Critical,
            TriageTier::Urgent => Urgency::High,
            TriageTier::Telehealth => Urgency::Medium,
            TriageTier::SelfCare => Urgency::Low,
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            TriageTier::Emergency => {
                "Your symptoms may indicate a serious condition that requires immediate medical \
                 attention. Please go to the nearest emergency room or call emergency services."
            }
            TriageTier::Urgent => {
                "Your symptoms are concerning and should be evaluated by a healthcare professional \
                 within 24-48 hours."
            }
            TriageTier::Telehealth => {
                "Your symptoms warrant medical attention, but may not need an in-person visit. \
                 A telehealth consultation could help determine next steps."
            }
            TriageTier::SelfCare => {
                "Your symptoms appear to be mild. Rest, stay hydrated, and take over-the-counter \
                 medications as appropriate. If symptoms worsen or persist beyond 7 days, consult \
                 a healthcare provider."
            }
        }
    }
}

impl fmt::Display for TriageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.recommendation())
    }
}

/// Result of classifying one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriageVerdict {
    tier: TriageTier,
    rule: &'static str,
}

impl TriageVerdict {
    pub(crate) fn new(tier: TriageTier, rule: &'static str) -> Self {
        Self { tier, rule }
    }

    pub fn tier(&self) -> TriageTier {
        self.tier
    }

    pub fn recommendation(&self) -> &'static str {
        self.tier.recommendation()
    }

    pub fn urgency(&self) -> Urgency {
        self.tier.urgency()
    }

    pub fn color_hex(&self) -> &'static str {
        self.tier.urgency().color_hex()
    }

    pub fn advice(&self) -> &'static str {
        self.tier.advice()
    }

    /// Name of the cascade rule that produced this verdict.
    pub fn rule(&self) -> &'static str {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_rank_follows_tier_rank() {
        let urgencies: Vec<Urgency> = TriageTier::ALL.iter().map(|t| t.urgency()).collect();
        assert_eq!(
            urgencies,
            vec![Urgency::Critical, Urgency::High, Urgency::Medium, Urgency::Low]
        );
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::High < Urgency::Critical);
    }

    #[test]
    fn test_colors_match_results_palette() {
        assert_eq!(TriageTier::Emergency.urgency().color_hex(), "#B71C1C");
        assert_eq!(TriageTier::Urgent.urgency().color_hex(), "#E65100");
        assert_eq!(TriageTier::Telehealth.urgency().color_hex(), "#FFB300");
        assert_eq!(TriageTier::SelfCare.urgency().color_hex(), "#33691E");
    }

    #[test]
    fn test_advice_text_is_continuous_prose() {
        for tier in TriageTier::ALL {
            assert!(!tier.advice().contains("  "), "double space in {:?}", tier);
        }
        assert!(TriageTier::Urgent.advice().contains("24-48 hours"));
    }


    #[test]
    fn test_tier_tag_matches_serde() {
        for tier in TriageTier::ALL {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.tag()));
        }
    }
}
