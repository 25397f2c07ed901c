//! Request and response bodies for the triage API.
//!
//! Field names follow the mobile client's JSON (`severity_level`, `duration_days`) and the stored
//! triage record, where symptoms travel as one comma-separated string.

use axiom_core::{
    constants::{MAX_DURATION_DAYS, MIN_DURATION_DAYS},
    SeverityLevel, Symptom, TriageRecord, TriageVerdict,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One-off assessment request. Nothing is stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessReq {
    /// Symptom labels, e.g. `["Fever", "Chest Pain"]`.
    pub symptoms: Vec<String>,
    /// One of `Mild`, `Moderate`, `Severe`, `Very Severe`.
    pub severity_level: String,
    pub duration_days: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssessRes {
    /// Machine-readable tier tag: `emergency`, `urgent`, `telehealth` or `self_care`.
    pub tier: String,
    pub recommendation: String,
    /// `critical`, `high`, `medium` or `low`.
    pub urgency: String,
    /// `#RRGGBB` display colour for the urgency.
    pub color: String,
    pub advice: String,
    /// Name of the rule that decided the tier.
    pub rule: String,
}

impl From<&TriageVerdict> for AssessRes {
    fn from(verdict: &TriageVerdict) -> Self {
        Self {
            tier: verdict.tier().tag().to_string(),
            recommendation: verdict.recommendation().to_string(),
            urgency: verdict.urgency().label().to_string(),
            color: verdict.color_hex().to_string(),
            advice: verdict.advice().to_string(),
            rule: verdict.rule().to_string(),
        }
    }
}

/// Body for storing an assessment in a user's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTriageRecordReq {
    /// Comma-separated symptom labels, e.g. `"Fever, Cough"`.
    pub symptoms: String,
    pub severity_level: String,
    pub duration_days: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriageRecordRes {
    pub id: String,
    pub user_id: u64,
    pub symptoms: String,
    pub severity_level: String,
    pub duration_days: u32,
    pub tier: String,
    pub recommendation: String,
    /// RFC 3339 timestamp assigned by the server.
    pub created_at: String,
}

impl From<&TriageRecord> for TriageRecordRes {
    fn from(record: &TriageRecord) -> Self {
        Self {
            id: record.id.simple().to_string(),
            user_id: record.user_id,
            symptoms: record.symptoms.to_string(),
            severity_level: record.severity.label().to_string(),
            duration_days: record.duration.get(),
            tier: record.tier.tag().to_string(),
            recommendation: record.recommendation.clone(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListTriageRecordsRes {
    pub records: Vec<TriageRecordRes>,
}

/// The vocabularies an input form must offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VocabularyRes {
    pub symptoms: Vec<String>,
    pub severity_levels: Vec<String>,
    pub min_duration_days: u32,
    pub max_duration_days: u32,
}

impl VocabularyRes {
    pub fn current() -> Self {
        Self {
            symptoms: Symptom::ALL.iter().map(|s| s.label().to_string()).collect(),
            severity_levels: SeverityLevel::ALL
                .iter()
                .map(|s| s.label().to_string())
                .collect(),
            min_duration_days: MIN_DURATION_DAYS,
            max_duration_days: MAX_DURATION_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axiom_core::{CoreConfig, TriageAssessment, TriageClassifier, TriageHistoryService};
    use std::sync::Arc;

    #[test]
    fn test_assess_res_from_verdict_carries_all_outputs() {
        let verdict = TriageClassifier::new()
            .classify_tokens(&["Fever"], "Mild", 10)
            .unwrap();
        let res = AssessRes::from(&verdict);
        assert_eq!(res.tier, "urgent");
        assert_eq!(res.recommendation, "Schedule an appointment with a doctor");
        assert_eq!(res.urgency, "high");
        assert_eq!(res.color, "#E65100");
        assert_eq!(res.rule, "urgent");
    }

    #[test]
    fn test_record_res_uses_storage_formats() {
        let svc = TriageHistoryService::new(Arc::new(CoreConfig::default()));
        let assessment =
            TriageAssessment::from_tokens(&["Cough", "Fever"], "Very Severe", 4).unwrap();
        let record = svc.record(12, assessment).unwrap();

        let res = TriageRecordRes::from(&record);
        assert_eq!(res.symptoms, "Fever, Cough");
        assert_eq!(res.severity_level, "Very Severe");
        assert_eq!(res.duration_days, 4);
        assert_eq!(res.id.len(), 32);
        assert_eq!(res.tier, "emergency");
    }

    #[test]
    fn test_vocabulary_lists_checklist_and_bounds() {
        let vocab = VocabularyRes::current();
        assert_eq!(vocab.symptoms.len(), 11);
        assert_eq!(vocab.symptoms[9], "Shortness of Breath");
        assert_eq!(vocab.severity_levels.last().map(String::as_str), Some("Very Severe"));
        assert_eq!((vocab.min_duration_days, vocab.max_duration_days), (1, 14));
    }

    #[test]
    fn test_assess_req_reads_client_json() {
        let req: AssessReq = serde_json::from_str(
            r#"{"symptoms":["Chest Pain"],"severity_level":"Moderate","duration_days":1}"#,
        )
        .unwrap();
        assert_eq!(req.symptoms, vec!["Chest Pain".to_string()]);
        assert_eq!(req.duration_days, 1);
    }
}
