//! Per-user triage history.
//!
//! Each completed assessment is kept as a [`TriageRecord`] under the user who submitted it. The
//! recommendation is always computed here from the stored inputs, never accepted from the caller,
//! so a record's recommendation cannot contradict its symptoms and severity.
//!
//! Records live in process memory only. Each user keeps at most
//! [`CoreConfig::history_limit`] records; the oldest is dropped when a new one would exceed it.

use crate::{
    CoreConfig, DurationDays, SeverityLevel, SymptomSet, TriageAssessment, TriageClassifier,
    TriageError, TriageResult, TriageTier,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A stored assessment and the recommendation it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageRecord {
    pub id: Uuid,
    pub user_id: u64,
    pub symptoms: SymptomSet,
    pub severity: SeverityLevel,
    pub duration: DurationDays,
    pub tier: TriageTier,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

/// Shared, thread-safe store of triage records keyed by user.
#[derive(Clone, Debug)]
pub struct TriageHistoryService {
    cfg: Arc<CoreConfig>,
    classifier: TriageClassifier,
    records: Arc<RwLock<HashMap<u64, Vec<TriageRecord>>>>,
}

impl TriageHistoryService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            classifier: TriageClassifier::new(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Classifies `assessment` and stores the result for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::StoreUnavailable` if the store lock is poisoned.
    pub fn record(
        &self,
        user_id: u64,
        assessment: TriageAssessment,
    ) -> TriageResult<TriageRecord> {
        let verdict = self.classifier.classify_assessment(&assessment);
        let record = TriageRecord {
            id: Uuid::new_v4(),
            user_id,
            symptoms: assessment.symptoms,
            severity: assessment.severity,
            duration: assessment.duration,
            tier: verdict.tier(),
            recommendation: verdict.recommendation().to_string(),
            created_at: Utc::now(),
        };

        let mut records = self
            .records
            .write()
            .map_err(|_| TriageError::StoreUnavailable)?;
        let history = records.entry(user_id).or_default();
        history.push(record.clone());

        let limit = self.cfg.history_limit();
        if history.len() > limit {
            let excess = history.len() - limit;
            history.drain(..excess);
            tracing::warn!(user_id, evicted = excess, "triage history limit reached");
        }

        tracing::info!(
            user_id,
            record_id = %record.id,
            tier = record.tier.tag(),
            "stored triage record"
        );

        Ok(record)
    }

    /// All records for `user_id`, newest first. Unknown users have an empty history.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::StoreUnavailable` if the store lock is poisoned.
    pub fn list_for_user(&self, user_id: u64) -> TriageResult<Vec<TriageRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| TriageError::StoreUnavailable)?;

        let mut history: Vec<TriageRecord> = records
            .get(&user_id)
            .map(|h| h.iter().rev().cloned().collect())
            .unwrap_or_default();
        // Stable sort keeps insertion order (newest first) between equal timestamps.
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(history)
    }

    /// A single record belonging to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::RecordNotFound` if the user has no record with `record_id`, or
    /// `TriageError::StoreUnavailable` if the store lock is poisoned.
    pub fn get(&self, user_id: u64, record_id: Uuid) -> TriageResult<TriageRecord> {
        let records = self
            .records
            .read()
            .map_err(|_| TriageError::StoreUnavailable)?;

        records
            .get(&user_id)
            .and_then(|h| h.iter().find(|r| r.id == record_id))
            .cloned()
            .ok_or(TriageError::RecordNotFound { user_id, record_id })
    }
}
