//! # Axiom Core
//!
//! Core logic for the Axiom symptom triage service.
//!
//! This crate contains pure domain operations:
//! - The fixed symptom and severity vocabularies and validated input types
//! - The rule-based [`TriageClassifier`]
//! - Per-user triage history held in process memory
//!
//! **No API concerns**: HTTP servers, wire DTOs and CLI parsing belong in `api-rest`,
//! `api-shared` or `axiom-cli`.

pub mod config;
pub mod constants;
pub mod duration;
pub mod error;
pub mod history;
pub mod severity;
pub mod symptom;
pub mod triage;
pub mod validation;
pub mod verdict;

pub use config::CoreConfig;
pub use duration::DurationDays;
pub use error::{TriageError, TriageResult};
pub use history::{TriageHistoryService, TriageRecord};
pub use severity::SeverityLevel;
pub use symptom::{Symptom, SymptomSet};
pub use triage::{TriageAssessment, TriageClassifier, TriageRule, TRIAGE_RULES};
pub use verdict::{TriageTier, TriageVerdict, Urgency};
