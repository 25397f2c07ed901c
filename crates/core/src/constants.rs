//! Constants used throughout the Axiom core crate.
//!
//! Bounds and defaults live here so the classifier, the history store and the API layers agree
//! on a single set of values.

/// Shortest symptom duration accepted by an assessment, in days.
pub const MIN_DURATION_DAYS: u32 = 1;

/// Longest symptom duration accepted by an assessment, in days.
pub const MAX_DURATION_DAYS: u32 = 14;

/// Durations strictly above this many days escalate to the urgent tier.
pub const PROLONGED_DURATION_DAYS: u32 = 7;

/// Default number of triage records kept per user when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Separator used when symptom sets are stored as a single string.
pub const SYMPTOM_LIST_SEPARATOR: &str = ", ";
