//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into core services, so request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::{TriageError, TriageResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    history_limit: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(history_limit: usize) -> TriageResult<Self> {
        if history_limit == 0 {
            return Err(TriageError::InvalidInput(
                "history_limit must be at least 1".into(),
            ));
        }

        Ok(Self { history_limit })
    }

    /// Maximum number of triage records kept per user.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Parse the per-user history limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `DEFAULT_HISTORY_LIMIT`.
pub fn history_limit_from_env_value(value: Option<String>) -> TriageResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value
        .map(|v| {
            v.parse::<usize>().map_err(|_| {
                TriageError::InvalidInput(format!("history limit is not a whole number: {}", v))
            })
        })
        .transpose()?;

    Ok(parsed.unwrap_or(DEFAULT_HISTORY_LIMIT))
}
