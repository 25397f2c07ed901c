//! Input validation utilities.
//!
//! Tokens arrive from checklists, radio groups, query strings and CLI flags, each with its own
//! spelling habits. These helpers reduce them to one comparable form before they are matched
//! against the fixed vocabularies.

use crate::{TriageError, TriageResult};

/// Maximum accepted length of a single raw token.
const MAX_TOKEN_LEN: usize = 64;

/// Normalises a raw vocabulary token for comparison.
///
/// Trims the input, lowercases it, treats `_` and `-` as spaces and collapses runs of
/// whitespace, so `"Shortness_of-Breath "` and `"shortness of breath"` compare equal.
///
/// # Errors
///
/// Returns `TriageError::InvalidInput` if the token is empty, whitespace only, or longer than
/// the maximum token length.
pub fn normalise_token(input: &str) -> TriageResult<String> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(TriageError::InvalidInput("token cannot be empty".into()));
    }

    if trimmed.len() > MAX_TOKEN_LEN {
        return Err(TriageError::InvalidInput(format!(
            "token exceeds maximum length of {} characters",
            MAX_TOKEN_LEN
        )));
    }

    let spaced: String = trimmed
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    Ok(spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase())
}
