//! Value types shared by the evaluator, generator and breach checker.

use std::fmt;

use secrecy::SecretString;
use thiserror::Error;

/// Errors returned when a password cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Password must not be empty")]
    Empty,
    #[error("Invalid password input: {0}")]
    InvalidInput(String),
}

/// Coarse strength rating derived from the criteria score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Weak,
    Moderate,
    Strong,
}

impl Rating {
    /// Maps a score in `0..=6` to a rating.
    ///
    /// Only a perfect score is `Strong`; four or five satisfied criteria are
    /// `Moderate`; anything lower is `Weak`.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 6 => Rating::Strong,
            4 | 5 => Rating::Moderate,
            _ => Rating::Weak,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Weak => write!(f, "Weak"),
            Rating::Moderate => write!(f, "Moderate"),
            Rating::Strong => write!(f, "Strong"),
        }
    }
}

/// Outcome of [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub rating: Rating,
    /// Number of satisfied criteria.
    pub score: u8,
    /// One message per unmet criterion, in evaluation order.
    pub unmet_criteria: Vec<String>,
}

/// Outcome of a breach lookup.
///
/// `detail` carries the breach count when `breached` is true, otherwise a
/// status or error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachResult {
    pub breached: bool,
    pub detail: String,
}

impl BreachResult {
    pub fn found(count: impl Into<String>) -> Self {
        Self {
            breached: true,
            detail: count.into(),
        }
    }

    pub fn not_breached(detail: impl Into<String>) -> Self {
        Self {
            breached: false,
            detail: detail.into(),
        }
    }

    /// Parsed occurrence count, if the password was found.
    pub fn count(&self) -> Option<u64> {
        if self.breached {
            self.detail.parse().ok()
        } else {
            None
        }
    }
}

/// Desired shape of a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_spaces: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: crate::generator::DEFAULT_LENGTH,
            include_spaces: false,
        }
    }
}

/// Builds a password from raw bytes, rejecting anything that is not UTF-8.
pub fn password_from_bytes(bytes: &[u8]) -> Result<SecretString, EvaluationError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| EvaluationError::InvalidInput(format!("not valid UTF-8: {}", e)))?;
    Ok(SecretString::new(text.to_string().into()))
}
