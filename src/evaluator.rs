//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_section,
    uniqueness_section, uppercase_section,
};
use crate::types::{EvaluationError, Rating, StrengthResult};

/// Criteria in reporting order. Each satisfied criterion adds one point.
const SECTIONS: [(&str, fn(&SecretString) -> SectionResult); 6] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
    ("uniqueness", uniqueness_section),
];

/// Evaluates password strength against the six fixed criteria.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthResult` with the rating, the score and one message per unmet
/// criterion, or `EvaluationError::Empty` for an empty password.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn evaluate(password: &SecretString) -> Result<StrengthResult, EvaluationError> {
    if password.expose_secret().is_empty() {
        return Err(EvaluationError::Empty);
    }

    let mut score: u8 = 0;
    let mut unmet_criteria = Vec::new();

    for (section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("criterion not met: {}", section_name);
                unmet_criteria.push(reason.to_string());
            }
            None => score += 1,
        }
    }

    Ok(StrengthResult {
        rating: Rating::from_score(score),
        score,
        unmet_criteria,
    })
}

/// Convenience wrapper for callers holding a plain string.
pub fn evaluate_str(password: &str) -> Result<StrengthResult, EvaluationError> {
    evaluate(&SecretString::new(password.to_string().into()))
}
