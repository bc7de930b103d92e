//! Advisory suggestions - a second, independent set of hardening hints.
//!
//! Overlaps with the strength criteria on purpose; both are shown to the user.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::is_special;
use crate::denylist::Denylist;

pub const RECOMMENDED_LENGTH: usize = 12;

/// Returns suggestions using the default denylist.
pub fn suggest(password: &SecretString) -> Vec<String> {
    suggest_with(password, &Denylist::default())
}

/// Returns suggestions, flagging any substring found in `denylist`.
pub fn suggest_with(password: &SecretString, denylist: &Denylist) -> Vec<String> {
    let pwd = password.expose_secret();
    let mut suggestions = Vec::new();

    if !pwd.chars().any(is_special) {
        suggestions.push("Add punctuation or symbols (e.g. ! @ # $) to your password.".to_string());
    }

    if pwd.chars().count() < RECOMMENDED_LENGTH {
        suggestions.push(format!(
            "Use at least {} characters; longer passwords are harder to crack.",
            RECOMMENDED_LENGTH
        ));
    }

    if let Some(pattern) = denylist.find_in(pwd) {
        suggestions.push(format!(
            "Avoid common words and sequences such as \"{}\".",
            pattern
        ));
    }

    if !pwd.chars().any(|c| c.is_uppercase()) {
        suggestions.push("Mix in some uppercase letters.".to_string());
    }

    if !pwd.chars().any(|c| c.is_lowercase()) {
        suggestions.push("Mix in some lowercase letters.".to_string());
    }

    suggestions
}
