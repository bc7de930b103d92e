//! Uniqueness section - checks the number of distinct characters.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_UNIQUE: usize = 10;

pub fn uniqueness_section(password: &SecretString) -> SectionResult {
    let unique_chars: HashSet<char> = password.expose_secret().chars().collect();
    if unique_chars.len() < MIN_UNIQUE {
        return Some("Password should contain at least 10 unique characters.");
    }
    None
}
