//! Character variety sections - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::is_special;

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_uppercase()) {
        return Some("Password should contain at least one uppercase letter.");
    }
    None
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_lowercase()) {
        return Some("Password should contain at least one lowercase letter.");
    }
    None
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Password should contain at least one digit.");
    }
    None
}

/// Only characters from the fixed punctuation set count as special.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(is_special) {
        return Some("Password should contain at least one special character.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let reason = uppercase_section(&secret("lowercase123!"));
        assert!(reason.is_some_and(|r| r.contains("uppercase")));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let reason = lowercase_section(&secret("UPPERCASE123!"));
        assert!(reason.is_some_and(|r| r.contains("lowercase")));
    }

    #[test]
    fn test_variety_missing_digit() {
        let reason = digit_section(&secret("NoNumbers!"));
        assert!(reason.is_some_and(|r| r.contains("digit")));
    }

    #[test]
    fn test_variety_missing_special() {
        let reason = special_section(&secret("NoSpecial123"));
        assert!(reason.is_some_and(|r| r.contains("special")));
    }

    #[test]
    fn test_space_is_not_special() {
        assert!(special_section(&secret("has space")).is_some());
    }

    #[test]
    fn test_variety_all_categories() {
        let pwd = secret("HasAll123!@#");
        assert_eq!(uppercase_section(&pwd), None);
        assert_eq!(lowercase_section(&pwd), None);
        assert_eq!(digit_section(&pwd), None);
        assert_eq!(special_section(&pwd), None);
    }
}
