//! Denylist of common password substrings
//!
//! Holds the fragments the advisory suggester flags. The built-in set can be
//! extended from a file passed explicitly by the caller.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Substrings flagged out of the box.
pub const DEFAULT_PATTERNS: [&str; 4] = ["password", "123", "qwerty", "letmein"];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of substrings that should not appear in a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    patterns: Vec<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Denylist {
    /// Adds patterns, lowercased; blanks and duplicates are skipped.
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if !pattern.is_empty() && !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
    }

    /// Builds the default denylist extended with one pattern per line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut denylist = Self::default();
        denylist.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} patterns from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the first pattern contained in `password`, ignoring case.
    pub fn find_in(&self, password: &str) -> Option<&str> {
        let lower = password.to_lowercase();
        self.patterns
            .iter()
            .find(|p| lower.contains(p.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_patterns() {
        let denylist = Denylist::default();
        assert_eq!(denylist.len(), 4);
        assert_eq!(denylist.find_in("MyPassWord!"), Some("password"));
        assert_eq!(denylist.find_in("abc123def"), Some("123"));
        assert_eq!(denylist.find_in("QWERTYuiop"), Some("qwerty"));
        assert_eq!(denylist.find_in("LetMeIn2024"), Some("letmein"));
        assert_eq!(denylist.find_in("Tr0ub4dor&3"), None);
    }

    #[test]
    fn test_extend_skips_blanks_and_duplicates() {
        let mut denylist = Denylist::default();
        denylist.extend(["  ", "Dragon", "qwerty", "dragon"]);
        assert_eq!(denylist.len(), 5);
        assert_eq!(denylist.find_in("xxDRAGONxx"), Some("dragon"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Denylist::from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "\n  \n").expect("Failed to write");

        let result = Denylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "monkey").expect("Failed to write");
        writeln!(temp_file, "Sunshine").expect("Failed to write");

        let denylist = Denylist::from_path(temp_file.path()).unwrap();
        assert_eq!(denylist.len(), 6);
        assert_eq!(denylist.find_in("SUNSHINE!1"), Some("sunshine"));
        assert_eq!(denylist.find_in("letmein"), Some("letmein"));
    }
}
