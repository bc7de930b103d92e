//! Parsing of the range response body.
//!
//! The body holds one `SUFFIX:COUNT` entry per line for every known hash
//! sharing the queried prefix.

/// Returns the trimmed count for `suffix`, if listed.
///
/// Entries with a count of `0` are padding decoys and never match.
pub fn find_suffix(body: &str, suffix: &str) -> Option<String> {
    body.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(hash_suffix, _)| hash_suffix.trim().eq_ignore_ascii_case(suffix))
        .map(|(_, count)| count.trim().to_string())
        .filter(|count| count != "0")
}
