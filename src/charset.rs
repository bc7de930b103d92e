//! Character classes used for scoring and generation.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// The ASCII punctuation set counted as "special" characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

pub fn is_special(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Builds the generation universe: letters, digits, punctuation and optionally a space.
pub fn universe(include_spaces: bool) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();
    chars.extend(UPPERCASE.chars());
    chars.extend(LOWERCASE.chars());
    chars.extend(DIGITS.chars());
    chars.extend(PUNCTUATION.chars());
    if include_spaces {
        chars.push(' ');
    }
    chars
}
