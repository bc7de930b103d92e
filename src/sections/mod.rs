//! Strength criteria sections
//!
//! Each section checks one criterion and reports a fixed message when unmet.

mod length;
mod uniqueness;
mod variety;

pub use length::length_section;
pub use uniqueness::uniqueness_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Criterion not met
/// - `None` - Criterion met
pub type SectionResult = Option<&'static str>;
