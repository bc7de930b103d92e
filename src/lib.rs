//! Password quality toolkit
//!
//! Offline strength scoring, advisory suggestions and secure generation, plus an
//! online breach lookup that reveals only a 5-character hash prefix to the
//! remote service.
//!
//! # Features
//!
//! - `breach` (default): Enables the k-anonymity breach lookup
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-audit` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{evaluate, generate, suggest, GenerationPolicy};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let result = evaluate(&password).expect("non-empty password");
//! println!("Strength: {}", result.rating);
//! for hint in suggest(&password) {
//!     println!("- {}", hint);
//! }
//!
//! let generated = generate(GenerationPolicy::default());
//! ```

// Internal modules
mod advisor;
mod charset;
mod denylist;
mod evaluator;
mod generator;
mod sections;
mod types;

#[cfg(feature = "breach")]
pub mod breach;

// Public API
pub use advisor::{RECOMMENDED_LENGTH, suggest, suggest_with};
pub use charset::PUNCTUATION;
pub use denylist::{DEFAULT_PATTERNS, Denylist, DenylistError};
pub use evaluator::{evaluate, evaluate_str};
pub use generator::{DEFAULT_LENGTH, MIN_LENGTH, OsRandom, SecureRandomSource, generate, generate_with};
pub use types::{
    BreachResult, EvaluationError, GenerationPolicy, Rating, StrengthResult, password_from_bytes,
};

#[cfg(feature = "breach")]
pub use breach::{BreachChecker, BreachConfig, check_breach, check_breach_with};
