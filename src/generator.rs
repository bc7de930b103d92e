//! Secure password generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::universe;
use crate::types::GenerationPolicy;

/// Shortest length a policy may request.
pub const MIN_LENGTH: usize = 8;

/// Length substituted when a policy asks for fewer than [`MIN_LENGTH`] characters.
pub const DEFAULT_LENGTH: usize = 16;

/// Source of uniformly distributed choices.
///
/// Implementations must draw from a cryptographically secure generator.
pub trait SecureRandomSource {
    /// Picks one element uniformly, or `None` if `candidates` is empty.
    fn choice<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T>;
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandomSource for OsRandom {
    fn choice<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut OsRng)
    }
}

impl GenerationPolicy {
    /// Length actually used for generation.
    pub fn resolved_length(&self) -> usize {
        if self.length < MIN_LENGTH {
            DEFAULT_LENGTH
        } else {
            self.length
        }
    }
}

/// Generates a password with the operating system CSPRNG.
pub fn generate(policy: GenerationPolicy) -> SecretString {
    generate_with(policy, &mut OsRandom)
}

/// Generates a password drawing every position independently from `source`.
pub fn generate_with<R: SecureRandomSource>(policy: GenerationPolicy, source: &mut R) -> SecretString {
    let length = policy.resolved_length();
    if length != policy.length {
        #[cfg(feature = "tracing")]
        tracing::info!(
            "requested length {} is below the minimum of {}, using {}",
            policy.length,
            MIN_LENGTH,
            length
        );
    }

    let chars = universe(policy.include_spaces);
    let password: String = (0..length)
        .filter_map(|_| source.choice(&chars).copied())
        .collect();

    SecretString::new(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::PUNCTUATION;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    /// Walks the candidates in order, wrapping around.
    struct Cycle(usize);

    impl SecureRandomSource for Cycle {
        fn choice<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
            let picked = candidates.get(self.0 % candidates.len().max(1));
            self.0 += 1;
            picked
        }
    }

    fn in_base_universe(c: char) -> bool {
        c.is_ascii_alphanumeric() || PUNCTUATION.contains(c)
    }

    #[test]
    fn test_generate_exact_length() {
        let policy = GenerationPolicy { length: 16, include_spaces: false };
        for _ in 0..50 {
            let password = generate(policy);
            let pwd = password.expose_secret();
            assert_eq!(pwd.chars().count(), 16);
            assert!(pwd.chars().all(in_base_universe));
        }
    }

    #[test]
    fn test_generate_short_length_falls_back_to_default() {
        let policy = GenerationPolicy { length: 4, include_spaces: false };
        assert_eq!(policy.resolved_length(), DEFAULT_LENGTH);
        assert_eq!(generate(policy).expose_secret().chars().count(), 16);
    }

    #[test]
    fn test_generate_minimum_length_kept() {
        let policy = GenerationPolicy { length: MIN_LENGTH, include_spaces: false };
        assert_eq!(generate(policy).expose_secret().chars().count(), 8);

        let policy = GenerationPolicy { length: 64, include_spaces: true };
        assert_eq!(generate(policy).expose_secret().chars().count(), 64);
    }

    #[test]
    fn test_generate_with_spaces_covers_space() {
        let policy = GenerationPolicy { length: 95, include_spaces: true };
        let password = generate_with(policy, &mut Cycle(0));
        assert!(password.expose_secret().contains(' '));

        let policy = GenerationPolicy { length: 95, include_spaces: false };
        let password = generate_with(policy, &mut Cycle(0));
        assert!(!password.expose_secret().contains(' '));
    }

    #[test]
    fn test_generate_not_repeated() {
        let policy = GenerationPolicy::default();
        let first = generate(policy);
        let second = generate(policy);
        assert_ne!(first.expose_secret(), second.expose_secret());
    }

    #[test]
    fn test_generate_distribution_is_uniform() {
        let policy = GenerationPolicy { length: 16, include_spaces: false };
        let trials = 3000;
        let mut counts: HashMap<char, usize> = HashMap::new();
        for _ in 0..trials {
            for c in generate(policy).expose_secret().chars() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }

        let alphabet = universe(false);
        let expected = (trials * 16) as f64 / alphabet.len() as f64;
        assert_eq!(counts.len(), alphabet.len());
        for c in alphabet {
            let observed = counts.get(&c).copied().unwrap_or(0) as f64;
            assert!(
                observed > expected * 0.6 && observed < expected * 1.4,
                "character {:?} drawn {} times, expected about {:.0}",
                c,
                observed,
                expected
            );
        }
    }
}
