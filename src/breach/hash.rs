//! SHA-1 digest split for the k-anonymity range query.

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

pub const PREFIX_LEN: usize = 5;

/// Uppercase hex digest split into the part sent to the service and the part
/// kept locally.
pub struct HashParts {
    pub prefix: String,
    pub suffix: String,
}

impl std::fmt::Debug for HashParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashParts")
            .field("prefix", &self.prefix)
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}

pub fn hash_parts(password: &SecretString) -> HashParts {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let mut hex = hex::encode_upper(digest);
    let suffix = hex.split_off(PREFIX_LEN);
    HashParts { prefix: hex, suffix }
}
