//! Shared-secret verification.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The configured API key.
///
/// Only the SHA-256 digest of the secret is compared against, so the
/// comparison time depends on neither the content nor the length of the
/// provided key.
#[derive(Clone)]
pub struct ApiKey {
    digest: [u8; 32],
}

impl ApiKey {
    /// Create a verifier for the given secret.
    pub fn new(secret: &SecretString) -> Self {
        Self {
            digest: digest(secret.expose_secret()),
        }
    }

    /// Check a key supplied by a caller.
    pub fn verify(&self, provided: &str) -> bool {
        self.digest.ct_eq(&digest(provided)).into()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

fn digest(value: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(value.as_bytes()));
    out
}
