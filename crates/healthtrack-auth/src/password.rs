//! Salted password digests.

use rand::RngCore;

/// Context string for deriving the per-account hashing key.
const KEY_CONTEXT: &str = "healthtrack 2024-06 account password v1";

/// A password digest plus the random salt it was derived with.
#[derive(Clone)]
pub struct PasswordHash {
    salt: [u8; 16],
    digest: blake3::Hash,
}

impl PasswordHash {
    /// Hash `password` under a fresh random salt.
    pub fn new(password: &str) -> Self {
        let mut salt = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        Self {
            digest: digest(&salt, password),
            salt,
        }
    }

    /// Constant-time comparison against a candidate password.
    pub fn verify(&self, password: &str) -> bool {
        self.digest == digest(&self.salt, password)
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

fn digest(salt: &[u8; 16], password: &str) -> blake3::Hash {
    let key = blake3::derive_key(KEY_CONTEXT, salt);
    blake3::keyed_hash(&key, password.as_bytes())
}
