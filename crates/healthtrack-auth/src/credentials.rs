//! Login credentials issued to new health workers.

use rand::Rng;
use serde::{Deserialize, Serialize};

const PASSWORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// What the admin hands to a newly registered health worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCredentials {
    pub username: String,
    pub password: String,
    /// Account email; the username alone also works for sign-in.
    pub email: String,
}

/// `{prefix}{n:03}` where `n` is one past the number already registered.
pub fn generate_username(prefix: &str, registered: usize) -> String {
    format!("{prefix}{:03}", registered + 1)
}

/// Random lowercase alphanumeric password.
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

pub fn account_email(username: &str, domain: &str) -> String {
    format!("{username}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn usernames_are_zero_padded() {
        assert_eq!(generate_username("health", 0), "health001");
        assert_eq!(generate_username("health", 41), "health042");
        assert_eq!(generate_username("awc", 999), "awc1000");
    }

    #[test]
    fn passwords_use_the_lowercase_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = generate_password(&mut rng, 8);
        assert_eq!(password.len(), 8);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn seeded_passwords_repeat() {
        let a = generate_password(&mut StdRng::seed_from_u64(1), 8);
        let b = generate_password(&mut StdRng::seed_from_u64(1), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn email_joins_username_and_domain() {
        assert_eq!(
            account_email("health001", "healthtrack.local"),
            "health001@healthtrack.local"
        );
    }
}
