use healthtrack_auth::{generate_password, generate_username, PasswordHash};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn username_keeps_prefix_and_number(prefix in "[a-z]{1,8}", registered in 0usize..5000) {
        let name = generate_username(&prefix, registered);
        prop_assert!(name.starts_with(&prefix));
        let number: usize = name[prefix.len()..].parse().unwrap();
        prop_assert_eq!(number, registered + 1);
        prop_assert!(name.len() >= prefix.len() + 3);
    }

    #[test]
    fn password_has_requested_length_and_alphabet(seed in any::<u64>(), length in 1usize..32) {
        let password = generate_password(&mut StdRng::seed_from_u64(seed), length);
        prop_assert_eq!(password.chars().count(), length);
        prop_assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn hash_verifies_exactly_its_password(password in ".{0,24}", other in ".{0,24}") {
        let hash = PasswordHash::new(&password);
        prop_assert!(hash.verify(&password));
        prop_assert_eq!(hash.verify(&other), password == other);
    }
}
