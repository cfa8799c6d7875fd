use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const PIN_LENGTH: usize = 4;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("unknown credential format: {0}")]
    UnknownFormat(String),
    #[error("malformed credential hash")]
    Malformed,
    #[error("hashing failed")]
    Hashing(argon2::password_hash::Error),
}

/// Stored credential, dispatched on its explicit format tag.
/// `argon2:` is the only format ever written; `sha256:` rows predate
/// salting and are verified until their owners next change PINs.
enum StoredCredential<'a> {
    Argon2(&'a str),
    LegacySha256(&'a str),
}

impl<'a> StoredCredential<'a> {
    fn parse(stored: &'a str) -> Result<Self, CredentialError> {
        let (tag, rest) = stored.split_once(':').ok_or(CredentialError::Malformed)?;
        match tag {
            "argon2" => Ok(StoredCredential::Argon2(rest)),
            "sha256" => Ok(StoredCredential::LegacySha256(rest)),
            other => Err(CredentialError::UnknownFormat(other.to_string())),
        }
    }
}

pub fn pin_is_valid(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

/// Salted argon2 hash, written with the current format tag.
pub fn hash_pin(pin: &str) -> Result<String, CredentialError> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map_err(CredentialError::Hashing)?;
    Ok(format!("argon2:{hash}"))
}

pub fn verify_pin(pin: &str, stored: &str) -> Result<bool, CredentialError> {
    match StoredCredential::parse(stored)? {
        StoredCredential::Argon2(phc) => {
            let parsed = PasswordHash::new(phc).map_err(|_| CredentialError::Malformed)?;
            Ok(Argon2::default()
                .verify_password(pin.as_bytes(), &parsed)
                .is_ok())
        }
        StoredCredential::LegacySha256(digest) => {
            let computed = hex::encode(Sha256::digest(pin.as_bytes()));
            Ok(computed.eq_ignore_ascii_case(digest))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_hash(pin: &str) -> String {
        format!("sha256:{}", hex::encode(Sha256::digest(pin.as_bytes())))
    }

    #[test]
    fn pin_must_be_exactly_four_digits() {
        assert!(pin_is_valid("1234"));
        assert!(pin_is_valid("0000"));
        assert!(!pin_is_valid("123"));
        assert!(!pin_is_valid("12345"));
        assert!(!pin_is_valid("12a4"));
        assert!(!pin_is_valid("12 4"));
        assert!(!pin_is_valid(""));
    }

    #[test]
    fn argon2_round_trip() {
        let stored = hash_pin("4821").unwrap();
        assert!(stored.starts_with("argon2:$argon2"));
        assert!(verify_pin("4821", &stored).unwrap());
        assert!(!verify_pin("4822", &stored).unwrap());
    }

    #[test]
    fn salted_hashes_differ_per_call() {
        assert_ne!(hash_pin("4821").unwrap(), hash_pin("4821").unwrap());
    }

    #[test]
    fn legacy_sha256_verifies() {
        let stored = legacy_hash("1234");
        assert!(verify_pin("1234", &stored).unwrap());
        assert!(!verify_pin("4321", &stored).unwrap());
    }

    #[test]
    fn legacy_comparison_ignores_hex_case() {
        let stored = legacy_hash("1234").to_uppercase().replace("SHA256", "sha256");
        assert!(verify_pin("1234", &stored).unwrap());
    }

    #[test]
    fn unknown_tag_is_an_error_not_a_mismatch() {
        assert!(matches!(
            verify_pin("1234", "bcrypt:whatever"),
            Err(CredentialError::UnknownFormat(_))
        ));
    }

    #[test]
    fn untagged_value_is_malformed() {
        assert!(matches!(
            verify_pin("1234", "deadbeef"),
            Err(CredentialError::Malformed)
        ));
    }
}
