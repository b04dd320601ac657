//! Password generation, hashing, and verification
//!
//! Hashes are salted SHA-256 digests stored as `"{salt}${digest}"`; both
//! halves are hex, so `$` never appears inside either component.

use rand::seq::SliceRandom;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::DomainError;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*";

/// Minimum password length: one character per required class
const MIN_PASSWORD_LENGTH: usize = 4;

const SALT_BYTES: usize = 16;

/// Generate a random password of the requested length
///
/// The result always contains at least one uppercase letter, one lowercase
/// letter, one digit, and one symbol; the full sequence is shuffled with a
/// cryptographically secure RNG so the class positions are unpredictable.
pub fn generate_password(length: usize) -> Result<String, DomainError> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(DomainError::validation(format!(
            "Password length must be at least {}",
            MIN_PASSWORD_LENGTH
        )));
    }

    let mut rng = rand::thread_rng();
    let mut password = Vec::with_capacity(length);

    for class in [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS] {
        password.push(pick(class, &mut rng));
    }

    let alphabet: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();

    for _ in 0..length - MIN_PASSWORD_LENGTH {
        password.push(pick(&alphabet, &mut rng));
    }

    password.shuffle(&mut rng);

    String::from_utf8(password)
        .map_err(|e| DomainError::internal(format!("Generated non-UTF-8 password: {}", e)))
}

fn pick(alphabet: &[u8], rng: &mut impl rand::Rng) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> String {
    let mut salt_bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt = hex::encode(salt_bytes);

    format!("{}${}", salt, digest(password, &salt))
}

/// Verify a password against a `"{salt}${digest}"` string
///
/// Malformed input fails closed: the result is false, never an error, so
/// the stored format is not leaked through the failure mode.
pub fn verify_password(password: &str, combined: &str) -> bool {
    let Some((salt, expected)) = combined.split_once('$') else {
        return false;
    };

    constant_time_eq(&digest(password, salt), expected)
}

fn digest(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;

    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_class(password: &str, class: &[u8]) -> bool {
        password.bytes().any(|b| class.contains(&b))
    }

    #[test]
    fn test_generate_password_default_length() {
        let password = generate_password(12).unwrap();

        assert_eq!(password.len(), 12);
        assert!(has_class(&password, UPPERCASE));
        assert!(has_class(&password, LOWERCASE));
        assert!(has_class(&password, DIGITS));
        assert!(has_class(&password, SYMBOLS));
    }

    #[test]
    fn test_generate_password_custom_length() {
        let password = generate_password(16).unwrap();
        assert_eq!(password.len(), 16);
    }

    #[test]
    fn test_generate_password_minimum_length() {
        let password = generate_password(4).unwrap();

        assert_eq!(password.len(), 4);
        assert!(has_class(&password, UPPERCASE));
        assert!(has_class(&password, LOWERCASE));
        assert!(has_class(&password, DIGITS));
        assert!(has_class(&password, SYMBOLS));
    }

    #[test]
    fn test_generate_password_too_short() {
        assert!(matches!(
            generate_password(3),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_hash_and_verify_password() {
        let password = "testpassword123";
        let hashed = hash_password(password);

        assert!(verify_password(password, &hashed));
        assert!(!verify_password("wrongpassword", &hashed));
    }

    #[test]
    fn test_hash_format() {
        let hashed = hash_password("secret");
        let (salt, digest) = hashed.split_once('$').unwrap();

        assert_eq!(salt.len(), SALT_BYTES * 2);
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_hashes_use_fresh_salts() {
        let first = hash_password("secret");
        let second = hash_password("secret");

        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_verify_malformed_hash() {
        assert!(!verify_password("password", "invalid_hash"));
        assert!(!verify_password("password", ""));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("hello", "hello"));
        assert!(!constant_time_eq("hello", "world"));
        assert!(!constant_time_eq("hello", "hell"));
    }
}
