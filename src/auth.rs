//! Email and password checks, password generation, and the password hashing
//! boundary.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::error::{Result, UtilError};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_ATTEMPTS: usize = 1_000;
pub const DEFAULT_HASH_COST: u32 = 10;

const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+";
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// True when `email` is well formed, has exactly one `@`, and its domain
/// equals `target_domain` ignoring case.
pub fn validate_domain(email: &str, target_domain: &str) -> bool {
    if !is_valid_email(email) {
        return false;
    }
    match email.split_once('@') {
        Some((_, domain)) if !domain.contains('@') => domain.eq_ignore_ascii_case(target_domain),
        _ => false,
    }
}

/// Requires an uppercase letter, a lowercase letter, a digit, a special
/// character, and at least `min_length` characters.
pub fn is_strong_password(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Random password that passes [`is_strong_password`] at the default minimum.
pub fn generate_random_password(length: usize) -> Result<String> {
    generate_random_password_with(&mut rand::thread_rng(), length, MAX_PASSWORD_ATTEMPTS)
}

/// Samples candidates until one is strong, giving up after `max_attempts`.
///
/// Lengths below [`DEFAULT_MIN_PASSWORD_LENGTH`] can never pass and fail
/// without sampling.
pub fn generate_random_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    max_attempts: usize,
) -> Result<String> {
    if length < DEFAULT_MIN_PASSWORD_LENGTH {
        return Err(UtilError::PasswordGeneration { length, attempts: 0 });
    }

    for _ in 0..max_attempts {
        let candidate: String = (0..length)
            .filter_map(|_| PASSWORD_CHARSET.choose(&mut *rng).map(|b| *b as char))
            .collect();
        if is_strong_password(&candidate, DEFAULT_MIN_PASSWORD_LENGTH) {
            return Ok(candidate);
        }
    }
    Err(UtilError::PasswordGeneration {
        length,
        attempts: max_attempts,
    })
}

pub fn has_role<S: AsRef<str>>(user_roles: &[S], required_role: &str) -> bool {
    user_roles.iter().any(|r| r.as_ref() == required_role)
}

/// Random RFC 4122 version 4 UUID in hyphenated lowercase form.
pub fn uuid_v4() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Salted one-way password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String>;
    async fn compare(&self, password: &str, hashed: &str) -> Result<bool>;
}

/// bcrypt at a fixed cost. Work runs on tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    async fn compare(&self, password: &str, hashed: &str) -> Result<bool> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
        Ok(matches)
    }
}

pub async fn hash_password(password: &str) -> Result<String> {
    BcryptPasswordHasher::default().hash(password).await
}

pub async fn compare_password(password: &str, hashed: &str) -> Result<bool> {
    BcryptPasswordHasher::default().compare(password, hashed).await
}
