use std::str::FromStr;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// The bcrypt hash of a password, never the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("A password needs at least {MIN_PASSWORD_LEN} characters")]
    TooShort,
    #[error("Unable to hash the password: {0}")]
    Hashing(#[from] pwhash::error::Error),
}

impl Password {
    pub fn hash(plain: &str) -> Result<Self, PasswordError> {
        if plain.chars().count() < MIN_PASSWORD_LEN {
            return Err(PasswordError::TooShort);
        }
        let hash = pwhash::bcrypt::hash(plain)?;
        Ok(Self { hash })
    }

    pub fn verify(&self, plain: &str) -> bool {
        pwhash::bcrypt::verify(plain, &self.hash)
    }
}

impl FromStr for Password {
    type Err = PasswordError;

    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        Self::hash(plain)
    }
}

/// Restores a stored hash.
impl From<String> for Password {
    fn from(hash: String) -> Self {
        Self { hash }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}
