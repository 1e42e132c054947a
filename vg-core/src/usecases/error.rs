use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The comment must contain at least {min_len} characters")]
    CommentTooShort { min_len: usize },
    #[error("Invalid price tier")]
    PriceTier,
    #[error("Unable to load weather data")]
    WeatherUnavailable,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<vg_entities::password::PasswordError> for Error {
    fn from(err: vg_entities::password::PasswordError) -> Self {
        use vg_entities::password::PasswordError;
        match err {
            PasswordError::TooShort => Self::Password,
            PasswordError::Hashing(_) => Self::Repo(repositories::Error::Other(err.into())),
        }
    }
}

impl From<vg_entities::email::EmailAddressParseError> for Error {
    fn from(_: vg_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<vg_entities::review::ReviewRatingOutOfRange> for Error {
    fn from(_: vg_entities::review::ReviewRatingOutOfRange) -> Self {
        Self::RatingValue
    }
}
