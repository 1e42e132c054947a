use std::collections::HashMap;

use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use vg_core::entities::Id;

use signer::Signer;

const SESSION_LIFETIME: Duration = Duration::hours(24);

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    /// The signed-in user
    sub: String,
    /// Unix timestamp in seconds
    exp: i64,
}

/// Bearer tokens handed out on sign-in.
///
/// Tokens are signed with a secret that only lives as long as the
/// server process. Tokens presented on sign-out stay revoked until
/// they would have expired anyway.
pub struct SessionTokens {
    signer: Signer,
    revoked: Mutex<HashMap<String, i64>>,
}

impl SessionTokens {
    pub fn new() -> Self {
        Self {
            signer: Signer::with_random_secret(),
            revoked: Mutex::new(HashMap::new()),
        }
    }

    pub fn issue(&self, user_id: &Id) -> Result<String> {
        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp: (OffsetDateTime::now_utc() + SESSION_LIFETIME).unix_timestamp(),
        };
        self.signer.sign(&claims)
    }

    pub fn verify(&self, token: &str) -> Result<Id> {
        if self.revoked.lock().contains_key(token) {
            return Err(anyhow!("Session token has been revoked"));
        }
        let SessionClaims { sub, .. } = self.signer.verify(token)?;
        Ok(sub.into())
    }

    /// Tokens that cannot be verified are ignored.
    pub fn revoke(&self, token: &str) {
        let Ok(claims) = self.signer.verify(token) else {
            log::debug!("Ignoring revocation of an invalid session token");
            return;
        };
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let mut revoked = self.revoked.lock();
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(token.to_owned(), claims.exp);
    }

    #[cfg(test)]
    fn revoked_count(&self) -> usize {
        self.revoked.lock().len()
    }
}

impl Default for SessionTokens {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jwt")]
mod signer {
    use super::{Result, SessionClaims};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

    pub struct Signer {
        encoding: EncodingKey,
        decoding: DecodingKey,
    }

    impl Signer {
        pub fn with_random_secret() -> Self {
            let secret = STANDARD.encode(rand::random::<[u8; 32]>());
            Self {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }
        }

        pub fn sign(&self, claims: &SessionClaims) -> Result<String> {
            Ok(jsonwebtoken::encode(
                &Header::default(),
                claims,
                &self.encoding,
            )?)
        }

        pub fn verify(&self, token: &str) -> Result<SessionClaims> {
            let data = jsonwebtoken::decode(token, &self.decoding, &Validation::default())?;
            Ok(data.claims)
        }
    }
}

#[cfg(not(feature = "jwt"))]
mod signer {
    use super::{Result, SessionClaims};
    use anyhow::bail;

    pub struct Signer;

    impl Signer {
        pub fn with_random_secret() -> Self {
            Self
        }

        pub fn sign(&self, _: &SessionClaims) -> Result<String> {
            bail!("Bearer tokens are not supported")
        }

        pub fn verify(&self, _: &str) -> Result<SessionClaims> {
            bail!("Bearer tokens are not supported")
        }
    }
}

#[cfg(test)]
#[cfg(feature = "jwt")]
mod tests {
    use super::*;

    #[test]
    fn issued_token_identifies_user() {
        let tokens = SessionTokens::new();
        let user_id = Id::new();
        let token = tokens.issue(&user_id).unwrap();
        assert_eq!(user_id, tokens.verify(&token).unwrap());
    }

    #[test]
    fn revoked_token_is_rejected() {
        let tokens = SessionTokens::new();
        let token = tokens.issue(&Id::new()).unwrap();
        tokens.revoke(&token);
        assert!(tokens.verify(&token).is_err());
        assert_eq!(1, tokens.revoked_count());
    }

    #[test]
    fn foreign_token_is_rejected() {
        let token = SessionTokens::new().issue(&Id::new()).unwrap();
        assert!(SessionTokens::new().verify(&token).is_err());
    }

    #[test]
    fn invalid_tokens_are_not_remembered() {
        let tokens = SessionTokens::new();
        tokens.revoke("not-a-token");
        let foreign = SessionTokens::new().issue(&Id::new()).unwrap();
        tokens.revoke(&foreign);
        assert_eq!(0, tokens.revoked_count());
    }
}
