use std::{fmt, str::FromStr};
use thiserror::Error;

/// A normalized (lower case) e-mail address.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s.trim())
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        let (local, domain) = info.addr.split_once('@').ok_or(EmailAddressParseError)?;
        if local.is_empty() || domain.is_empty() {
            return Err(EmailAddressParseError);
        }
        Ok(Self(info.addr.to_lowercase()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_normalize() {
        let email: EmailAddress = " Marco.Polo@Venezia.IT ".parse().unwrap();
        assert_eq!("marco.polo@venezia.it", email.as_str());
    }

    #[test]
    fn parse_address_with_display_name() {
        let email: EmailAddress = r#""Marco" <marco@venezia.it>"#.parse().unwrap();
        assert_eq!("marco@venezia.it", email.as_str());
    }

    #[test]
    fn reject_invalid_addresses() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("marco".parse::<EmailAddress>().is_err());
        assert!("marco@".parse::<EmailAddress>().is_err());
    }
}
