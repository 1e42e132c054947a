use crate::{email::*, id::*, password::*};

/// Name that is shown for users without a display name.
pub const ANONYMOUS_USER_NAME: &str = "Anonymous";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    pub email        : EmailAddress,
    pub display_name : Option<String>,
    pub password     : Password,
}

impl User {
    pub fn public_name(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_USER_NAME)
    }
}
