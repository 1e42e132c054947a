mod catalog;
mod create_new_user;
mod error;
mod favorites;
mod install_prompt;
mod login;
mod reviews;
mod search;
mod weather;

#[cfg(test)]
pub mod tests;

pub use self::{
    catalog::*, create_new_user::*, error::Error, favorites::*, install_prompt::*, login::*,
    reviews::*, search::*, weather::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_user<R>(repo: &R, user_id: &Id) -> Result<User>
where
    R: UserRepo,
{
    // A session of a deleted user is no longer valid
    repo.get_user(user_id).map_err(|err| match err {
        crate::repositories::Error::NotFound => Error::Unauthorized,
        err => err.into(),
    })
}
