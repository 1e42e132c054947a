use std::{ops::Deref, sync::Arc};

use rocket::{
    self,
    http::{Cookie, SameSite, Status},
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};
use vg_core::{
    entities::{Id, User},
    gateways::weather::WeatherGateway,
    repositories::UserRepo,
    usecases::{self, Error as ParameterError},
};

use crate::web::jwt;

pub const COOKIE_USER_KEY: &str = "vg-user-id";
pub const COOKIE_CLIENT_KEY: &str = "vg-client-id";

type Result<T> = std::result::Result<T, ParameterError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    match auth_header_val.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}

/// The (optional) session of the requesting user.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    user_id: Option<Id>,
}

impl Auth {
    pub fn try_user_id(&self) -> Option<&Id> {
        self.user_id.as_ref()
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// The signed-in user, if any.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<Option<User>> {
        self.user_id
            .as_ref()
            .map(|id| usecases::get_user(repo, id))
            .transpose()
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn user_id_from_cookie(request: &Request) -> Option<Id> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .map(|cookie| Id::from(cookie.value()))
            .filter(Id::is_valid)
    }

    async fn user_id_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<Id> {
        let tokens = request.guard::<&State<jwt::SessionTokens>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| tokens.verify(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);

        let mut user_id = None;
        if cfg!(feature = "cookies") {
            user_id = Self::user_id_from_cookie(request);
        }
        if cfg!(feature = "jwt") && user_id.is_none() {
            user_id = Self::user_id_from_jwt_in_header(request, &bearer_tokens).await;
        }

        Outcome::Success(Self {
            bearer_tokens,
            user_id,
        })
    }
}

/// A signed-in user.
#[derive(Debug)]
pub struct Account(Id);

impl Account {
    pub fn user_id(&self) -> &Id {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.user_id {
            Some(user_id) => Outcome::Success(Account(user_id)),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// Identifies the local storage of a client.
///
/// A new id is issued if the client doesn't send one.
#[derive(Debug)]
pub struct ClientId(Id);

impl Deref for ClientId {
    type Target = Id;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientId {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cookies = request.cookies();
        let existing = cookies
            .get_private(COOKIE_CLIENT_KEY)
            .map(|cookie| Id::from(cookie.value()))
            .filter(Id::is_valid);
        let client_id = match existing {
            Some(client_id) => client_id,
            None => {
                let client_id = Id::new();
                debug!("Issuing new client id {client_id}");
                cookies.add_private(
                    Cookie::build((COOKIE_CLIENT_KEY, client_id.to_string()))
                        .same_site(SameSite::Lax)
                        .permanent(),
                );
                client_id
            }
        };
        Outcome::Success(ClientId(client_id))
    }
}

pub struct Weather(pub Arc<dyn WeatherGateway + Send + Sync>);

pub struct Version(pub &'static str);
