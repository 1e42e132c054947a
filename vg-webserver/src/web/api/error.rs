use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;
pub use vg_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn bad_request(message: String) -> Self {
        Self::OtherWithStatus(anyhow!(message), Status::BadRequest)
    }
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        ParameterError::from(err).into()
    }
}

impl From<vg_core::entities::EmailAddressParseError> for Error {
    fn from(err: vg_core::entities::EmailAddressParseError) -> Self {
        ParameterError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => {
                let status = match err {
                    ParameterError::Credentials | ParameterError::Unauthorized => {
                        Status::Unauthorized
                    }
                    ParameterError::Forbidden => Status::Forbidden,
                    ParameterError::WeatherUnavailable => Status::ServiceUnavailable,
                    ParameterError::Repo(RepoError::NotFound) => Status::NotFound,
                    ParameterError::Repo(RepoError::AlreadyExists) => Status::Conflict,
                    ParameterError::Repo(ref err) => {
                        error!("Repository error: {err}");
                        Status::InternalServerError
                    }
                    _ => Status::BadRequest,
                };
                json_error_response(req, &err, status)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
