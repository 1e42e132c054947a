use std::{fmt::Display, result};

use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, delete, get,
    http::{Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes, Catcher, Request, Route, State,
};
use vg_boundary::{self as json, Error as JsonErrorResponse};
use vg_catalog::StaticCatalog;
use vg_core::{
    entities::{ItemId, ItemKind},
    usecases::{self, Error as ParameterError},
};
use vg_gateways::local_storage::LocalStorage;

use super::guards::*;
use crate::web::{jwt, sqlite, weather_cache::WeatherCache};

mod catalog;
mod error;
mod favorites;
mod reviews;
mod search;
mod users;
mod util;
mod weather;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   catalog   --- //
        catalog::get_locations,
        catalog::get_location,
        catalog::get_routes,
        catalog::get_route,
        catalog::get_recommendations,
        catalog::get_recommendation,
        catalog::get_categories,
        // ---   search   --- //
        search::get_search,
        // ---   favorites   --- //
        favorites::get_favorites,
        favorites::get_favorites_count,
        favorites::get_favorite_status,
        favorites::post_toggle_favorite,
        favorites::put_favorite,
        favorites::delete_favorite,
        favorites::delete_all_favorites,
        favorites::get_install_prompt,
        favorites::post_dismiss_install_prompt,
        // ---   users   --- //
        users::post_user,
        users::post_login,
        users::post_logout,
        users::get_current_user,
        // ---   reviews   --- //
        reviews::get_reviews,
        reviews::post_review,
        reviews::delete_review,
        // ---   weather   --- //
        weather::get_weather,
        util::get_version,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

/// Failed request guards and unmatched requests also answer with a JSON error.
#[catch(default)]
fn default_catcher(status: Status, _: &Request<'_>) -> ApiError {
    ApiError::OtherWithStatus(anyhow::anyhow!(status.reason_lossy()), status)
}

/// Parse the plural (`locations`) or singular (`location`) name of a catalog.
fn parse_item_kind(kind: &str) -> result::Result<ItemKind, ApiError> {
    kind.parse()
        .map_err(|_| ApiError::bad_request(format!("Unknown item type '{kind}'")))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
