use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::InvalidCatalogEntry;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Location,
    Route,
    Recommendation,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Free,
    Budget,
    Premium,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

// The catalog structs are used both for parsing the bundled
// catalog files and as API responses. Derived fields are
// never read.

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id          : u32,
    pub name        : String,
    pub category    : String,
    pub price       : PriceTier,
    #[serde(default, skip_deserializing)]
    pub price_label : String,
    pub lat         : f64,
    pub lng         : f64,
    pub description : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image       : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Stop {
    pub order       : u32,
    pub name        : String,
    pub lat         : f64,
    pub lng         : f64,
    #[serde(default)]
    pub description : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips        : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Route {
    pub id          : u32,
    pub title       : String,
    pub description : String,
    pub category    : String,
    pub difficulty  : Difficulty,
    pub duration    : String,
    pub price       : PriceTier,
    #[serde(default, skip_deserializing)]
    pub price_label : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image       : Option<String>,
    #[serde(default)]
    pub highlights  : Vec<String>,
    pub stops       : Vec<Stop>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Recommendation {
    pub id          : u32,
    pub name        : String,
    pub category    : String,
    #[serde(default)]
    pub subcategory : String,
    pub price       : PriceTier,
    #[serde(default, skip_deserializing)]
    pub price_label : String,
    pub rating      : f64,
    pub description : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates : Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image       : Option<String>,
    #[serde(default)]
    pub highlights  : Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips        : Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct RouteDetail {
    #[serde(flatten)]
    pub route: Route,
    /// The stops as polyline.
    pub path: Vec<Coordinate>,
    pub center: Coordinate,
    pub distance_meters: f64,
}

/// Favorites as they are kept in the local storage of a client.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Favorites {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FavoriteItem {
    Location(Location),
    Route(Route),
    Recommendation(Recommendation),
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct FavoriteStatus {
    pub kind: ItemKind,
    pub id: u32,
    pub is_favorite: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct FavoritesCount {
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct InstallPrompt {
    pub show: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchResults {
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewReview {
    pub rating: u8,
    pub comment: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id         : String,
    pub user_id    : String,
    pub user_name  : String,
    pub item_type  : ItemKind,
    pub item_id    : u32,
    pub rating     : u8,
    pub comment    : String,
    /// Milliseconds since the epoch
    pub created_at : i64,
    pub deletable  : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct ReviewSummary {
    pub count: usize,
    pub average: f64,
    pub stars: u8,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReviewList {
    pub summary: ReviewSummary,
    pub reviews: Vec<Review>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    Cloudy,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Weather {
    pub temperature : i32,
    pub feels_like  : i32,
    pub humidity    : u8,
    pub wind_speed  : f64,
    /// Kilometers
    pub visibility  : f64,
    pub description : String,
    pub icon        : String,
    pub condition   : WeatherCondition,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[cfg_attr(feature = "extra-derive", derive(thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// A human-readable error message.
    pub message: String,
}
