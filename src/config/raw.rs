use duration_str::deserialize_option_duration;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("venice-guide.default.toml");

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub storage: Option<Storage>,
    pub weather: Option<Weather>,
    pub gateway: Option<Gateway>,
}

impl Config {
    /// The configuration that is embedded into the binary.
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    #[serde(default)]
    pub cors: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub local_storage_dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Weather {
    pub gateway: Option<WeatherGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub max_cache_age: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherGateway {
    Openweathermap,
    Mock,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub openweathermap: Option<OpenWeatherMap>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenWeatherMap {
    pub api_key: Option<String>,
    pub api_base_url: Option<String>,
}
