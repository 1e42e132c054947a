use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use vg_gateways::weather::openweathermap::DEFAULT_API_BASE_URL;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "venice-guide.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_OPENWEATHERMAP_API_KEY: &str = "OPENWEATHERMAP_API_KEY";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub storage: Storage,
    pub weather: Weather,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "{} not found => load default configuration.",
                    file_path.display()
                );
                raw::Config::default()
            }
            Err(err) => return Err(err.into()),
        };
        let mut cfg = Self::try_from_raw_with_defaults(raw_config, raw::Config::try_default()?)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(api_key) = env::var(ENV_NAME_OPENWEATHERMAP_API_KEY) {
            cfg.weather.override_api_key(api_key);
        }
        Ok(cfg)
    }

    /// Missing sections are taken from the defaults.
    fn try_from_raw_with_defaults(from: raw::Config, defaults: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            storage,
            weather,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing database configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool needs at least one connection"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.or(defaults.webserver).unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Storage { local_storage_dir } = storage
            .or(defaults.storage)
            .ok_or_else(|| anyhow!("Missing storage configuration"))?;
        let storage = Storage { local_storage_dir };

        let default_weather = defaults
            .weather
            .ok_or_else(|| anyhow!("Missing default weather configuration"))?;
        let (gateway_name, max_cache_age) = match weather {
            Some(raw::Weather {
                gateway,
                max_cache_age,
            }) => (
                gateway.or(default_weather.gateway),
                max_cache_age.or(default_weather.max_cache_age),
            ),
            None => (default_weather.gateway, default_weather.max_cache_age),
        };
        let max_cache_age =
            max_cache_age.ok_or_else(|| anyhow!("Missing max. age of cached weather data"))?;

        let raw::OpenWeatherMap {
            api_key,
            api_base_url,
        } = gateway
            .or(defaults.gateway)
            .and_then(|gw| gw.openweathermap)
            .unwrap_or_default();
        let gateway = match gateway_name.unwrap_or(raw::WeatherGateway::Mock) {
            raw::WeatherGateway::Openweathermap => WeatherGateway::OpenWeatherMap {
                api_key,
                api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            },
            raw::WeatherGateway::Mock => WeatherGateway::Mock,
        };
        let weather = Weather {
            gateway,
            max_cache_age,
        };

        Ok(Self {
            db,
            webserver,
            storage,
            weather,
        })
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Storage {
    /// File system directory of the per-client local storage.
    pub local_storage_dir: PathBuf,
}

pub struct Weather {
    pub gateway: WeatherGateway,
    pub max_cache_age: Duration,
}

impl Weather {
    fn override_api_key(&mut self, key: String) {
        if let WeatherGateway::OpenWeatherMap { api_key, .. } = &mut self.gateway {
            *api_key = Some(key);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherGateway {
    OpenWeatherMap {
        /// Without a key the mock data is served.
        api_key: Option<String>,
        api_base_url: String,
    },
    Mock,
}

impl WeatherGateway {
    /// API key and base URL, if OpenWeatherMap is selected and usable.
    ///
    /// `None` means that mock data is served.
    pub fn openweathermap_with_key(&self) -> Option<(&str, &str)> {
        match self {
            Self::OpenWeatherMap {
                api_key: Some(api_key),
                api_base_url,
            } if !api_key.trim().is_empty() => {
                Some((api_key.as_str(), api_base_url.as_str()))
            }
            Self::OpenWeatherMap { .. } | Self::Mock => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Result<Config> {
        Config::try_from_raw_with_defaults(
            toml::from_str(toml).unwrap(),
            raw::Config::try_default().unwrap(),
        )
    }

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn missing_sections_are_taken_from_the_defaults() {
        let cfg = from_toml("").unwrap();
        assert_eq!("venice-guide.db", cfg.db.conn_sqlite);
        assert_eq!(10, cfg.db.conn_pool_size);
        assert!(!cfg.webserver.enable_cors);
        assert_eq!(Path::new("local-storage"), cfg.storage.local_storage_dir);
        assert_eq!(Duration::from_secs(1800), cfg.weather.max_cache_age);
        assert_eq!(
            WeatherGateway::OpenWeatherMap {
                api_key: None,
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            cfg.weather.gateway
        );
    }

    #[test]
    fn configure_the_weather_gateway() {
        let cfg = from_toml(
            r#"
[weather]
max-cache-age = "5m"

[gateway.openweathermap]
api-key = "secret"
api-base-url = "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(Duration::from_secs(300), cfg.weather.max_cache_age);
        assert_eq!(
            WeatherGateway::OpenWeatherMap {
                api_key: Some("secret".into()),
                api_base_url: "http://localhost:8080".into(),
            },
            cfg.weather.gateway
        );

        let mut cfg = from_toml("[weather]\ngateway = \"mock\"").unwrap();
        assert_eq!(WeatherGateway::Mock, cfg.weather.gateway);
        cfg.weather.override_api_key("secret".into());
        assert_eq!(WeatherGateway::Mock, cfg.weather.gateway);
    }

    #[test]
    fn serve_mock_weather_without_api_key() {
        let keyless = from_toml("").unwrap().weather;
        assert!(matches!(
            keyless.gateway,
            WeatherGateway::OpenWeatherMap { api_key: None, .. }
        ));
        assert_eq!(None, keyless.gateway.openweathermap_with_key());

        let mut keyed = from_toml("").unwrap().weather;
        keyed.override_api_key("secret".into());
        assert_eq!(
            Some(("secret", DEFAULT_API_BASE_URL)),
            keyed.gateway.openweathermap_with_key()
        );

        let mut blank = from_toml("").unwrap().weather;
        blank.override_api_key(" ".into());
        assert_eq!(None, blank.gateway.openweathermap_with_key());

        let mock = from_toml("[weather]\ngateway = \"mock\"").unwrap().weather;
        assert_eq!(None, mock.gateway.openweathermap_with_key());
    }

    #[test]
    fn reject_empty_connection_pool() {
        assert!(from_toml(
            r#"
[db]
connection-sqlite = ":memory:"
connection-pool-size = 0
"#
        )
        .is_err());
    }
}
