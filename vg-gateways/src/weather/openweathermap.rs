use anyhow::{anyhow, Result};
use serde::Deserialize;
use vg_core::{
    entities::{MapPoint, Weather},
    gateways::weather::WeatherGateway,
};

pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Current weather from openweathermap.org.
#[derive(Debug, Clone)]
pub struct OpenWeatherMap {
    pub api_key: String,
    pub api_base_url: String,
    pub pos: MapPoint,
}

impl OpenWeatherMap {
    fn url(&self) -> String {
        let Self {
            api_base_url, pos, ..
        } = self;
        format!(
            "{api_base_url}/weather?lat={lat}&lon={lng}&units=metric",
            lat = pos.lat(),
            lng = pos.lng()
        )
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    weather: Vec<WeatherDescription>,
    main: MainReadings,
    wind: Wind,
    /// Meters
    visibility: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherDescription {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    message: String,
}

impl TryFrom<CurrentWeatherResponse> for Weather {
    type Error = anyhow::Error;

    fn try_from(from: CurrentWeatherResponse) -> Result<Self> {
        let CurrentWeatherResponse {
            weather,
            main,
            wind,
            visibility,
        } = from;
        let WeatherDescription { description, icon } = weather
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Missing weather description"))?;
        Ok(Self {
            temperature: main.temp.round() as i32,
            feels_like: main.feels_like.round() as i32,
            humidity: main.humidity,
            wind_speed: wind.speed,
            visibility: visibility / 1000.0,
            description,
            icon,
        })
    }
}

#[cfg(not(test))]
fn get_raw(url: &str, api_key: &str) -> Result<CurrentWeatherResponse> {
    let client = reqwest::blocking::Client::new();
    let response = client.get(url).query(&[("appid", api_key)]).send()?;
    if response.status().is_success() {
        log::debug!("Weather provider response: {:?}", response.status());
        Ok(response.json()?)
    } else {
        let json_error: JsonError = response.json()?;
        Err(json_error.into())
    }
}

/// Don't actually send requests while running the tests.
#[cfg(test)]
fn get_raw(url: &str, _: &str) -> Result<CurrentWeatherResponse> {
    log::debug!("Would request weather from {url}");
    if url.starts_with("http://offline") {
        let json_error: JsonError =
            serde_json::from_str(r#"{"cod":401,"message":"Invalid API key"}"#)?;
        return Err(json_error.into());
    }
    Ok(serde_json::from_str(tests::RESPONSE)?)
}

impl WeatherGateway for OpenWeatherMap {
    fn current_weather(&self) -> Result<Weather> {
        get_raw(&self.url(), &self.api_key)?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::entities::{WeatherCondition, VENICE_CENTER};

    pub const RESPONSE: &str = r#"{
        "coord": {"lon": 12.3155, "lat": 45.4408},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 17.62, "feels_like": 17.45, "temp_min": 16.1, "temp_max": 18.3, "pressure": 1012, "humidity": 82},
        "visibility": 8500,
        "wind": {"speed": 4.12, "deg": 120},
        "name": "Venice"
    }"#;

    fn gateway(api_base_url: &str) -> OpenWeatherMap {
        OpenWeatherMap {
            api_key: "secret".into(),
            api_base_url: api_base_url.into(),
            pos: VENICE_CENTER,
        }
    }

    #[test]
    fn request_url() {
        assert_eq!(
            "https://api.openweathermap.org/data/2.5/weather?lat=45.4408&lon=12.3155&units=metric",
            gateway(DEFAULT_API_BASE_URL).url()
        );
    }

    #[test]
    fn map_response() {
        let weather = gateway(DEFAULT_API_BASE_URL).current_weather().unwrap();
        assert_eq!(18, weather.temperature);
        assert_eq!(17, weather.feels_like);
        assert_eq!(82, weather.humidity);
        assert_eq!(4.12, weather.wind_speed);
        assert_eq!(8.5, weather.visibility);
        assert_eq!("light rain", weather.description);
        assert_eq!(WeatherCondition::Rainy, weather.condition());
    }

    #[test]
    fn error_response() {
        let err = gateway("http://offline").current_weather().unwrap_err();
        assert_eq!("Invalid API key", err.to_string());
    }

    #[test]
    fn missing_description() {
        let response = CurrentWeatherResponse {
            weather: vec![],
            main: MainReadings {
                temp: 1.0,
                feels_like: 1.0,
                humidity: 1,
            },
            wind: Wind { speed: 1.0 },
            visibility: 1.0,
        };
        assert!(Weather::try_from(response).is_err());
    }
}
