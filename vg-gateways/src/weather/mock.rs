use anyhow::Result;
use vg_core::{entities::Weather, gateways::weather::WeatherGateway};

/// Fixed weather conditions for running without an API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeather;

impl WeatherGateway for MockWeather {
    fn current_weather(&self) -> Result<Weather> {
        Ok(Weather {
            temperature: 22,
            feels_like: 21,
            humidity: 65,
            wind_speed: 3.5,
            visibility: 10.0,
            description: "Clear sky".into(),
            icon: "01d".into(),
        })
    }
}
