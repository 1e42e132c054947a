use anyhow::Result as Fallible;
use vg_entities::weather::Weather;

pub trait WeatherGateway {
    /// Fetch the current weather in Venice.
    fn current_weather(&self) -> Fallible<Weather>;
}
