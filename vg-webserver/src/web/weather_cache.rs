use std::time::{Duration, Instant};

use parking_lot::RwLock;
use vg_core::entities::Weather;

/// The most recently fetched weather data.
pub struct WeatherCache {
    max_cache_age: Duration,
    cached: RwLock<Option<(Instant, Weather)>>,
}

impl WeatherCache {
    pub fn new(max_cache_age: Duration) -> Self {
        Self {
            max_cache_age,
            cached: RwLock::new(None),
        }
    }

    /// Cached data that is younger than the max. cache age.
    pub fn get(&self) -> Option<Weather> {
        let cached = self.cached.read();
        cached
            .as_ref()
            .filter(|(created_at, _)| created_at.elapsed() < self.max_cache_age)
            .map(|(_, weather)| weather.clone())
    }

    pub fn update(&self, weather: Weather) {
        *self.cached.write() = Some((Instant::now(), weather));
    }
}
