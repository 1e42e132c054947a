use super::*;
use rocket::tokio::task::spawn_blocking;

#[get("/weather")]
pub async fn get_weather(
    gateway: &State<Weather>,
    cache: &State<WeatherCache>,
) -> Result<json::Weather> {
    if let Some(weather) = cache.get() {
        return Ok(Json(weather.into()));
    }
    let gateway = gateway.0.clone();
    let weather = spawn_blocking(move || usecases::current_weather(&*gateway))
        .await
        .map_err(|err| {
            error!("Weather request has been aborted: {err}");
            ParameterError::WeatherUnavailable
        })??;
    cache.update(weather.clone());
    Ok(Json(weather.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::super::tests::prelude::*;
    use vg_core::{entities::Weather, gateways::weather::WeatherGateway};

    struct CountingWeather {
        requests: Arc<AtomicUsize>,
        offline: bool,
    }

    impl WeatherGateway for CountingWeather {
        fn current_weather(&self) -> anyhow::Result<Weather> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                anyhow::bail!("network unreachable");
            }
            MockWeather.current_weather()
        }
    }

    #[test]
    fn weather_is_cached() {
        let requests = Arc::new(AtomicUsize::new(0));
        let gateway = CountingWeather {
            requests: Arc::clone(&requests),
            offline: false,
        };
        let (client, _) = setup_with_weather(Box::new(gateway));
        for _ in 0..3 {
            let response = client.get("/weather").dispatch();
            assert_eq!(response.status(), Status::Ok);
            test_json(&response);
            let weather: json::Weather = response.into_json().unwrap();
            assert_eq!(22, weather.temperature);
            assert_eq!(json::WeatherCondition::Sunny, weather.condition);
        }
        assert_eq!(1, requests.load(Ordering::SeqCst));
    }

    #[test]
    fn unavailable_weather() {
        let requests = Arc::new(AtomicUsize::new(0));
        let gateway = CountingWeather {
            requests: Arc::clone(&requests),
            offline: true,
        };
        let (client, _) = setup_with_weather(Box::new(gateway));
        for _ in 0..2 {
            let response = client.get("/weather").dispatch();
            assert_eq!(response.status(), Status::ServiceUnavailable);
            let err: json::Error = response.into_json().unwrap();
            assert_eq!("Unable to load weather data", err.message);
        }
        // Failures are not cached
        assert_eq!(2, requests.load(Ordering::SeqCst));
    }
}
