use super::prelude::*;
use crate::gateways::weather::WeatherGateway;

pub fn current_weather<G: WeatherGateway + ?Sized>(gateway: &G) -> Result<Weather> {
    gateway.current_weather().map_err(|err| {
        log::warn!("Unable to load weather data: {err}");
        Error::WeatherUnavailable
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Offline;

    impl WeatherGateway for Offline {
        fn current_weather(&self) -> anyhow::Result<Weather> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn failed_requests_are_reported_as_unavailable() {
        let err = current_weather(&Offline).unwrap_err();
        assert!(matches!(err, Error::WeatherUnavailable));
        assert_eq!("Unable to load weather data", err.to_string());
    }
}
