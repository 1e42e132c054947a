/// Current weather conditions.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    /// °C
    pub temperature   : i32,
    /// °C
    pub feels_like    : i32,
    /// %
    pub humidity      : u8,
    /// m/s
    pub wind_speed    : f64,
    /// km
    pub visibility    : f64,
    pub description   : String,
    pub icon          : String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    Cloudy,
}

impl Weather {
    /// Derived from the icon code of the provider.
    pub fn condition(&self) -> WeatherCondition {
        let icon = self.icon.as_str();
        if icon.contains("01") {
            WeatherCondition::Sunny
        } else if icon.contains("09") || icon.contains("10") {
            WeatherCondition::Rainy
        } else {
            WeatherCondition::Cloudy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(icon: &str) -> Weather {
        Weather {
            temperature: 20,
            feels_like: 20,
            humidity: 50,
            wind_speed: 1.0,
            visibility: 10.0,
            description: String::new(),
            icon: icon.into(),
        }
    }

    #[test]
    fn condition_from_icon() {
        assert_eq!(WeatherCondition::Sunny, weather("01d").condition());
        assert_eq!(WeatherCondition::Rainy, weather("09n").condition());
        assert_eq!(WeatherCondition::Rainy, weather("10d").condition());
        assert_eq!(WeatherCondition::Cloudy, weather("04d").condition());
    }
}
