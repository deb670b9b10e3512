use crate::error::Invalid;
use crate::event::Event;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::Arc;

pub type AirportCode = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Normal,
    Storm,
    Fog,
    Snow,
    Thunderstorm,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::Normal,
        Weather::Storm,
        Weather::Fog,
        Weather::Snow,
        Weather::Thunderstorm,
    ];

    pub fn is_bad(&self) -> bool {
        !matches!(self, Weather::Normal)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Weather::Normal => "normal conditions",
            Weather::Storm => "storm",
            Weather::Fog => "fog",
            Weather::Snow => "snow",
            Weather::Thunderstorm => "thunderstorm",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Weather {
    type Err = Invalid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "normal conditions" | "good" => Ok(Weather::Normal),
            "storm" => Ok(Weather::Storm),
            "fog" => Ok(Weather::Fog),
            "snow" => Ok(Weather::Snow),
            "thunderstorm" => Ok(Weather::Thunderstorm),
            other => Err(Invalid::UnknownWeather(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: AirportCode,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    weather: Weather,
    #[serde(default = "operational")]
    pub is_operational: bool,
}

fn operational() -> bool {
    true
}

impl Airport {
    pub fn new(code: &str, name: &str, city: &str, country: &str, weather: Weather) -> Airport {
        Airport {
            code: Arc::from(code),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            weather,
            is_operational: true,
        }
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    /// Replaces the current weather. Bad weather yields a warning event,
    /// the airport itself has no state machine to advance.
    pub fn set_weather(&mut self, weather: Weather) -> Option<Event> {
        self.weather = weather;
        tracing::debug!(airport = %self.code, %weather, "weather updated");
        weather.is_bad().then(|| Event::WeatherWarning {
            airport: self.code.clone(),
            weather,
        })
    }

    pub fn is_flight_possible(&self) -> bool {
        !self.weather.is_bad()
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), {}, {}", self.name, self.code, self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feasibility_for_every_weather() {
        let mut airport =
            Airport::new("LED", "Pulkovo", "Saint Petersburg", "Russia", Weather::Normal);
        for weather in Weather::ALL {
            airport.set_weather(weather);
            assert_eq!(weather == Weather::Normal, airport.is_flight_possible(), "{}", weather);
        }
    }

    #[test]
    fn test_bad_weather_warns() {
        let mut airport = Airport::new("AER", "Adler", "Sochi", "Russia", Weather::Normal);
        assert!(matches!(
            airport.set_weather(Weather::Storm),
            Some(Event::WeatherWarning { weather: Weather::Storm, .. })
        ));
        assert_eq!(None, airport.set_weather(Weather::Normal));
        assert_eq!(Weather::Normal, airport.weather());
    }

    #[test]
    fn test_weather_parsing() {
        assert_eq!(Ok(Weather::Fog), "Fog".parse());
        assert_eq!(Ok(Weather::Normal), "normal".parse());
        assert_eq!(
            Err(Invalid::UnknownWeather("hail".to_string())),
            "hail".parse::<Weather>()
        );
    }
}
