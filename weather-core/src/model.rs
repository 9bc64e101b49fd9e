use serde::Deserialize;
use std::fmt;

const KELVIN_OFFSET: f64 = 273.15;

/// A geocoded place returned by the location search.
///
/// Identity is the coordinate pair, not a server-assigned id: two
/// results with the same `(lat, lon)` refer to the same place.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub state: Option<String>,
}

impl Location {
    /// Stable identity key derived from the coordinates.
    pub fn id(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.as_deref() {
            Some(state) => write!(f, "{}, {}, {}", self.name, state, self.country),
            None => write!(f, "{}, {}", self.name, self.country),
        }
    }
}

/// Current conditions for a coordinate pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Weather {
    pub main: MainWeather,
}

/// The `main` block of the current-weather response.
///
/// Temperatures are kept in Kelvin exactly as received; conversions
/// happen in the accessors at display time. Pressure and humidity are
/// unsigned, so negative values are rejected during decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct MainWeather {
    pub temp: f64,
    pub pressure: u32,
    pub humidity: u8,
    pub temp_min: f64,
    pub temp_max: f64,
}

impl MainWeather {
    pub fn temp_celsius(&self) -> f64 {
        self.temp - KELVIN_OFFSET
    }

    pub fn temp_fahrenheit(&self) -> f64 {
        (self.temp - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0
    }

    pub fn temp_min_celsius(&self) -> f64 {
        self.temp_min - KELVIN_OFFSET
    }

    pub fn temp_max_celsius(&self) -> f64 {
        self.temp_max - KELVIN_OFFSET
    }
}
