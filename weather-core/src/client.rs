//! Client for the OpenWeatherMap geocoding and current-weather endpoints.

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::ClientError;
use crate::model::{Location, Weather};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Maximum number of geocode matches requested per search.
const GEOCODE_LIMIT: u8 = 5;

/// Two-step weather lookup: geocode a city name, then fetch current
/// conditions by coordinates.
///
/// The client keeps one piece of mutable state, the result set of the
/// most recent successful search. It is only ever touched from the
/// single task driving the user interaction, so no locking is needed.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
    locations: Vec<Location>,
}

impl WeatherClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point both endpoints at an alternative base URL. Tests use this
    /// to stand a local mock server in for the real API.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
            locations: Vec::new(),
        }
    }

    /// Matches from the most recent successful search, in API order.
    /// Empty until a search has succeeded.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn has_results(&self) -> bool {
        !self.locations.is_empty()
    }

    /// Resolve a free-text city name to up to five candidate locations.
    ///
    /// On success the returned matches also replace the stored result
    /// set wholesale. On any failure the stored set is left untouched;
    /// the failure is logged and returned to the caller. Callers are
    /// expected to pass a trimmed, non-empty city name.
    #[instrument(skip(self))]
    pub async fn search_locations(&mut self, city: &str) -> Result<Vec<Location>, ClientError> {
        let url = self.endpoint("/geo/1.0/direct")?;
        let limit = GEOCODE_LIMIT.to_string();
        // reqwest's query serializer percent-encodes the city name.
        let query = [
            ("q", city),
            ("limit", limit.as_str()),
            ("appid", self.api_key.as_str()),
        ];

        let result = self
            .get_json::<Vec<Location>>(url, &query)
            .await
            .and_then(|matches| {
                if matches.is_empty() {
                    Err(ClientError::NoResult)
                } else {
                    Ok(matches)
                }
            });

        match result {
            Ok(matches) => {
                self.locations = matches.clone();
                Ok(matches)
            }
            Err(err) => {
                warn!(%city, error = %err, "location search failed, keeping previous results");
                Err(err)
            }
        }
    }

    /// Fetch current conditions for a coordinate pair.
    ///
    /// Unlike [`WeatherClient::search_locations`] this stores nothing;
    /// the decoded value goes straight back to the caller.
    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<Weather, ClientError> {
        let url = self.endpoint("/data/2.5/weather")?;
        let lat = lat.to_string();
        let lon = lon.to_string();
        let query = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", self.api_key.as_str()),
        ];

        self.get_json(url, &query).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|_| ClientError::InvalidUrl(raw))
    }

    /// Shared request pipeline: send a GET, fail fast on any status
    /// other than 200, then decode the body into `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        debug!(url = %url, "sending request");

        let response = self.http.get(url).query(query).send().await.map_err(|err| {
            debug!(error = %err, "no response from server");
            ClientError::RequestFailed(ClientError::NO_RESPONSE)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::RequestFailed(i32::from(status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| ClientError::RequestFailed(ClientError::NO_RESPONSE))?;

        serde_json::from_slice(&body).map_err(|err| {
            debug!(error = %err, "response body did not match expected shape");
            ClientError::Decoding
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_client_has_no_results() {
        let client = WeatherClient::new("KEY");
        assert!(!client.has_results());
        assert!(client.locations().is_empty());
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = WeatherClient::new("KEY");
        let url = client.endpoint("/geo/1.0/direct").expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://api.openweathermap.org/geo/1.0/direct"
        );
    }

    #[test]
    fn endpoint_rejects_malformed_base() {
        let client = WeatherClient::with_base_url("KEY", "not a url");
        let err = client.endpoint("/data/2.5/weather").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
