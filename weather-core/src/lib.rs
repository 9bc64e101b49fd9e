//! Core library for the city weather client.
//!
//! This crate defines:
//! - Typed records for the geocoding and current-weather endpoints
//! - The client orchestrating the two lookups (city -> coordinates -> conditions)
//! - The error taxonomy surfaced to the presentation layer
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::WeatherClient;
pub use config::Config;
pub use error::ClientError;
pub use model::{Location, MainWeather, Weather};
