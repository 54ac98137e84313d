//! Core library for the `weather-advisor` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - IP-based location lookup and current-weather fetching
//! - The advice derived from an observation (clothing, travel, alerts)
//!
//! It is used by `advisor-cli`, but can also be reused by other binaries or services.

pub mod advisory;
pub mod config;
pub mod error;
mod http;
pub mod location;
pub mod model;
pub mod provider;

pub use advisory::{Advisory, AgeGroup, TemperatureBand};
pub use config::{Config, Endpoints};
pub use error::FetchError;
pub use location::{GeoLocator, IpInfoLocator, locator_from_config};
pub use model::{Location, WeatherObservation};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
