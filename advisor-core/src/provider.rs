use crate::{
    Config, error::FetchError, model::WeatherObservation,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

pub mod openweather;

/// A source of current weather for a named city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WeatherObservation, FetchError>;

    /// Like [`WeatherProvider::fetch`], but failures are logged with the city
    /// and reported as `None`.
    async fn observe(&self, city: &str) -> Option<WeatherObservation> {
        match self.fetch(city).await {
            Ok(observation) => Some(observation),
            Err(err) => {
                warn!(city, error = %err, "error fetching weather data");
                None
            }
        }
    }
}

/// Construct the weather provider described by the configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let provider = OpenWeatherProvider::new(
        api_key,
        config.endpoints.weather_url.clone(),
        config.timeout(),
    )?;

    Ok(Box::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("API key is missing"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            ..Config::default()
        };

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
