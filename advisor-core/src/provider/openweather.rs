use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    http,
    model::{WeatherObservation, mps_to_kmh},
};

use super::WeatherProvider;

pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(
        api_key: String,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            api_key,
            url: url.into(),
            http: http::build_client(timeout)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    dt: Option<i64>,
    main: OwMain,
    #[serde(deserialize_with = "non_empty")]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Vec<OwWeather>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items = Vec::<OwWeather>::deserialize(deserializer)?;
    if items.is_empty() {
        return Err(serde::de::Error::invalid_length(0, &"at least one weather entry"));
    }
    Ok(items)
}

impl From<OwCurrentResponse> for WeatherObservation {
    fn from(parsed: OwCurrentResponse) -> Self {
        let observed_at = parsed
            .dt
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
            .unwrap_or_else(Utc::now);

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_default();

        Self {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_kmh: mps_to_kmh(parsed.wind.speed),
            description,
            observed_at,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherObservation, FetchError> {
        let request = self.http.get(self.url.as_str()).query(&[
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ]);

        let parsed: OwCurrentResponse = http::get_json(request, "OpenWeather").await?;
        let observation = WeatherObservation::from(parsed);

        debug!(
            city,
            temperature_c = observation.temperature_c,
            description = %observation.description,
            "fetched current weather"
        );

        Ok(observation)
    }
}
