use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Config, error::FetchError, http, model::Location};

pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipinfo.io/json";

const UNKNOWN_CITY: &str = "Unknown City";
const UNKNOWN_COUNTRY: &str = "Unknown Country";

/// Finds out where the caller is without asking them.
#[async_trait]
pub trait GeoLocator: Send + Sync + Debug {
    async fn try_locate(&self) -> Result<Location, FetchError>;

    /// Like [`GeoLocator::try_locate`], but failures are logged and reported as `None`.
    async fn locate(&self) -> Option<Location> {
        match self.try_locate().await {
            Ok(location) => Some(location),
            Err(err) => {
                warn!(error = %err, "error fetching location data");
                None
            }
        }
    }
}

/// IP-based lookup against an ipinfo.io compatible endpoint.
#[derive(Debug, Clone)]
pub struct IpInfoLocator {
    url: String,
    http: Client,
}

impl IpInfoLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            url: url.into(),
            http: http::build_client(timeout)?,
        })
    }
}

/// Build the IP locator described by the configuration.
pub fn locator_from_config(config: &Config) -> Result<IpInfoLocator, FetchError> {
    IpInfoLocator::new(config.endpoints.geolocation_url.clone(), config.timeout())
}

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl From<IpInfoResponse> for Location {
    fn from(res: IpInfoResponse) -> Self {
        Self {
            city: res.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            country: res.country.unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        }
    }
}

#[async_trait]
impl GeoLocator for IpInfoLocator {
    async fn try_locate(&self) -> Result<Location, FetchError> {
        let request = self.http.get(self.url.as_str());
        let parsed: IpInfoResponse = http::get_json(request, "ipinfo").await?;
        let location = Location::from(parsed);

        debug!(city = %location.city, country = %location.country, "resolved location");
        Ok(location)
    }
}
