use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Factor between metres per second and kilometres per hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// Where the user is, as reported by the geolocation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// A single current-weather reading for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    pub description: String,
    pub observed_at: DateTime<Utc>,
}

pub fn mps_to_kmh(speed_mps: f64) -> f64 {
    speed_mps * MPS_TO_KMH
}
