use advisor_core::{Advisory, WeatherObservation};

/// Human-readable weather report plus every piece of advice for it.
pub fn render(city: &str, observation: &WeatherObservation) -> String {
    let advisory = Advisory::derive(city, observation);

    format!(
        "\n🌍 Real-Time Weather Update:\n\
         📍 Location: {city}\n\
         🌡️ Temperature: {temperature:.1}°C\n\
         💧 Humidity: {humidity}%\n\
         💨 Wind Speed: {wind:.1} km/h\n\
         🌤️ Conditions: {description}\n\
         🕒 Observed: {observed}\n\
         \n👕 Clothing Recommendation:\n{clothing}\n\
         \n🚗 Travel Advice:\n{travel}\n\
         \n{alert}",
        temperature = observation.temperature_c,
        humidity = observation.humidity_pct,
        wind = observation.wind_speed_kmh,
        description = observation.description,
        observed = observation.observed_at.format("%Y-%m-%d %H:%M UTC"),
        clothing = advisory.clothing,
        travel = advisory.travel,
        alert = advisory.alert,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn report_contains_readings_and_all_advice() {
        let obs = WeatherObservation {
            temperature_c: 3.0,
            humidity_pct: 87,
            wind_speed_kmh: 36.0,
            description: "light rain and snow".into(),
            observed_at: Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).unwrap(),
        };

        let text = render("Paris", &obs);

        assert!(text.contains("📍 Location: Paris"));
        assert!(text.contains("🌡️ Temperature: 3.0°C"));
        assert!(text.contains("💧 Humidity: 87%"));
        assert!(text.contains("💨 Wind Speed: 36.0 km/h"));
        assert!(text.contains("🌤️ Conditions: light rain and snow"));
        assert!(text.contains("🕒 Observed: 2026-01-15 08:30 UTC"));
        assert!(text.contains("👶 Children: 🧣 Layered clothing"));
        assert!(text.contains("🧣 It's cold."));
        assert!(text.contains("⚠️ Weather Alert for Paris: Rain expected!"));
    }

    #[test]
    fn sections_come_in_report_order() {
        let obs = WeatherObservation {
            temperature_c: 22.0,
            humidity_pct: 40,
            wind_speed_kmh: 7.2,
            description: "clear sky".into(),
            observed_at: Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap(),
        };

        let text = render("Rome", &obs);

        assert!(text.starts_with("\n🌍 Real-Time Weather Update:\n📍 Location: Rome\n"));
        assert!(text.contains("🕒 Observed: 2026-06-01 12:00 UTC\n\n👕 Clothing Recommendation:\n"));
        assert!(text.contains("\n\n🚗 Travel Advice:\n🌤️ Weather is pleasant, safe for travel!\n\n"));
        assert!(text.ends_with("✅ No severe weather alerts for Rome."));
    }
}
