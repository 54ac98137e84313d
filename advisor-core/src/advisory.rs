//! Turns a weather observation into advice for people.
//!
//! Everything here is pure: same input, same text.

use crate::model::WeatherObservation;

/// Who the clothing advice is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Child,
    Adult,
    Elder,
}

impl AgeGroup {
    /// Report order.
    pub const fn all() -> &'static [AgeGroup] {
        &[AgeGroup::Child, AgeGroup::Adult, AgeGroup::Elder]
    }

    fn heading(&self) -> &'static str {
        match self {
            AgeGroup::Child => "👶 Children",
            AgeGroup::Adult => "👨 Adults",
            AgeGroup::Elder => "👴 Elders",
        }
    }
}

/// Coarse temperature category used to pick clothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    Hot,
    Warm,
    Cool,
    Cold,
}

impl TemperatureBand {
    /// `> 30` hot, `20..=30` warm, `10..20` cool, anything else (NaN included) cold.
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature > 30.0 {
            TemperatureBand::Hot
        } else if (20.0..=30.0).contains(&temperature) {
            TemperatureBand::Warm
        } else if (10.0..20.0).contains(&temperature) {
            TemperatureBand::Cool
        } else {
            TemperatureBand::Cold
        }
    }
}

pub const EXTREME_HEAT_ADVICE: &str =
    "🔥 It's extremely hot! It's not safe for traveling, consider postponing your trip.";
pub const FREEZING_ADVICE: &str =
    "❄️ It's freezing! Traveling is not recommended, stay safe and warm indoors.";
pub const HOT_ADVICE: &str = "🌞 It's very hot. Make sure to stay hydrated and wear sunscreen!";
pub const COLD_ADVICE: &str =
    "🧣 It's cold. Consider wearing warm clothes and avoid unnecessary outdoor activities.";
pub const PLEASANT_ADVICE: &str = "🌤️ Weather is pleasant, safe for travel!";

/// Travel safety for a temperature. Rules overlap, so the order of checks matters.
pub fn travel_advice(temperature: f64) -> &'static str {
    if temperature > 40.0 {
        EXTREME_HEAT_ADVICE
    } else if temperature < 0.0 {
        FREEZING_ADVICE
    } else if temperature > 30.0 {
        HOT_ADVICE
    } else if temperature < 10.0 {
        COLD_ADVICE
    } else {
        PLEASANT_ADVICE
    }
}

pub fn clothing_advice(group: AgeGroup, band: TemperatureBand) -> &'static str {
    use AgeGroup::*;
    use TemperatureBand::*;

    match (group, band) {
        (Child, Hot) => "🧢 Light cotton clothes, hat, and sunscreen. Keep kids hydrated!",
        (Child, Warm) => "👕 T-shirt, shorts, and a cap.",
        (Child, Cool) => "🧥 A light jacket with a full-sleeve shirt.",
        (Child, Cold) => "🧣 Layered clothing, gloves, woolen hat, and insulated shoes.",
        (Adult, Hot) => "😎 Light cotton T-shirt and shorts. Stay cool and drink water!",
        (Adult, Warm) => "👖 T-shirt and jeans work well. Carry sunglasses!",
        (Adult, Cool) => "🧥 A hoodie or light jacket.",
        (Adult, Cold) => "🧣 Heavy jacket, gloves, and thermal socks.",
        (Elder, Hot) => "🌞 Loose cotton clothes, hat, sunglasses, and drink plenty of water!",
        (Elder, Warm) => "👚 Comfortable full-sleeve shirt and light trousers.",
        (Elder, Cool) => "🧥 A sweater or light jacket.",
        (Elder, Cold) => "🧣 Heavy wool clothing, thermal innerwear, and warm socks.",
    }
}

/// Clothing advice for every age group, one labelled line each.
pub fn clothing_recommendation(temperature: f64) -> String {
    let band = TemperatureBand::from_celsius(temperature);

    AgeGroup::all()
        .iter()
        .map(|group| format!("{}: {}", group.heading(), clothing_advice(*group, band)))
        .collect::<Vec<_>>()
        .join("\n")
}

const SIGNIFICANT_CONDITIONS: [&str; 3] = ["storm", "rain", "snow"];
const EXTREME_COLD_BELOW: f64 = 5.0;
pub const EXTREME_COLD_ALERT: &str =
    "❄️ Extreme Cold Alert! Stay warm and avoid prolonged exposure outside.";

/// Every severe condition found, concatenated; conditions are not exclusive.
pub fn severe_alert(city: &str, temperature: f64, description: &str) -> String {
    let description = description.to_lowercase();

    let mut parts: Vec<String> = SIGNIFICANT_CONDITIONS
        .iter()
        .filter(|condition| description.contains(*condition))
        .map(|condition| format!("{} expected! Take precautions.", capitalize(condition)))
        .collect();

    if temperature < EXTREME_COLD_BELOW {
        parts.push(EXTREME_COLD_ALERT.to_string());
    }

    if parts.is_empty() {
        parts.push(format!("✅ No severe weather alerts for {city}."));
    }

    format!("⚠️ Weather Alert for {city}: {}", parts.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The three pieces of advice derived from one observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub clothing: String,
    pub travel: &'static str,
    pub alert: String,
}

impl Advisory {
    pub fn derive(city: &str, observation: &WeatherObservation) -> Self {
        let t = observation.temperature_c;

        Self {
            clothing: clothing_recommendation(t),
            travel: travel_advice(t),
            alert: severe_alert(city, t, &observation.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn travel_advice_follows_rule_precedence() {
        let cases = [
            (-1.0, FREEZING_ADVICE),
            (0.0, COLD_ADVICE),
            (5.0, COLD_ADVICE),
            (10.0, PLEASANT_ADVICE),
            (30.0, PLEASANT_ADVICE),
            (30.1, HOT_ADVICE),
            (40.0, HOT_ADVICE),
            (40.1, EXTREME_HEAT_ADVICE),
        ];

        for (t, expected) in cases {
            assert_eq!(travel_advice(t), expected, "temperature {t}");
        }
    }

    #[test]
    fn bands_split_at_ten_twenty_thirty() {
        let cases = [
            (9.9, TemperatureBand::Cold),
            (10.0, TemperatureBand::Cool),
            (19.9, TemperatureBand::Cool),
            (20.0, TemperatureBand::Warm),
            (29.9, TemperatureBand::Warm),
            (30.0, TemperatureBand::Warm),
            (30.1, TemperatureBand::Hot),
            (-40.0, TemperatureBand::Cold),
        ];

        for (t, expected) in cases {
            assert_eq!(TemperatureBand::from_celsius(t), expected, "temperature {t}");
        }
    }

    #[test]
    fn nan_temperature_is_cold_and_pleasant() {
        assert_eq!(TemperatureBand::from_celsius(f64::NAN), TemperatureBand::Cold);
        assert_eq!(travel_advice(f64::NAN), PLEASANT_ADVICE);
    }

    #[test]
    fn clothing_recommendation_lists_groups_in_order() {
        let text = clothing_recommendation(25.0);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "👶 Children: 👕 T-shirt, shorts, and a cap.");
        assert_eq!(lines[1], "👨 Adults: 👖 T-shirt and jeans work well. Carry sunglasses!");
        assert_eq!(
            lines[2],
            "👴 Elders: 👚 Comfortable full-sleeve shirt and light trousers."
        );
    }

    #[test]
    fn clothing_recommendation_uses_table_entry_for_band() {
        for (t, band) in [(9.9, TemperatureBand::Cold), (30.1, TemperatureBand::Hot)] {
            let text = clothing_recommendation(t);
            for group in AgeGroup::all() {
                assert!(text.contains(clothing_advice(*group, band)), "{group:?} at {t}");
            }
        }
    }

    #[test]
    fn rain_snow_and_cold_are_all_reported() {
        let alert = severe_alert("Paris", 3.0, "light rain and snow");

        assert!(alert.starts_with("⚠️ Weather Alert for Paris: "));
        assert!(alert.contains("Rain expected! Take precautions."));
        assert!(alert.contains("Snow expected! Take precautions."));
        assert!(alert.contains(EXTREME_COLD_ALERT));
        assert!(!alert.contains("No severe weather alerts"));
    }

    #[test]
    fn clear_mild_weather_has_no_alert() {
        let alert = severe_alert("Paris", 20.0, "clear sky");
        assert!(alert.ends_with("No severe weather alerts for Paris."));
    }

    #[test]
    fn description_is_matched_case_insensitively() {
        let alert = severe_alert("Oslo", 12.0, "ThunderSTORM with heavy Rain");

        assert!(alert.contains("Storm expected!"));
        assert!(alert.contains("Rain expected!"));
        assert!(!alert.contains("Snow expected!"));
    }

    #[test]
    fn cold_alone_triggers_alert() {
        let alert = severe_alert("Oslo", 4.9, "overcast clouds");

        assert!(alert.ends_with(EXTREME_COLD_ALERT));
        assert!(!alert.contains("No severe weather alerts"));
    }

    #[test]
    fn advisory_bundles_all_three() {
        let obs = WeatherObservation {
            temperature_c: 35.0,
            humidity_pct: 40,
            wind_speed_kmh: 7.2,
            description: "clear sky".into(),
            observed_at: Utc::now(),
        };

        let advisory = Advisory::derive("Madrid", &obs);

        assert_eq!(advisory.travel, HOT_ADVICE);
        assert!(advisory.clothing.contains("Keep kids hydrated!"));
        assert!(advisory.alert.ends_with("No severe weather alerts for Madrid."));
    }
}
