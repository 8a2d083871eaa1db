//! Ergebnis einer Ortssuche (flüchtig, nie persistiert).

use serde::{Deserialize, Deserializer, Serialize};

use super::GeoPoint;

/// Suchtreffer eines Geocoders.
///
/// Nominatim liefert `lat`/`lon` als Strings und `place_id` als Zahl,
/// der Gaode-Proxy liefert Zahlen bzw. Strings. Beides wird akzeptiert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "string_or_number_opt")]
    pub place_id: Option<String>,
    pub display_name: String,
    #[serde(deserialize_with = "f64_from_string_or_number")]
    pub lat: f64,
    #[serde(deserialize_with = "f64_from_string_or_number")]
    pub lon: f64,
    /// Anbieterspezifische Zusatzfelder
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SearchResult {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Kurzname für Vorbelegungen (Teil vor " - " bzw. vor dem ersten Komma).
    pub fn short_name(&self) -> &str {
        let name = self.display_name.trim();
        let cut = name
            .find(" - ")
            .or_else(|| name.find(','))
            .unwrap_or(name.len());
        name[..cut].trim()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("Koordinate ist keine Zahl")),
    }
}

fn string_or_number_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nominatim_string_coordinates() {
        let json = r#"{"place_id":12345,"display_name":"Bund, Shanghai, China","lat":"31.2400","lon":"121.4900","class":"tourism"}"#;
        let result: SearchResult = serde_json::from_str(json).expect("Treffer sollte parsen");
        assert_eq!(result.place_id.as_deref(), Some("12345"));
        assert_relative_eq!(result.lat, 31.24);
        assert_relative_eq!(result.lon, 121.49);
        assert_eq!(result.extra.get("class"), Some(&serde_json::json!("tourism")));
        assert_eq!(result.short_name(), "Bund");
    }

    #[test]
    fn test_numeric_coordinates_without_place_id() {
        let json = r#"{"display_name":"Gugong - Jingshan Qianjie 4","lat":39.916,"lon":116.397}"#;
        let result: SearchResult = serde_json::from_str(json).expect("Treffer sollte parsen");
        assert!(result.place_id.is_none());
        assert_eq!(result.short_name(), "Gugong");
    }

    #[test]
    fn test_invalid_coordinate_string_is_rejected() {
        let json = r#"{"display_name":"X","lat":"abc","lon":"1"}"#;
        assert!(serde_json::from_str::<SearchResult>(json).is_err());
    }
}
