//! Ortssuche über den Gaode-Proxy des Servers oder über Nominatim.

use reqwest::StatusCode;
use serde::Deserialize;

use super::api::endpoint;
use super::{GeocodeError, SearchRequest};
use crate::core::{GeoBounds, GeocodeProvider, SearchResult};

#[derive(Debug, Deserialize)]
struct GaodeResponse {
    #[serde(default)]
    pois: Option<Vec<serde_json::Map<String, serde_json::Value>>>,
}

/// Wandelt die Proxy-Antwort (`{pois: [{id, name, address, location: "lng,lat"}]}`)
/// in Suchtreffer um. Fehlende Felder ergeben leere Strings bzw. 0/0.
pub fn parse_gaode_response(body: &str) -> Result<Vec<SearchResult>, GeocodeError> {
    let parsed: GaodeResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::Request(e.to_string()))?;
    let Some(pois) = parsed.pois else {
        return Ok(Vec::new());
    };

    Ok(pois
        .into_iter()
        .map(|poi| {
            let text = |key: &str| {
                poi.get(key)
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string()
            };
            let location = poi
                .get("location")
                .and_then(|v| v.as_str())
                .unwrap_or("0,0");
            let mut parts = location.split(',').map(|p| p.trim().parse::<f64>().ok());
            let lon = parts.next().flatten().unwrap_or(0.0);
            let lat = parts.next().flatten().unwrap_or(0.0);
            let place_id = poi.get("id").and_then(|v| match v {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

            SearchResult {
                place_id,
                display_name: format!("{} - {}", text("name"), text("address")),
                lat,
                lon,
                extra: poi,
            }
        })
        .collect())
}

/// Dekodiert eine Nominatim-Antwort; alles außer einem Array ergibt keine Treffer.
pub fn parse_nominatim_response(body: &str) -> Result<Vec<SearchResult>, GeocodeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GeocodeError::Request(e.to_string()))?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<SearchResult>(item) {
                Ok(result) => Some(result),
                Err(e) => {
                    log::debug!("Nominatim-Treffer übersprungen: {}", e);
                    None
                }
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Nominatim-URL, optional auf einen Ausschnitt begrenzt.
pub fn nominatim_url(
    base: &str,
    query: &str,
    bounds: Option<&GeoBounds>,
) -> Result<reqwest::Url, GeocodeError> {
    let mut url = reqwest::Url::parse(base).map_err(|e| GeocodeError::Request(e.to_string()))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("format", "json");
        pairs.append_pair("q", query);
        if let Some(bounds) = bounds {
            pairs.append_pair("viewbox", &bounds.to_viewbox());
            pairs.append_pair("bounded", "1");
            pairs.append_pair("limit", "10");
        }
    }
    Ok(url)
}

/// Async-Geocoder für beide Anbieter.
#[derive(Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    api_base: String,
    nominatim_url: String,
}

impl Geocoder {
    pub fn new(http: reqwest::Client, api_base: impl Into<String>, nominatim_url: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            nominatim_url: nominatim_url.into(),
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>, GeocodeError> {
        match request.provider {
            GeocodeProvider::Gaode => self.search_gaode(&request.query).await,
            GeocodeProvider::Nominatim => {
                self.search_nominatim(&request.query, request.bounds.as_ref())
                    .await
            }
        }
    }

    async fn search_gaode(&self, query: &str) -> Result<Vec<SearchResult>, GeocodeError> {
        let url = endpoint(&self.api_base, "proxy/search", &[("keywords", query)])
            .map_err(|e| GeocodeError::Request(e.to_string()))?;
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(GeocodeError::MissingCredential);
        }
        if !response.status().is_success() {
            return Err(GeocodeError::Request(format!("HTTP {}", response.status())));
        }
        let body = response.text().await?;
        parse_gaode_response(&body)
    }

    async fn search_nominatim(
        &self,
        query: &str,
        bounds: Option<&GeoBounds>,
    ) -> Result<Vec<SearchResult>, GeocodeError> {
        let url = nominatim_url(&self.nominatim_url, query, bounds)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::Request(format!("HTTP {}", response.status())));
        }
        let body = response.text().await?;
        parse_nominatim_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_gaode_pois() {
        let body = r#"{"status":"1","pois":[
            {"id":"B000A8UIN8","name":"故宫博物院","address":"景山前街4号","location":"116.397026,39.918058","type":"风景名胜"},
            {"id":"B0FFG","name":"Ohne Adresse","location":"121.49,31.24"}
        ]}"#;
        let results = parse_gaode_response(body).expect("Antwort sollte parsen");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].place_id.as_deref(), Some("B000A8UIN8"));
        assert_eq!(results[0].display_name, "故宫博物院 - 景山前街4号");
        assert_relative_eq!(results[0].lat, 39.918058);
        assert_relative_eq!(results[0].lon, 116.397026);
        assert_eq!(results[0].extra.get("type"), Some(&serde_json::json!("风景名胜")));
        assert_eq!(results[1].display_name, "Ohne Adresse - ");
    }

    #[test]
    fn test_parse_gaode_without_pois_is_empty() {
        assert!(parse_gaode_response(r#"{"status":"0"}"#)
            .expect("parse")
            .is_empty());
        assert!(parse_gaode_response("not json").is_err());
    }

    #[test]
    fn test_parse_nominatim_skips_broken_entries() {
        let body = r#"[
            {"place_id":1,"display_name":"Bund","lat":"31.24","lon":"121.49"},
            {"place_id":2,"display_name":"kaputt"}
        ]"#;
        let results = parse_nominatim_response(body).expect("parse");
        assert_eq!(results.len(), 1);
        assert!(parse_nominatim_response(r#"{"error":"x"}"#)
            .expect("parse")
            .is_empty());
    }

    #[test]
    fn test_nominatim_url_with_bounds() {
        let bounds = GeoBounds {
            west: 121.0,
            north: 31.5,
            east: 122.0,
            south: 31.0,
        };
        let url = nominatim_url("https://nominatim.openstreetmap.org/search", "Bund", Some(&bounds))
            .expect("URL");
        assert_eq!(
            url.as_str(),
            "https://nominatim.openstreetmap.org/search?format=json&q=Bund&viewbox=121%2C31.5%2C122%2C31&bounded=1&limit=10"
        );

        let unbounded = nominatim_url("https://nominatim.openstreetmap.org/search", "a b", None)
            .expect("URL");
        assert_eq!(
            unbounded.as_str(),
            "https://nominatim.openstreetmap.org/search?format=json&q=a+b"
        );
    }
}
