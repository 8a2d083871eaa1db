//! Ziel-Konfiguration: Zielort, letzter Kartenausschnitt, Kartenanbieter.

use serde::{Deserialize, Serialize};

use super::{GeoPoint, MapProvider, MapViewport};

/// Benannter Ankerpunkt eines Reiseziels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationConfig {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl DestinationConfig {
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            lat: position.lat,
            lng: position.lng,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Zuletzt gespeicherter Kartenausschnitt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

impl MapState {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

impl From<MapViewport> for MapState {
    fn from(viewport: MapViewport) -> Self {
        Self {
            lat: viewport.center.lat,
            lng: viewport.center.lng,
            zoom: viewport.zoom,
        }
    }
}

impl From<MapState> for MapViewport {
    fn from(state: MapState) -> Self {
        MapViewport::new(state.center(), state.zoom)
    }
}

/// Konfiguration eines Reiseziels (eine pro Ziel).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<DestinationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_state: Option<MapState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_provider: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Config {
    /// Aktiver Kartenanbieter (unbekannte oder fehlende Werte → Standard).
    pub fn provider(&self) -> MapProvider {
        self.map_provider
            .as_deref()
            .map(MapProvider::from_key)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_default_provider() {
        let cfg: Config = serde_json::from_str("{}").expect("leere Config sollte parsen");
        assert_eq!(cfg.provider(), MapProvider::Gaode);
        assert!(cfg.destination.is_none());
        assert!(cfg.map_state.is_none());
    }

    #[test]
    fn test_config_keeps_unknown_fields() {
        let json = r#"{"map_image":"a.png","map_image_base64":"xyz","map_provider":"osm","map_state":{"lat":31.0,"lng":121.0,"zoom":12}}"#;
        let cfg: Config = serde_json::from_str(json).expect("Config sollte parsen");
        assert_eq!(cfg.provider(), MapProvider::Osm);
        assert_eq!(cfg.map_state.map(|m| m.zoom), Some(12));
        let out = serde_json::to_value(&cfg).expect("serialisieren");
        assert_eq!(out["map_image_base64"], "xyz");
        assert!(out.get("destination").is_none());
    }
}
