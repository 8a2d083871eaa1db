//! Spot: benutzerdefinierter Ort innerhalb eines Reiseziels.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::GeoPoint;

/// Clientseitig vergebene, zeitbasierte Spot-ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub String);

impl SpotId {
    /// Erzeugt eine ID aus Millisekunden seit Epoch.
    pub fn from_millis(millis: u128) -> Self {
        Self(millis.to_string())
    }

    /// Aktuelle Systemzeit in Millisekunden.
    pub fn now_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
    }

    /// Zeitbasierte ID, die von `taken` noch nicht belegt ist.
    ///
    /// Kollidiert der Zeitstempel (zwei Spots in derselben Millisekunde),
    /// wird hochgezählt bis zur ersten freien ID.
    pub fn generate(now_millis: u128, taken: impl Fn(&SpotId) -> bool) -> Self {
        let mut candidate = now_millis;
        loop {
            let id = Self::from_millis(candidate);
            if !taken(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpotId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Ein Spot wie ihn die Remote-API speichert.
///
/// Unbekannte Felder (z.B. `icon_base64`) landen in `extra` und werden
/// beim Speichern unverändert zurückgeschrieben.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub interior: String,
    #[serde(default)]
    pub story: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Marker-Stil: leer/"default", "flag" oder "number-<n>"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Nur Kartenannotation, nicht in Listen anzeigen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_in_list: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Spot {
    /// Erstellt einen platzierten Spot mit Namen.
    pub fn new(id: SpotId, name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            lat: Some(position.lat),
            lng: Some(position.lng),
            ..Default::default()
        }
    }

    /// Position, falls der Spot platziert ist.
    ///
    /// Der Server speichert fehlende Koordinaten als 0/0, das gilt ebenfalls
    /// als unplatziert.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                if lat == 0.0 && lng == 0.0 {
                    None
                } else {
                    Some(GeoPoint::new(lat, lng))
                }
            }
            _ => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.position().is_some()
    }

    pub fn set_position(&mut self, position: GeoPoint) {
        self.lat = Some(position.lat);
        self.lng = Some(position.lng);
    }

    /// Ob der Spot in Listen angezeigt wird.
    pub fn is_listed(&self) -> bool {
        !self.hide_in_list.unwrap_or(false)
    }
}
