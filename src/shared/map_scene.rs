//! Karten-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ClientOptions;
use crate::core::{GeoPoint, MapProvider, MapViewport, MarkerIcon, SpotId};

/// Ein Spot-Marker, wie er gezeichnet wird.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotMarker {
    pub id: SpotId,
    pub name: String,
    pub position: GeoPoint,
    pub icon: MarkerIcon,
}

/// Ein Suchtreffer-Marker mit 1-basiertem Rang.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMarker {
    pub rank: u32,
    pub label: String,
    pub position: GeoPoint,
}

/// Read-only Daten für einen Karten-Frame.
///
/// Zeichenreihenfolge: Spots, Suchtreffer, Zielort (oben).
#[derive(Debug, Clone)]
pub struct MapScene {
    pub viewport: MapViewport,
    /// Kartenfläche in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    pub provider: MapProvider,
    /// Nur platzierte Spots, in Store-Reihenfolge
    pub spots: Vec<SpotMarker>,
    pub search_results: Vec<SearchMarker>,
    /// Zielort (Name, Position)
    pub destination: Option<(String, GeoPoint)>,
    /// Spot, dessen Popup offen ist (Hervorhebung)
    pub highlighted_spot: Option<SpotId>,
    /// Position, auf die das Kontextmenü zeigt
    pub pending_point: Option<GeoPoint>,
    /// Platzierungsmodus aktiv (Fadenkreuz)
    pub picking: bool,
    pub options: ClientOptions,
}

impl MapScene {
    pub fn has_content(&self) -> bool {
        !self.spots.is_empty() || self.destination.is_some() || !self.search_results.is_empty()
    }
}
