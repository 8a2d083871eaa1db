use std::time::Duration;

use crate::core::{MapState, MapViewport, SpotId};
use crate::shared::Debouncer;

/// Offenes Popup eines Spot-Markers (kein eigener Interaktionsmodus).
#[derive(Debug, Clone, PartialEq)]
pub struct SpotPopup {
    pub spot_id: SpotId,
    /// Löschen wurde angeklickt, wartet auf Bestätigung
    pub confirm_delete: bool,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktueller Kartenausschnitt
    pub viewport: MapViewport,
    /// Aktuelle Größe der Kartenfläche in Pixel
    pub viewport_size: [f32; 2],
    /// Verzögertes Speichern des Ausschnitts
    pub viewport_save: Debouncer<MapState>,
    /// Startausschnitt wurde nach dem Laden gesetzt
    pub initial_viewport_applied: bool,
    /// Popup eines angeklickten Markers
    pub spot_popup: Option<SpotPopup>,
    /// Karte wird gerade gezogen
    pub dragging: bool,
}

impl ViewState {
    pub fn new(viewport: MapViewport, save_delay: Duration) -> Self {
        Self {
            viewport,
            viewport_size: [0.0, 0.0],
            viewport_save: Debouncer::new(save_delay),
            initial_viewport_applied: false,
            spot_popup: None,
            dragging: false,
        }
    }

    /// Größe als DVec2 (mindestens 1×1, damit Umrechnungen definiert bleiben).
    pub fn size(&self) -> glam::DVec2 {
        glam::DVec2::new(
            f64::from(self.viewport_size[0].max(1.0)),
            f64::from(self.viewport_size[1].max(1.0)),
        )
    }

    pub fn has_size(&self) -> bool {
        self.viewport_size[0] > 0.0 && self.viewport_size[1] > 0.0
    }
}
