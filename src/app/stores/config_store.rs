//! Konfiguration des aktiven Ziels (Zielort, Ausschnitt, Kartenanbieter).

use crate::core::{Config, DestinationConfig, MapProvider, MapState};
use crate::remote::{RemoteBackend, RemoteRequest, ResourceScope};

/// Hält die aktuelle `Config`; gespeichert wird immer das ganze Objekt.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    config: Config,
}

impl ConfigStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn current(&self) -> &Config {
        &self.config
    }

    pub fn provider(&self) -> MapProvider {
        self.config.provider()
    }

    pub fn destination(&self) -> Option<&DestinationConfig> {
        self.config.destination.as_ref()
    }

    pub fn map_state(&self) -> Option<MapState> {
        self.config.map_state
    }

    pub fn set_map_state(&mut self, map_state: MapState) {
        self.config.map_state = Some(map_state);
    }

    /// Zielort und Ausschnitt gemeinsam setzen (eine Schreiboperation).
    pub fn set_destination(&mut self, destination: DestinationConfig, map_state: MapState) {
        self.config.destination = Some(destination);
        self.config.map_state = Some(map_state);
    }

    pub fn set_provider(&mut self, provider: MapProvider) {
        self.config.map_provider = Some(provider.key().to_string());
    }

    /// Schreibt die komplette Config zurück.
    pub fn persist(&self, backend: &dyn RemoteBackend, scope: &ResourceScope) -> bool {
        if !scope.is_valid() {
            log::warn!("Konfiguration nicht gespeichert: kein Plan ausgewählt");
            return false;
        }
        log::info!("Speichere Konfiguration");
        backend.submit(RemoteRequest::SaveConfig {
            scope: scope.clone(),
            config: self.config.clone(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoPoint;

    #[test]
    fn test_set_destination_also_sets_map_state() {
        let mut store = ConfigStore::default();
        store.set_destination(
            DestinationConfig::new("Shanghai", GeoPoint::new(31.2, 121.4)),
            MapState {
                lat: 31.0,
                lng: 121.0,
                zoom: 12,
            },
        );
        assert_eq!(store.destination().map(|d| d.name.as_str()), Some("Shanghai"));
        assert_eq!(store.map_state().map(|m| m.zoom), Some(12));
    }

    #[test]
    fn test_set_provider_keeps_other_fields() {
        let mut store = ConfigStore::new(Config {
            map_image: "karte.png".into(),
            ..Default::default()
        });
        store.set_provider(MapProvider::Osm);
        assert_eq!(store.current().map_provider.as_deref(), Some("osm"));
        assert_eq!(store.current().map_image, "karte.png");
    }
}
