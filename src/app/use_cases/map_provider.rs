//! Kartenanbieter umschalten.

use crate::app::AppState;
use crate::core::MapProvider;
use crate::remote::RemoteBackend;

/// Setzt den Kartenanbieter und speichert die Config sofort.
///
/// Die gespeicherte Config enthält bereits den aktuellen Ausschnitt, ein
/// wartendes Ausschnitt-Speichern entfällt daher. Suchtreffer des alten
/// Geocoders werden verworfen.
pub fn set_provider(state: &mut AppState, backend: &dyn RemoteBackend, provider: MapProvider) {
    if state.config.provider() == provider {
        return;
    }
    log::info!("Kartenanbieter: {}", provider.label());
    state.config.set_provider(provider);
    state.view.viewport_save.cancel();
    state.config.persist(backend, &state.session.scope);
    super::search::clear(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::OfflineBackend;

    #[test]
    fn switching_provider_drops_pending_viewport_save() {
        let mut state = AppState::new();
        super::super::viewport::commit(&mut state, std::time::Instant::now());
        set_provider(&mut state, &OfflineBackend, MapProvider::Osm);
        assert_eq!(state.config.provider(), MapProvider::Osm);
        assert_eq!(state.config.current().map_provider.as_deref(), Some("osm"));
        assert!(!state.has_pending_viewport_save());
    }
}
