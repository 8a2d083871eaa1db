//! Zielort setzen und anfliegen.

use crate::app::state::{DestinationDraft, InteractionMode};
use crate::app::AppState;
use crate::core::{DestinationConfig, GeoPoint, MapState};
use crate::remote::RemoteBackend;

/// Öffnet den Zielort-Dialog. Der aktuelle Ausschnitt wird jetzt festgehalten.
pub fn begin(state: &mut AppState, position: GeoPoint, name: String) {
    if !state.interaction.accepts_new_mode() {
        log::warn!("Zielort ignoriert im Modus {}", state.interaction.name());
        return;
    }
    let draft = DestinationDraft {
        destination: position,
        map_state: MapState::from(state.view.viewport),
        name,
        is_update: state.has_destination(),
    };
    state.view.spot_popup = None;
    state.interaction = InteractionMode::SettingDestination(draft);
}

/// Schreibt Zielort und Ausschnitt in einer einzigen Config-Speicherung.
///
/// Ein noch wartendes Ausschnitt-Speichern entfällt, die Config ist vollständig.
pub fn confirm(state: &mut AppState, backend: &dyn RemoteBackend, name: &str) {
    let InteractionMode::SettingDestination(draft) = &state.interaction else {
        log::warn!("Kein offener Zielort-Dialog");
        return;
    };
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Zielort ohne Namen wird nicht gespeichert");
        return;
    }
    let destination = DestinationConfig::new(name, draft.destination);
    let map_state = draft.map_state;
    log::info!(
        "Zielort '{}' gesetzt: {:.5}, {:.5}",
        name,
        destination.lat,
        destination.lng
    );
    state.config.set_destination(destination, map_state);
    state.view.viewport_save.cancel();
    state.config.persist(backend, &state.session.scope);
    state.interaction = InteractionMode::Idle;
    state
        .notifications
        .success(format!("Zielort „{name}“ gespeichert"), state.now);
}

pub fn cancel(state: &mut AppState) {
    if matches!(state.interaction, InteractionMode::SettingDestination(_)) {
        state.interaction = InteractionMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::viewport;
    use crate::core::MapViewport;
    use std::time::Instant;
    use crate::remote::OfflineBackend;

    #[test]
    fn confirm_writes_destination_and_captured_viewport() {
        let mut state = AppState::new();
        state.view.viewport = MapViewport::new(GeoPoint::new(31.0, 121.0), 12);
        viewport::commit(&mut state, Instant::now());
        begin(&mut state, GeoPoint::new(31.2, 121.4), String::new());
        confirm(&mut state, &OfflineBackend, " Shanghai ");

        let dest = state.config.destination().expect("Zielort fehlt");
        assert_eq!(dest.name, "Shanghai");
        assert_eq!(dest.position(), GeoPoint::new(31.2, 121.4));
        assert_eq!(
            state.config.map_state(),
            Some(MapState {
                lat: 31.0,
                lng: 121.0,
                zoom: 12
            })
        );
        assert!(!state.has_pending_viewport_save());
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn empty_name_keeps_dialog_open() {
        let mut state = AppState::new();
        begin(&mut state, GeoPoint::new(31.2, 121.4), String::new());
        confirm(&mut state, &OfflineBackend, "   ");
        assert!(matches!(
            state.interaction,
            InteractionMode::SettingDestination(_)
        ));
        assert!(!state.has_destination());
    }
}
