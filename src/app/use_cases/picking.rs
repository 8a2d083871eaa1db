//! Platzierungsmodus: der nächste Kartenklick setzt die Position eines Spots.

use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::{GeoPoint, SpotId};
use crate::remote::RemoteBackend;

/// Startet das Platzieren für einen Spot.
///
/// Ein erneuter Aufruf während des Platzierens tauscht nur das Ziel aus.
pub fn begin(state: &mut AppState, id: &SpotId) {
    let allowed = state.interaction.accepts_new_mode()
        || state.interaction.picking_target().is_some();
    if !allowed {
        log::warn!("Platzieren ignoriert im Modus {}", state.interaction.name());
        return;
    }
    let Some(spot) = state.spots.get(id) else {
        log::warn!("Spot {} existiert nicht", id);
        return;
    };
    let message = format!("Klicke auf die Karte, um „{}“ zu platzieren", spot.name);
    state.view.spot_popup = None;
    state.interaction = InteractionMode::PickingLocation {
        spot_id: id.clone(),
    };
    state.notifications.info(message, state.now);
}

/// Übernimmt die geklickte Position für den Ziel-Spot und speichert.
pub fn commit(state: &mut AppState, backend: &dyn RemoteBackend, position: GeoPoint) {
    let Some(id) = state.interaction.picking_target().cloned() else {
        log::warn!("Keine Platzierung aktiv");
        return;
    };
    state.interaction = InteractionMode::Idle;
    if state.spots.set_position(&id, position) {
        log::info!(
            "Spot {} platziert: {:.5}, {:.5}",
            id,
            position.lat,
            position.lng
        );
        state.spots.persist(backend, &state.session.scope);
        state.notifications.success("Position gespeichert", state.now);
    } else {
        log::warn!("Zu platzierender Spot {} existiert nicht mehr", id);
    }
}

/// Bricht das Platzieren ab; keine Position ändert sich.
pub fn cancel(state: &mut AppState) {
    if state.interaction.picking_target().is_some() {
        state.interaction = InteractionMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stores::SpotStore;
    use crate::core::Spot;
    use crate::remote::OfflineBackend;

    fn two_spots() -> AppState {
        let mut state = AppState::new();
        state.spots = SpotStore::from_spots(vec![
            Spot::new(SpotId::from("a"), "A", GeoPoint::new(30.0, 120.0)),
            Spot::new(SpotId::from("b"), "B", GeoPoint::new(31.0, 121.0)),
        ]);
        state
    }

    #[test]
    fn second_begin_replaces_target() {
        let mut state = two_spots();
        begin(&mut state, &SpotId::from("a"));
        begin(&mut state, &SpotId::from("b"));
        assert_eq!(
            state.interaction.picking_target(),
            Some(&SpotId::from("b"))
        );
        commit(&mut state, &OfflineBackend, GeoPoint::new(1.0, 2.0));
        let a = state.spots.get(&SpotId::from("a")).and_then(|s| s.position());
        let b = state.spots.get(&SpotId::from("b")).and_then(|s| s.position());
        assert_eq!(a, Some(GeoPoint::new(30.0, 120.0)));
        assert_eq!(b, Some(GeoPoint::new(1.0, 2.0)));
        assert!(state.interaction.is_idle());
    }

    #[test]
    fn unknown_spot_does_not_start_picking() {
        let mut state = two_spots();
        begin(&mut state, &SpotId::from("fehlt"));
        assert!(state.interaction.is_idle());
    }
}
