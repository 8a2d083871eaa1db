//! Use-Case-Funktionen für Kartenausschnitt und dessen verzögertes Speichern.

use std::time::Instant;

use glam::DVec2;

use crate::app::AppState;
use crate::core::{GeoPoint, MapState, MapViewport};
use crate::remote::RemoteBackend;

/// Aktualisiert die gespeicherte Größe der Kartenfläche.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Karte um ein Pixel-Delta (Drag-Richtung).
pub fn pan(state: &mut AppState, delta: [f32; 2]) {
    state
        .view
        .viewport
        .pan_by_pixels(DVec2::new(f64::from(delta[0]), f64::from(delta[1])));
}

/// Zoomt stufenweise um einen Bildschirmpunkt.
pub fn zoom(state: &mut AppState, steps: i32, anchor: [f32; 2]) {
    let size = state.view.size();
    let limits = state.options.zoom_limits();
    state.view.viewport.zoom_by_steps(
        steps,
        DVec2::new(f64::from(anchor[0]), f64::from(anchor[1])),
        size,
        limits,
    );
}

/// Übernimmt den aktuellen Ausschnitt in die Config und plant das Speichern.
///
/// Jeder weitere Aufruf innerhalb der Ruhezeit verschiebt den Schreibvorgang.
pub fn commit(state: &mut AppState, now: Instant) {
    let map_state = MapState::from(state.view.viewport);
    state.config.set_map_state(map_state);
    state.view.viewport_save.schedule(map_state, now);
}

/// Springt zu einem Punkt und schreibt den Ausschnitt fest.
pub fn fly_to(state: &mut AppState, position: GeoPoint, zoom: Option<u8>, now: Instant) {
    if !position.is_valid() {
        log::warn!("Ungültige Zielposition ignoriert: {:?}", position);
        return;
    }
    let (min, max) = state.options.zoom_limits();
    let zoom = zoom.unwrap_or(state.view.viewport.zoom).clamp(min, max);
    state.view.viewport = MapViewport {
        center: position,
        zoom,
    };
    commit(state, now);
}

/// Speichert den Ausschnitt, sobald die Ruhezeit abgelaufen ist.
pub fn poll_save(state: &mut AppState, backend: &dyn RemoteBackend, now: Instant) {
    if state.view.viewport_save.poll(now).is_some() {
        state.config.persist(backend, &state.session.scope);
    }
}

/// Führt ein ausstehendes Speichern sofort aus (Reload, Beenden).
pub fn flush_save(state: &mut AppState, backend: &dyn RemoteBackend) -> bool {
    if state.view.viewport_save.flush().is_some() {
        state.config.persist(backend, &state.session.scope);
        true
    } else {
        false
    }
}

/// Setzt den Startausschnitt, sobald Spots und Config geladen sind.
///
/// Reihenfolge: gespeicherter Ausschnitt, Zielort, erster platzierter Spot, Fallback.
pub fn apply_initial_viewport(state: &mut AppState) {
    if state.view.initial_viewport_applied || state.session.is_loading() {
        return;
    }
    let default_zoom = state.options.default_zoom;
    let viewport = if let Some(map_state) = state.config.map_state() {
        MapViewport::from(map_state)
    } else if let Some(destination) = state.config.destination() {
        MapViewport::new(destination.position(), default_zoom)
    } else if let Some((_, position)) = state.spots.placed().next() {
        MapViewport::new(position, default_zoom)
    } else {
        MapViewport::new(state.options.default_center(), default_zoom)
    };
    let (min, max) = state.options.zoom_limits();
    state.view.viewport = MapViewport {
        center: viewport.center,
        zoom: viewport.zoom.clamp(min, max),
    };
    state.view.initial_viewport_applied = true;
    log::info!(
        "Startausschnitt: {:.5}, {:.5} @ z{}",
        state.view.viewport.center.lat,
        state.view.viewport.center.lng,
        state.view.viewport.zoom
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, DestinationConfig, Spot, SpotId};
    use crate::app::stores::{ConfigStore, SpotStore};
    use approx::assert_relative_eq;
    use std::time::Duration;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.session.spots_loaded = true;
        state.session.config_loaded = true;
        state
    }

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();
        resize(&mut state, [1920.0, 1080.0]);
        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }

    #[test]
    fn commit_updates_local_map_state_and_schedules_save() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        state.view.viewport = MapViewport::new(GeoPoint::new(31.0, 121.0), 12);
        commit(&mut state, t0);
        assert_eq!(
            state.config.map_state(),
            Some(MapState {
                lat: 31.0,
                lng: 121.0,
                zoom: 12
            })
        );
        assert_eq!(
            state.view.viewport_save.deadline(),
            Some(t0 + Duration::from_millis(1000))
        );
    }

    #[test]
    fn initial_viewport_prefers_map_state() {
        let mut state = loaded_state();
        state.config = ConfigStore::new(Config {
            map_state: Some(MapState {
                lat: 31.0,
                lng: 121.0,
                zoom: 11,
            }),
            destination: Some(DestinationConfig::new("X", GeoPoint::new(1.0, 2.0))),
            ..Default::default()
        });
        apply_initial_viewport(&mut state);
        assert_eq!(state.view.viewport.zoom, 11);
        assert_relative_eq!(state.view.viewport.center.lat, 31.0);
    }

    #[test]
    fn initial_viewport_falls_back_to_destination_then_spot() {
        let mut state = loaded_state();
        state.config = ConfigStore::new(Config {
            destination: Some(DestinationConfig::new("Ziel", GeoPoint::new(30.0, 120.0))),
            ..Default::default()
        });
        apply_initial_viewport(&mut state);
        assert_relative_eq!(state.view.viewport.center.lng, 120.0);
        assert_eq!(state.view.viewport.zoom, 13);

        let mut state = loaded_state();
        state.spots = SpotStore::from_spots(vec![
            Spot {
                id: SpotId::from("unplatziert"),
                name: "A".into(),
                ..Default::default()
            },
            Spot::new(SpotId::from("2"), "B", GeoPoint::new(22.5, 114.1)),
        ]);
        apply_initial_viewport(&mut state);
        assert_relative_eq!(state.view.viewport.center.lat, 22.5);
    }

    #[test]
    fn initial_viewport_waits_for_both_loads() {
        let mut state = AppState::new();
        state.session.spots_loaded = true;
        apply_initial_viewport(&mut state);
        assert!(!state.view.initial_viewport_applied);
    }

    #[test]
    fn fly_to_clamps_zoom() {
        let mut state = AppState::new();
        fly_to(&mut state, GeoPoint::new(10.0, 10.0), Some(25), Instant::now());
        assert_eq!(state.view.viewport.zoom, 18);
        assert!(state.has_pending_viewport_save());
    }
}
