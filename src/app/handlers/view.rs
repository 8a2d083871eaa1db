//! Handler für Kartenausschnitt, Frame-Takt und Kartenanbieter.

use std::time::Instant;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{GeoPoint, MapProvider};
use crate::remote::RemoteBackend;

/// Frame-Takt: Zeit übernehmen, fällige Debouncer auslösen, alte Meldungen entfernen.
pub fn advance_timers(state: &mut AppState, backend: &dyn RemoteBackend, now: Instant) {
    state.now = now;
    use_cases::viewport::poll_save(state, backend, now);
    use_cases::search::poll(state, backend, now);
    state.notifications.prune(now);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: [f32; 2]) {
    use_cases::viewport::pan(state, delta);
}

/// Zoomt stufenweise um einen Bildschirmpunkt.
pub fn zoom(state: &mut AppState, steps: i32, anchor: [f32; 2]) {
    use_cases::viewport::zoom(state, steps, anchor);
}

pub fn commit(state: &mut AppState, now: Instant) {
    use_cases::viewport::commit(state, now);
}

pub fn fly_to(state: &mut AppState, position: GeoPoint, zoom: Option<u8>, now: Instant) {
    use_cases::viewport::fly_to(state, position, zoom, now);
}

pub fn set_dragging(state: &mut AppState, active: bool) {
    state.view.dragging = active;
}

/// Wechselt den Kartenanbieter (sofortiges Speichern).
pub fn set_map_provider(state: &mut AppState, backend: &dyn RemoteBackend, provider: MapProvider) {
    use_cases::map_provider::set_provider(state, backend, provider);
}
