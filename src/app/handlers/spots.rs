//! Handler für Spots, Platzieren und Zielort.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{GeoPoint, Spot, SpotId};
use crate::remote::RemoteBackend;

/// Setzt einen versteckten Fahnen-Spot am Menüpunkt.
pub fn mark_location(state: &mut AppState, backend: &dyn RemoteBackend, position: GeoPoint) {
    use_cases::spots::mark_location(state, backend, position);
}

pub fn begin_add(state: &mut AppState, position: GeoPoint, name: String) {
    use_cases::spots::begin_add(state, position, name);
}

pub fn confirm_add(state: &mut AppState, backend: &dyn RemoteBackend, name: &str) {
    use_cases::spots::confirm_add(state, backend, name);
}

pub fn cancel_add(state: &mut AppState) {
    use_cases::spots::cancel_add(state);
}

pub fn begin_edit(state: &mut AppState, id: &SpotId) {
    use_cases::spots::begin_edit(state, id);
}

pub fn confirm_edit(state: &mut AppState, backend: &dyn RemoteBackend, spot: Spot) {
    use_cases::spots::confirm_edit(state, backend, spot);
}

pub fn cancel_edit(state: &mut AppState) {
    use_cases::spots::cancel_edit(state);
}

pub fn delete(state: &mut AppState, backend: &dyn RemoteBackend, id: &SpotId) {
    use_cases::spots::delete(state, backend, id);
}

pub fn reorder(state: &mut AppState, backend: &dyn RemoteBackend, from: usize, to: usize) {
    use_cases::spots::reorder(state, backend, from, to);
}

pub fn open_popup(state: &mut AppState, id: SpotId) {
    use_cases::spots::open_popup(state, id);
}

pub fn close_popup(state: &mut AppState) {
    use_cases::spots::close_popup(state);
}

/// Startet das Platzieren eines Spots per Kartenklick.
pub fn begin_pick(state: &mut AppState, id: &SpotId) {
    use_cases::picking::begin(state, id);
}

pub fn commit_pick(state: &mut AppState, backend: &dyn RemoteBackend, position: GeoPoint) {
    use_cases::picking::commit(state, backend, position);
}

pub fn cancel_pick(state: &mut AppState) {
    use_cases::picking::cancel(state);
}

/// Öffnet den Zielort-Dialog mit aktuellem Ausschnitt.
pub fn begin_destination(state: &mut AppState, position: GeoPoint, name: String) {
    use_cases::destination::begin(state, position, name);
}

pub fn confirm_destination(state: &mut AppState, backend: &dyn RemoteBackend, name: &str) {
    use_cases::destination::confirm(state, backend, name);
}

pub fn cancel_destination(state: &mut AppState) {
    use_cases::destination::cancel(state);
}
