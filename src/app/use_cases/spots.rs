//! Use-Cases für Spots: anlegen, markieren, bearbeiten, löschen, sortieren.
//!
//! Jede Mutation läuft auf dem aktuellen Store-Stand und speichert danach das
//! komplette Array. Schlägt das Speichern fehl, bleibt der lokale Stand bestehen.

use glam::DVec2;

use crate::app::state::{AddSpotDraft, EditSpotDraft, InteractionMode, SpotPopup};
use crate::app::AppState;
use crate::core::{GeoPoint, Spot, SpotId};
use crate::remote::RemoteBackend;

/// Name eines per "Ort markieren" gesetzten Spots.
pub const MARKED_LOCATION_NAME: &str = "Markierter Ort";

fn new_spot_id(state: &AppState) -> SpotId {
    state.spots.next_id(SpotId::now_millis())
}

/// Setzt sofort einen versteckten Fahnen-Spot (kein Dialog).
pub fn mark_location(state: &mut AppState, backend: &dyn RemoteBackend, position: GeoPoint) {
    let mut spot = Spot::new(new_spot_id(state), MARKED_LOCATION_NAME, position);
    spot.icon = Some("flag".to_string());
    spot.hide_in_list = Some(true);
    log::info!("Ort markiert: {:.5}, {:.5}", position.lat, position.lng);
    state.spots.append(spot);
    state.spots.persist(backend, &state.session.scope);
    state.interaction = InteractionMode::Idle;
    state.notifications.success("Ort markiert", state.now);
}

/// Öffnet den "Spot hinzufügen"-Dialog für einen Punkt.
pub fn begin_add(state: &mut AppState, position: GeoPoint, name: String) {
    if !state.interaction.accepts_new_mode() {
        log::warn!(
            "Spot hinzufügen ignoriert im Modus {}",
            state.interaction.name()
        );
        return;
    }
    state.view.spot_popup = None;
    state.interaction = InteractionMode::AddingSpot(AddSpotDraft { position, name });
}

/// Legt den Spot aus dem offenen Dialog an. Leerer Name: Dialog bleibt offen.
pub fn confirm_add(state: &mut AppState, backend: &dyn RemoteBackend, name: &str) {
    let InteractionMode::AddingSpot(draft) = &state.interaction else {
        log::warn!("Kein offener Hinzufügen-Dialog");
        return;
    };
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Spot ohne Namen wird nicht angelegt");
        return;
    }
    let position = draft.position;
    let spot = Spot::new(new_spot_id(state), name, position);
    log::info!("Spot '{}' angelegt ({})", name, spot.id);
    state.spots.append(spot);
    state.spots.persist(backend, &state.session.scope);
    state.interaction = InteractionMode::Idle;
    state
        .notifications
        .success(format!("Spot „{name}“ hinzugefügt"), state.now);
}

pub fn cancel_add(state: &mut AppState) {
    if matches!(state.interaction, InteractionMode::AddingSpot(_)) {
        state.interaction = InteractionMode::Idle;
    }
}

/// Öffnet den Bearbeiten-Dialog mit einer Arbeitskopie des Spots.
pub fn begin_edit(state: &mut AppState, id: &SpotId) {
    if !state.interaction.accepts_new_mode() {
        log::warn!("Bearbeiten ignoriert im Modus {}", state.interaction.name());
        return;
    }
    let Some(spot) = state.spots.get(id) else {
        log::warn!("Spot {} existiert nicht", id);
        return;
    };
    state.view.spot_popup = None;
    state.interaction = InteractionMode::EditingSpot(EditSpotDraft::from_spot(spot));
}

/// Ersetzt den bearbeiteten Spot an seiner Position (nach ID).
pub fn confirm_edit(state: &mut AppState, backend: &dyn RemoteBackend, spot: Spot) {
    let InteractionMode::EditingSpot(draft) = &state.interaction else {
        log::warn!("Kein offener Bearbeiten-Dialog");
        return;
    };
    if draft.id() != &spot.id {
        log::warn!(
            "Bearbeitung für {} passt nicht zum offenen Dialog ({})",
            spot.id,
            draft.id()
        );
        return;
    }
    if spot.name.trim().is_empty() {
        log::warn!("Spot ohne Namen wird nicht gespeichert");
        return;
    }
    let name = spot.name.clone();
    if state.spots.replace(spot) {
        state.spots.persist(backend, &state.session.scope);
        state
            .notifications
            .success(format!("Spot „{name}“ gespeichert"), state.now);
    } else {
        log::warn!("Bearbeiteter Spot existiert nicht mehr");
        state
            .notifications
            .error("Spot existiert nicht mehr", state.now);
    }
    state.interaction = InteractionMode::Idle;
}

pub fn cancel_edit(state: &mut AppState) {
    if matches!(state.interaction, InteractionMode::EditingSpot(_)) {
        state.interaction = InteractionMode::Idle;
    }
}

/// Entfernt einen Spot; offene Dialoge/Popups zu ihm werden geschlossen.
pub fn delete(state: &mut AppState, backend: &dyn RemoteBackend, id: &SpotId) {
    let Some(removed) = state.spots.remove(id) else {
        log::warn!("Zu löschender Spot {} existiert nicht", id);
        return;
    };
    log::info!("Spot '{}' gelöscht", removed.name);
    state.spots.persist(backend, &state.session.scope);

    let bound_to_removed = match &state.interaction {
        InteractionMode::EditingSpot(draft) => draft.id() == id,
        InteractionMode::PickingLocation { spot_id } => spot_id == id,
        _ => false,
    };
    if bound_to_removed {
        state.interaction = InteractionMode::Idle;
    }
    if state
        .view
        .spot_popup
        .as_ref()
        .is_some_and(|p| &p.spot_id == id)
    {
        state.view.spot_popup = None;
    }
    state
        .notifications
        .success(format!("Spot „{}“ gelöscht", removed.name), state.now);
}

/// Verschiebt einen Spot in der Liste; ungültige Indizes ändern nichts.
pub fn reorder(state: &mut AppState, backend: &dyn RemoteBackend, from: usize, to: usize) {
    if from == to {
        return;
    }
    if state.spots.move_spot(from, to) {
        state.spots.persist(backend, &state.session.scope);
    } else {
        log::warn!("Ungültige Sortierung {} → {}", from, to);
    }
}

pub fn open_popup(state: &mut AppState, id: SpotId) {
    if state.spots.contains(&id) {
        state.view.spot_popup = Some(SpotPopup {
            spot_id: id,
            confirm_delete: false,
        });
    }
}

pub fn close_popup(state: &mut AppState) {
    state.view.spot_popup = None;
}

/// Obersten platzierten Spot unter einer Bildschirmposition finden.
///
/// Später gezeichnete Marker liegen oben und gewinnen bei Überlappung.
pub fn hit_test(state: &AppState, screen: [f32; 2]) -> Option<SpotId> {
    let size = state.view.size();
    let point = DVec2::new(f64::from(screen[0]), f64::from(screen[1]));
    let radius = f64::from(state.options.marker_pick_radius_px);

    let mut best: Option<(f64, &SpotId)> = None;
    for (spot, position) in state.spots.placed() {
        let distance = state
            .view
            .viewport
            .geo_to_screen(position, size)
            .distance(point);
        if distance > radius {
            continue;
        }
        if best.is_none_or(|(d, _)| distance <= d) {
            best = Some((distance, &spot.id));
        }
    }
    best.map(|(_, id)| id.clone())
}
