//! Ortssuche: Eingabe entprellen, Anfrage starten, Ergebnisse übernehmen.
//!
//! Jede gestartete Suche bekommt eine neue Generation. Ergebnisse älterer
//! Generationen werden verworfen, auch wenn sie später eintreffen.

use std::time::Instant;

use crate::app::AppState;
use crate::core::{GeocodeProvider, SearchResult};
use crate::remote::{GeocodeError, RemoteBackend, SearchRequest};

/// Neue Eingabe im Suchfeld.
///
/// Leere Eingabe leert die Treffer ohne Anfrage. `immediate` (Enter) umgeht die Ruhezeit.
pub fn update_query(
    state: &mut AppState,
    backend: &dyn RemoteBackend,
    query: String,
    immediate: bool,
    now: Instant,
) {
    state.search.query = query.clone();
    let trimmed = query.trim();
    if trimmed.is_empty() {
        clear(state);
        return;
    }
    if immediate {
        state.search.debounce.cancel();
        dispatch(state, backend, trimmed.to_string());
    } else {
        // Jede Eingabe macht die laufende Suche ungültig
        state.search.cancel_in_flight();
        state.search.debounce.schedule(trimmed.to_string(), now);
    }
}

/// Startet die entprellte Suche, sobald die Ruhezeit abgelaufen ist.
pub fn poll(state: &mut AppState, backend: &dyn RemoteBackend, now: Instant) {
    if let Some(query) = state.search.debounce.poll(now) {
        dispatch(state, backend, query);
    }
}

/// Schickt eine Suchanfrage ab und bricht die vorherige ab.
pub fn dispatch(state: &mut AppState, backend: &dyn RemoteBackend, query: String) {
    let provider = state.config.provider().geocoder();
    let bounds = match provider {
        GeocodeProvider::Nominatim if state.view.has_size() => Some(
            state
                .view
                .viewport
                .visible_bounds(state.view.size()),
        ),
        _ => None,
    };
    let search = state.search.begin(query);
    log::info!(
        "Suche #{} '{}' über {:?}",
        search.generation,
        search.query,
        provider
    );
    backend.search(
        SearchRequest {
            generation: search.generation,
            query: search.query,
            provider,
            bounds,
        },
        search.cancel,
    );
}

/// Übernimmt das Ergebnis einer Suche, sofern es zur aktuellen Generation gehört.
pub fn apply_result(
    state: &mut AppState,
    generation: u64,
    result: Result<Vec<SearchResult>, GeocodeError>,
) {
    if !state.search.is_current(generation) {
        log::debug!(
            "Veraltetes Suchergebnis #{} verworfen (aktuell #{})",
            generation,
            state.search.last_generation()
        );
        return;
    }
    state.search.in_flight = None;
    match result {
        Ok(results) => {
            log::info!("Suche #{}: {} Treffer", generation, results.len());
            if results.is_empty() {
                state.notifications.info("Keine Treffer gefunden", state.now);
            }
            state.search.results = results;
            state.search.error = None;
        }
        Err(GeocodeError::Cancelled) => {
            log::debug!("Suche #{} abgebrochen", generation);
        }
        Err(err) => {
            log::warn!("Suche #{} fehlgeschlagen: {}", generation, err);
            state.notifications.error(err.to_string(), state.now);
            state.search.results.clear();
            state.search.error = Some(err);
        }
    }
}

/// Leert Treffer und Fehler und bricht laufende/geplante Suchen ab.
pub fn clear(state: &mut AppState) {
    state.search.debounce.cancel();
    state.search.cancel_in_flight();
    state.search.results.clear();
    state.search.error = None;
}

pub fn result(state: &AppState, index: usize) -> Option<&SearchResult> {
    state.search.results.get(index)
}
