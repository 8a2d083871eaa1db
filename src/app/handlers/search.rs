//! Handler für die Ortssuche.

use std::time::Instant;

use crate::app::use_cases;
use crate::app::AppState;
use crate::remote::RemoteBackend;

/// Übernimmt eine neue Sucheingabe (entprellt oder sofort).
pub fn update_query(
    state: &mut AppState,
    backend: &dyn RemoteBackend,
    query: String,
    immediate: bool,
    now: Instant,
) {
    use_cases::search::update_query(state, backend, query, immediate, now);
}
