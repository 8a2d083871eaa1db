//! Handler für Laden, Remote-Ergebnisse, Uploads und Flush.

use std::path::Path;

use crate::app::use_cases;
use crate::app::AppState;
use crate::remote::{RemoteBackend, RemoteEvent};

pub fn reload(state: &mut AppState, backend: &dyn RemoteBackend) {
    use_cases::remote_sync::reload(state, backend);
}

/// Verarbeitet ein Ergebnis aus dem Backend.
pub fn apply_event(state: &mut AppState, backend: &dyn RemoteBackend, event: RemoteEvent) {
    use_cases::remote_sync::apply_event(state, backend, event);
}

pub fn upload_guide_image(state: &mut AppState, backend: &dyn RemoteBackend, path: &Path) {
    use_cases::remote_sync::upload_guide_image(state, backend, path);
}

/// Schreibt Wartendes sofort und wartet begrenzt auf das Backend.
pub fn flush_pending_writes(state: &mut AppState, backend: &mut dyn RemoteBackend) {
    use_cases::remote_sync::flush_pending_writes(state, backend);
}
