//! Laden, Ergebnisse übernehmen, Uploads und Abschluss ausstehender Schreibvorgänge.

use std::path::Path;
use std::time::Duration;

use crate::app::stores::{ConfigStore, GuideImageStore, SpotStore};
use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::SpotId;
use crate::remote::{ApiError, RemoteBackend, RemoteEvent, RemoteRequest};
use crate::shared::options::SHUTDOWN_FLUSH_TIMEOUT_SECS;

use super::{search, viewport};

/// Lädt Spots, Config und Bilder des aktiven Ziels neu.
///
/// Wartendes Ausschnitt-Speichern geht vorher raus. Das Backend stellt die
/// Ladeaufträge hinter alle offenen Schreibvorgänge, ohne zu blockieren.
/// Der aktuelle Ausschnitt bleibt erhalten, wenn er schon gesetzt war.
pub fn reload(state: &mut AppState, backend: &dyn RemoteBackend) {
    search::clear(state);
    viewport::flush_save(state, backend);
    state.interaction = InteractionMode::Idle;
    state.view.spot_popup = None;

    let scope = state.session.scope.clone();
    if !scope.is_valid() {
        log::warn!("Kein Plan ausgewählt, arbeite ohne Server");
        state.session.spots_loaded = true;
        state.session.config_loaded = true;
        state
            .notifications
            .info("Kein Plan ausgewählt (--plan)", state.now);
        viewport::apply_initial_viewport(state);
        return;
    }

    log::info!(
        "Lade Plan {} / Ziel {}",
        scope.plan_id,
        scope.dest_id.as_deref().unwrap_or("-")
    );
    state.session.spots_loaded = false;
    state.session.config_loaded = false;
    backend.submit(RemoteRequest::LoadSpots {
        scope: scope.clone(),
    });
    backend.submit(RemoteRequest::LoadConfig {
        scope: scope.clone(),
    });
    backend.submit(RemoteRequest::LoadGuideImages {
        scope: scope.clone(),
    });
    backend.submit(RemoteRequest::LoadPlans);
    if scope.dest_id.is_some() {
        backend.submit(RemoteRequest::LoadDestinations {
            plan_id: scope.plan_id,
        });
    }
}

/// Verarbeitet ein Ergebnis des Backends.
pub fn apply_event(state: &mut AppState, backend: &dyn RemoteBackend, event: RemoteEvent) {
    match event {
        RemoteEvent::SpotsLoaded(result) => {
            match result {
                Ok(spots) => {
                    log::info!("{} Spots geladen", spots.len());
                    state.spots = SpotStore::from_spots(spots);
                    drop_stale_references(state);
                }
                Err(err) => report_load_error(state, "Spots", &err),
            }
            state.session.spots_loaded = true;
            viewport::apply_initial_viewport(state);
        }
        RemoteEvent::ConfigLoaded(result) => {
            match result {
                Ok(config) => {
                    log::info!("Konfiguration geladen");
                    state.config = ConfigStore::new(config);
                    // Lokaler, noch nicht gespeicherter Ausschnitt hat Vorrang
                    if let Some(map_state) = state.view.viewport_save.peek().copied() {
                        state.config.set_map_state(map_state);
                    }
                }
                Err(err) => report_load_error(state, "Konfiguration", &err),
            }
            state.session.config_loaded = true;
            viewport::apply_initial_viewport(state);
        }
        RemoteEvent::GuideImagesLoaded(result) => match result {
            Ok(images) => state.guide_images = GuideImageStore::new(images),
            Err(err) => report_load_error(state, "Reiseführer-Bilder", &err),
        },
        RemoteEvent::PlansLoaded(result) => match result {
            Ok(plans) => {
                state.session.plan_name = plans
                    .into_iter()
                    .find(|p| p.id == state.session.scope.plan_id)
                    .map(|p| p.name);
            }
            Err(err) => log::warn!("Pläne nicht geladen: {}", err),
        },
        RemoteEvent::DestinationsLoaded(result) => match result {
            Ok(destinations) => {
                let dest_id = state.session.scope.dest_id.clone();
                state.session.destination_name = destinations
                    .into_iter()
                    .find(|d| Some(&d.id) == dest_id.as_ref())
                    .map(|d| d.name);
            }
            Err(err) => log::warn!("Ziele nicht geladen: {}", err),
        },
        RemoteEvent::WriteFinished { resource, result } => match result {
            Ok(()) => log::debug!("{} gespeichert", resource.label()),
            Err(err) => {
                log::error!("Speichern von {} fehlgeschlagen: {}", resource.label(), err);
                state.notifications.error(
                    format!("Speichern fehlgeschlagen ({}): {}", resource.label(), err),
                    state.now,
                );
            }
        },
        RemoteEvent::GuideImageUploaded(result) => match result {
            Ok(url) => {
                log::info!("Bild hochgeladen: {}", url);
                state.guide_images.append_url(url, SpotId::now_millis());
                state
                    .guide_images
                    .persist(backend, &state.session.scope);
                state.notifications.success("Bild hochgeladen", state.now);
            }
            Err(err) => {
                log::error!("Upload fehlgeschlagen: {}", err);
                state
                    .notifications
                    .error(format!("Upload fehlgeschlagen: {err}"), state.now);
            }
        },
        RemoteEvent::SearchFinished { generation, result } => {
            search::apply_result(state, generation, result);
        }
    }
}

/// Liest eine Bilddatei und reicht den Upload ein.
pub fn upload_guide_image(state: &mut AppState, backend: &dyn RemoteBackend, path: &Path) {
    if !state.session.scope.is_valid() {
        state
            .notifications
            .error("Upload nicht möglich: kein Plan ausgewählt", state.now);
        return;
    }
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("Datei {} nicht lesbar: {}", path.display(), err);
            state.notifications.error(
                format!("Datei nicht lesbar: {}", path.display()),
                state.now,
            );
            return;
        }
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bild".to_string());
    log::info!("Lade {} hoch ({} Bytes)", file_name, bytes.len());
    backend.submit(RemoteRequest::UploadGuideImage {
        scope: state.session.scope.clone(),
        file_name,
        bytes,
    });
}

/// Schreibt ein wartendes Ausschnitt-Speichern sofort und wartet auf alle Schreibvorgänge.
pub fn flush_pending_writes(state: &mut AppState, backend: &mut dyn RemoteBackend) -> bool {
    search::clear(state);
    viewport::flush_save(state, &*backend);
    let done = backend.flush(Duration::from_secs(SHUTDOWN_FLUSH_TIMEOUT_SECS));
    if !done {
        log::warn!("Nicht alle Schreibvorgänge wurden rechtzeitig abgeschlossen");
    }
    done
}

fn report_load_error(state: &mut AppState, what: &str, err: &ApiError) {
    log::error!("{} konnten nicht geladen werden: {}", what, err);
    state
        .notifications
        .error(format!("{what} konnten nicht geladen werden: {err}"), state.now);
}

/// Modi und Popups, die auf nicht mehr vorhandene Spots zeigen, schließen.
fn drop_stale_references(state: &mut AppState) {
    let stale_mode = match &state.interaction {
        InteractionMode::EditingSpot(draft) => !state.spots.contains(draft.id()),
        InteractionMode::PickingLocation { spot_id } => !state.spots.contains(spot_id),
        _ => false,
    };
    if stale_mode {
        state.interaction = InteractionMode::Idle;
    }
    if state
        .view
        .spot_popup
        .as_ref()
        .is_some_and(|p| !state.spots.contains(&p.spot_id))
    {
        state.view.spot_popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, GeoPoint, MapState, Spot};
    use crate::remote::{OfflineBackend, Resource, ResourceScope};

    #[test]
    fn reload_without_plan_marks_session_loaded() {
        let mut state = AppState::new();
        reload(&mut state, &OfflineBackend);
        assert!(!state.session.is_loading());
        assert!(state.view.initial_viewport_applied);
    }

    #[test]
    fn load_errors_still_finish_loading() {
        let mut state = AppState::new().with_scope(ResourceScope::new("p1", None));
        reload(&mut state, &OfflineBackend);
        assert!(state.session.is_loading());
        apply_event(
            &mut state,
            &OfflineBackend,
            RemoteEvent::SpotsLoaded(Err(ApiError::Transport("weg".into()))),
        );
        apply_event(
            &mut state,
            &OfflineBackend,
            RemoteEvent::ConfigLoaded(Ok(Config::default())),
        );
        assert!(!state.session.is_loading());
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn write_failure_keeps_local_state() {
        let mut state = AppState::new();
        state
            .spots
            .append(Spot::new(SpotId::from("1"), "A", GeoPoint::new(1.0, 1.0)));
        apply_event(
            &mut state,
            &OfflineBackend,
            RemoteEvent::WriteFinished {
                resource: Resource::Spots,
                result: Err(ApiError::Status {
                    status: 500,
                    url: "x".into(),
                }),
            },
        );
        assert_eq!(state.spots.len(), 1);
        let message = &state.notifications.visible().next().expect("Meldung fehlt").message;
        assert!(message.contains("Spots"));
    }

    #[test]
    fn pending_viewport_survives_config_load() {
        let mut state = AppState::new();
        state.view.viewport = crate::core::MapViewport::new(GeoPoint::new(31.0, 121.0), 12);
        viewport::commit(&mut state, std::time::Instant::now());
        apply_event(
            &mut state,
            &OfflineBackend,
            RemoteEvent::ConfigLoaded(Ok(Config {
                map_state: Some(MapState {
                    lat: 1.0,
                    lng: 1.0,
                    zoom: 5,
                }),
                ..Default::default()
            })),
        );
        assert_eq!(state.config.map_state().map(|m| m.zoom), Some(12));
    }
}
