//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::remote::{OfflineBackend, RemoteBackend};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Besitzt das Remote-Backend: alle Lese-/Schreibaufträge laufen über den
/// Controller und damit immer gegen den aktuellen Store-Stand.
pub struct AppController {
    backend: Box<dyn RemoteBackend>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller ohne Netzwerk.
    pub fn new() -> Self {
        Self::with_backend(Box::new(OfflineBackend))
    }

    pub fn with_backend(backend: Box<dyn RemoteBackend>) -> Self {
        Self { backend }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Holt eingetroffene Remote-Ergebnisse ab und verarbeitet sie.
    pub fn poll_remote(&mut self, state: &mut AppState) -> anyhow::Result<usize> {
        let events = self.backend.drain_events();
        let count = events.len();
        for event in events {
            self.handle_intent(state, AppIntent::RemoteEventReceived { event })?;
        }
        Ok(count)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command, state.now);
        use super::handlers;
        let backend = self.backend.as_ref();

        match command {
            // === Takt & Ansicht ===
            AppCommand::AdvanceTimers { now } => handlers::view::advance_timers(state, backend, now),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanViewport { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomViewport { steps, anchor } => {
                handlers::view::zoom(state, steps, anchor)
            }
            AppCommand::CommitViewport { now } => handlers::view::commit(state, now),
            AppCommand::FlyTo {
                position,
                zoom,
                now,
            } => handlers::view::fly_to(state, position, zoom, now),
            AppCommand::SetDragging { active } => handlers::view::set_dragging(state, active),

            // === Kontextmenü & Popup ===
            AppCommand::OpenContextMenu { position, screen } => {
                handlers::dialog::open_context_menu(state, position, screen)
            }
            AppCommand::DismissContextMenu => handlers::dialog::dismiss_context_menu(state),
            AppCommand::OpenSpotPopup { id } => handlers::spots::open_popup(state, id),
            AppCommand::CloseSpotPopup => handlers::spots::close_popup(state),

            // === Spots ===
            AppCommand::MarkLocation { position } => {
                handlers::spots::mark_location(state, backend, position)
            }
            AppCommand::BeginAddSpot { position, name } => {
                handlers::spots::begin_add(state, position, name)
            }
            AppCommand::ConfirmAddSpot { name } => {
                handlers::spots::confirm_add(state, backend, &name)
            }
            AppCommand::CancelAddSpot => handlers::spots::cancel_add(state),
            AppCommand::BeginEditSpot { id } => handlers::spots::begin_edit(state, &id),
            AppCommand::ConfirmEditSpot { spot } => {
                handlers::spots::confirm_edit(state, backend, spot)
            }
            AppCommand::CancelEditSpot => handlers::spots::cancel_edit(state),
            AppCommand::DeleteSpot { id } => handlers::spots::delete(state, backend, &id),
            AppCommand::ReorderSpots { from, to } => {
                handlers::spots::reorder(state, backend, from, to)
            }

            // === Platzieren ===
            AppCommand::BeginPickLocation { id } => handlers::spots::begin_pick(state, &id),
            AppCommand::CommitPickedLocation { position } => {
                handlers::spots::commit_pick(state, backend, position)
            }
            AppCommand::CancelPickLocation => handlers::spots::cancel_pick(state),

            // === Zielort ===
            AppCommand::BeginSetDestination { position, name } => {
                handlers::spots::begin_destination(state, position, name)
            }
            AppCommand::ConfirmDestination { name } => {
                handlers::spots::confirm_destination(state, backend, &name)
            }
            AppCommand::CancelDestination => handlers::spots::cancel_destination(state),

            // === Karte & Suche ===
            AppCommand::SetMapProvider { provider } => {
                handlers::view::set_map_provider(state, backend, provider)
            }
            AppCommand::UpdateSearchQuery {
                query,
                immediate,
                now,
            } => handlers::search::update_query(state, backend, query, immediate, now),

            // === Remote ===
            AppCommand::ApplyRemoteEvent { event } => {
                handlers::remote::apply_event(state, backend, event)
            }
            AppCommand::UploadGuideImage { path } => {
                handlers::remote::upload_guide_image(state, backend, &path)
            }
            AppCommand::Reload => handlers::remote::reload(state, backend),
            AppCommand::FlushPendingWrites => {
                handlers::remote::flush_pending_writes(state, self.backend.as_mut())
            }

            // === Benachrichtigungen & Anwendung ===
            AppCommand::PushNotification { level, message } => {
                handlers::dialog::push_notification(state, level, message)
            }
            AppCommand::DismissNotification { id } => {
                handlers::dialog::dismiss_notification(state, id)
            }
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen AppState.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        render_scene::build(state)
    }
}
