//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Zustandsmaschine der Karte: welcher Klick in welchem
//! Interaktionsmodus was auslöst. Das Mapping selbst mutiert nichts.

use super::context_menu::ContextMenuAction;
use super::state::InteractionMode;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FrameTick { now } => vec![AppCommand::AdvanceTimers { now }],
        AppIntent::ViewportResized { size } => {
            if state.view.viewport_size == size {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }

        // === Karten-Gesten ===
        AppIntent::MapClicked { position, screen } => map_click(state, position, screen),
        AppIntent::MapSecondaryClicked { position, screen } => {
            if state.interaction.accepts_new_mode() {
                vec![AppCommand::OpenContextMenu { position, screen }]
            } else {
                vec![]
            }
        }
        AppIntent::MapDragStarted => {
            if state.interaction.is_modal() {
                return vec![];
            }
            let mut commands = dismiss_menu_if_open(state);
            commands.push(AppCommand::SetDragging { active: true });
            commands
        }
        AppIntent::MapPanned { delta } => {
            if state.interaction.is_modal() {
                vec![]
            } else {
                vec![AppCommand::PanViewport { delta }]
            }
        }
        AppIntent::MapDragEnded { now } => {
            if !state.view.dragging {
                return vec![];
            }
            vec![
                AppCommand::SetDragging { active: false },
                AppCommand::CommitViewport { now },
            ]
        }
        AppIntent::MapZoomed { steps, anchor, now } => {
            if state.interaction.is_modal() || steps == 0 {
                return vec![];
            }
            let mut commands = dismiss_menu_if_open(state);
            commands.push(AppCommand::ZoomViewport { steps, anchor });
            commands.push(AppCommand::CommitViewport { now });
            commands
        }
        AppIntent::EscapePressed => escape(state),

        // === Kontextmenü ===
        AppIntent::ContextMenuActionSelected { action } => context_menu_action(state, action),
        AppIntent::ContextMenuDismissed => dismiss_menu_if_open(state),

        // === Spot-Dialoge ===
        AppIntent::AddSpotConfirmed { name } => vec![AppCommand::ConfirmAddSpot { name }],
        AppIntent::AddSpotCancelled => vec![AppCommand::CancelAddSpot],
        AppIntent::EditSpotRequested { id } => {
            vec![AppCommand::CloseSpotPopup, AppCommand::BeginEditSpot { id }]
        }
        AppIntent::EditSpotConfirmed { spot } => vec![AppCommand::ConfirmEditSpot { spot }],
        AppIntent::EditSpotCancelled => vec![AppCommand::CancelEditSpot],
        AppIntent::DeleteSpotRequested { id } => vec![AppCommand::DeleteSpot { id }],
        AppIntent::SpotPopupClosed => vec![AppCommand::CloseSpotPopup],

        // === Platzieren ===
        AppIntent::PickLocationRequested { id } => vec![AppCommand::BeginPickLocation { id }],
        AppIntent::PickLocationCancelled => vec![AppCommand::CancelPickLocation],

        // === Zielort ===
        AppIntent::DestinationConfirmed { name } => vec![AppCommand::ConfirmDestination { name }],
        AppIntent::DestinationCancelled => vec![AppCommand::CancelDestination],
        AppIntent::LocateDestinationRequested => {
            let Some(destination) = state.config.destination() else {
                return vec![AppCommand::PushNotification {
                    level: crate::shared::NotificationLevel::Info,
                    message: "Kein Zielort gesetzt".to_string(),
                }];
            };
            vec![AppCommand::FlyTo {
                position: destination.position(),
                zoom: state.config.map_state().map(|m| m.zoom),
                now: state.now,
            }]
        }

        // === Spot-Liste ===
        AppIntent::SpotFocusRequested { id } => {
            let Some(position) = state.spots.get(&id).and_then(|s| s.position()) else {
                return vec![AppCommand::PushNotification {
                    level: crate::shared::NotificationLevel::Info,
                    message: "Spot hat noch keine Position".to_string(),
                }];
            };
            vec![
                AppCommand::FlyTo {
                    position,
                    zoom: Some(state.options.spot_focus_zoom),
                    now: state.now,
                },
                AppCommand::OpenSpotPopup { id },
            ]
        }
        AppIntent::ReorderSpotsRequested { from, to } => {
            vec![AppCommand::ReorderSpots { from, to }]
        }

        // === Karte & Suche ===
        AppIntent::MapProviderChanged { provider } => {
            if state.config.provider() == provider {
                vec![]
            } else {
                vec![AppCommand::SetMapProvider { provider }]
            }
        }
        AppIntent::SearchQueryChanged {
            query,
            immediate,
            now,
        } => vec![AppCommand::UpdateSearchQuery {
            query,
            immediate,
            now,
        }],
        AppIntent::SearchResultLocateRequested { index } => {
            match use_cases::search::result(state, index) {
                Some(hit) => vec![AppCommand::FlyTo {
                    position: hit.position(),
                    zoom: Some(state.options.search_result_zoom),
                    now: state.now,
                }],
                None => vec![],
            }
        }
        AppIntent::SearchResultAsSpotRequested { index } => {
            match use_cases::search::result(state, index) {
                Some(hit) if state.interaction.accepts_new_mode() => vec![
                    AppCommand::DismissContextMenu,
                    AppCommand::BeginAddSpot {
                        position: hit.position(),
                        name: hit.short_name().to_string(),
                    },
                ],
                _ => vec![],
            }
        }
        AppIntent::SearchResultAsDestinationRequested { index } => {
            match use_cases::search::result(state, index) {
                Some(hit) if state.interaction.accepts_new_mode() => vec![
                    AppCommand::DismissContextMenu,
                    AppCommand::FlyTo {
                        position: hit.position(),
                        zoom: Some(state.options.search_result_zoom),
                        now: state.now,
                    },
                    AppCommand::BeginSetDestination {
                        position: hit.position(),
                        name: hit.short_name().to_string(),
                    },
                ],
                _ => vec![],
            }
        }

        // === Reiseführer-Bilder ===
        AppIntent::GuideImageFileChosen { path } => vec![AppCommand::UploadGuideImage { path }],

        // === System ===
        AppIntent::RemoteEventReceived { event } => vec![AppCommand::ApplyRemoteEvent { event }],
        AppIntent::NotificationReported { level, message } => {
            vec![AppCommand::PushNotification { level, message }]
        }
        AppIntent::NotificationDismissed { id } => vec![AppCommand::DismissNotification { id }],
        AppIntent::ReloadRequested => vec![AppCommand::Reload],
        AppIntent::ShutdownRequested => vec![AppCommand::FlushPendingWrites],
        AppIntent::ExitRequested => vec![AppCommand::FlushPendingWrites, AppCommand::RequestExit],
    }
}

/// Primärklick je nach Interaktionsmodus.
fn map_click(
    state: &AppState,
    position: crate::core::GeoPoint,
    screen: [f32; 2],
) -> Vec<AppCommand> {
    match &state.interaction {
        InteractionMode::PickingLocation { .. } => {
            vec![AppCommand::CommitPickedLocation { position }]
        }
        InteractionMode::ContextMenuOpen(_) => vec![AppCommand::DismissContextMenu],
        InteractionMode::Idle => {
            if state.view.spot_popup.is_some() {
                return vec![AppCommand::CloseSpotPopup];
            }
            match use_cases::spots::hit_test(state, screen) {
                Some(id) => vec![AppCommand::OpenSpotPopup { id }],
                None => vec![AppCommand::OpenContextMenu { position, screen }],
            }
        }
        // Dialog offen: Karte ignoriert Klicks
        _ => vec![],
    }
}

fn context_menu_action(state: &AppState, action: ContextMenuAction) -> Vec<AppCommand> {
    let InteractionMode::ContextMenuOpen(menu) = &state.interaction else {
        log::warn!("Menüaktion {:?} ohne offenes Kontextmenü", action);
        return vec![];
    };
    let position = menu.position;
    match action {
        ContextMenuAction::MarkLocation => vec![
            AppCommand::DismissContextMenu,
            AppCommand::MarkLocation { position },
        ],
        ContextMenuAction::AddSpot => vec![AppCommand::BeginAddSpot {
            position,
            name: String::new(),
        }],
        ContextMenuAction::SetDestination => vec![AppCommand::BeginSetDestination {
            position,
            name: state
                .config
                .destination()
                .map(|d| d.name.clone())
                .unwrap_or_default(),
        }],
    }
}

/// Escape bricht den aktiven Modus ab, sonst schließt es ein offenes Popup.
fn escape(state: &AppState) -> Vec<AppCommand> {
    match &state.interaction {
        InteractionMode::ContextMenuOpen(_) => vec![AppCommand::DismissContextMenu],
        InteractionMode::AddingSpot(_) => vec![AppCommand::CancelAddSpot],
        InteractionMode::EditingSpot(_) => vec![AppCommand::CancelEditSpot],
        InteractionMode::PickingLocation { .. } => vec![AppCommand::CancelPickLocation],
        InteractionMode::SettingDestination(_) => vec![AppCommand::CancelDestination],
        InteractionMode::Idle if state.view.spot_popup.is_some() => {
            vec![AppCommand::CloseSpotPopup]
        }
        InteractionMode::Idle => vec![],
    }
}

fn dismiss_menu_if_open(state: &AppState) -> Vec<AppCommand> {
    if matches!(state.interaction, InteractionMode::ContextMenuOpen(_)) {
        vec![AppCommand::DismissContextMenu]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests;
