use std::time::Instant;

use crate::app::context_menu::ContextMenuAction;
use crate::app::state::{AddSpotDraft, ContextMenuState, InteractionMode, SpotPopup};
use crate::app::stores::SpotStore;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{GeoPoint, MapViewport, Spot, SpotId};

use super::map_intent_to_commands;

fn sized_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state.view.viewport = MapViewport::new(GeoPoint::new(31.0, 121.0), 12);
    state
}

fn menu_open(state: &mut AppState) {
    state.interaction = InteractionMode::ContextMenuOpen(ContextMenuState {
        position: GeoPoint::new(31.2, 121.4),
        screen: [100.0, 100.0],
    });
}

#[test]
fn click_in_idle_opens_context_menu() {
    let state = sized_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPoint::new(31.2, 121.4),
            screen: [10.0, 10.0],
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::OpenContextMenu { .. }));
}

#[test]
fn click_on_marker_opens_popup() {
    let mut state = sized_state();
    state.spots = SpotStore::from_spots(vec![Spot::new(
        SpotId::from("1"),
        "Mitte",
        GeoPoint::new(31.0, 121.0),
    )]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPoint::new(31.0, 121.0),
            screen: [400.0, 300.0],
        },
    );

    assert!(matches!(&commands[..], [AppCommand::OpenSpotPopup { id }] if id.as_str() == "1"));
}

#[test]
fn click_with_open_popup_only_closes_it() {
    let mut state = sized_state();
    state.view.spot_popup = Some(SpotPopup {
        spot_id: SpotId::from("1"),
        confirm_delete: false,
    });

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPoint::new(31.0, 121.0),
            screen: [10.0, 10.0],
        },
    );

    assert!(matches!(&commands[..], [AppCommand::CloseSpotPopup]));
}

#[test]
fn click_drag_and_zoom_dismiss_open_menu() {
    let mut state = sized_state();
    menu_open(&mut state);
    let now = Instant::now();

    let click = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPoint::new(1.0, 1.0),
            screen: [1.0, 1.0],
        },
    );
    assert!(matches!(&click[..], [AppCommand::DismissContextMenu]));

    let drag = map_intent_to_commands(&state, AppIntent::MapDragStarted);
    assert!(matches!(drag[0], AppCommand::DismissContextMenu));

    let zoom = map_intent_to_commands(
        &state,
        AppIntent::MapZoomed {
            steps: 1,
            anchor: [400.0, 300.0],
            now,
        },
    );
    assert!(matches!(zoom[0], AppCommand::DismissContextMenu));
    assert!(matches!(zoom[1], AppCommand::ZoomViewport { steps: 1, .. }));
    assert!(matches!(zoom[2], AppCommand::CommitViewport { .. }));
}

#[test]
fn click_while_picking_commits_position() {
    let mut state = sized_state();
    state.interaction = InteractionMode::PickingLocation {
        spot_id: SpotId::from("1"),
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPoint::new(30.0, 120.0),
            screen: [1.0, 1.0],
        },
    );

    assert!(matches!(
        &commands[..],
        [AppCommand::CommitPickedLocation { position }] if *position == GeoPoint::new(30.0, 120.0)
    ));

    let secondary = map_intent_to_commands(
        &state,
        AppIntent::MapSecondaryClicked {
            position: GeoPoint::new(30.0, 120.0),
            screen: [1.0, 1.0],
        },
    );
    assert!(secondary.is_empty(), "Kontextmenü ist beim Platzieren gesperrt");
}

#[test]
fn gestures_are_ignored_while_dialog_open() {
    let mut state = sized_state();
    state.interaction = InteractionMode::AddingSpot(AddSpotDraft {
        position: GeoPoint::new(1.0, 1.0),
        name: String::new(),
    });

    assert!(map_intent_to_commands(&state, AppIntent::MapDragStarted).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::MapPanned { delta: [5.0, 0.0] }).is_empty());
    assert!(map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: GeoPoint::new(1.0, 1.0),
            screen: [1.0, 1.0],
        }
    )
    .is_empty());
}

#[test]
fn menu_actions_use_captured_point() {
    let mut state = sized_state();
    menu_open(&mut state);

    let mark = map_intent_to_commands(
        &state,
        AppIntent::ContextMenuActionSelected {
            action: ContextMenuAction::MarkLocation,
        },
    );
    assert!(matches!(
        &mark[..],
        [AppCommand::DismissContextMenu, AppCommand::MarkLocation { position }]
            if *position == GeoPoint::new(31.2, 121.4)
    ));

    let dest = map_intent_to_commands(
        &state,
        AppIntent::ContextMenuActionSelected {
            action: ContextMenuAction::SetDestination,
        },
    );
    assert!(matches!(
        &dest[..],
        [AppCommand::BeginSetDestination { name, .. }] if name.is_empty()
    ));
}

#[test]
fn menu_action_without_menu_is_ignored() {
    let state = sized_state();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::ContextMenuActionSelected {
            action: ContextMenuAction::AddSpot,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn drag_end_commits_viewport_once() {
    let mut state = sized_state();
    state.view.dragging = true;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapDragEnded {
            now: Instant::now(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SetDragging { active: false }));
    assert!(matches!(commands[1], AppCommand::CommitViewport { .. }));
}

#[test]
fn escape_cancels_picking() {
    let mut state = sized_state();
    state.interaction = InteractionMode::PickingLocation {
        spot_id: SpotId::from("1"),
    };

    let commands = map_intent_to_commands(&state, AppIntent::EscapePressed);

    assert!(matches!(&commands[..], [AppCommand::CancelPickLocation]));
}

#[test]
fn exit_flushes_before_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::FlushPendingWrites));
    assert!(matches!(commands[1], AppCommand::RequestExit));
}

#[test]
fn clicks_on_open_menu_dismiss_or_reopen() {
    let mut state = sized_state();
    menu_open(&mut state);
    let elsewhere = GeoPoint::new(30.0, 120.0);

    let primary = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            position: elsewhere,
            screen: [300.0, 200.0],
        },
    );
    assert!(matches!(&primary[..], [AppCommand::DismissContextMenu]));

    let secondary = map_intent_to_commands(
        &state,
        AppIntent::MapSecondaryClicked {
            position: elsewhere,
            screen: [300.0, 200.0],
        },
    );
    assert!(
        matches!(&secondary[..], [AppCommand::OpenContextMenu { position, .. }] if *position == elsewhere),
        "Rechtsklick öffnet das Menü am neuen Punkt"
    );
}

#[test]
fn reload_does_not_wait_for_writes() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ReloadRequested);

    assert!(matches!(&commands[..], [AppCommand::Reload]));
}

#[test]
fn unchanged_provider_maps_to_nothing() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapProviderChanged {
            provider: crate::core::MapProvider::Gaode,
        },
    );
    assert!(commands.is_empty());
}
