//! Kontextmenü öffnen und schließen.

use crate::app::state::{ContextMenuState, InteractionMode};
use crate::app::AppState;
use crate::core::GeoPoint;

/// Öffnet das Kontextmenü an einem Kartenpunkt (ersetzt ein offenes Menü).
pub fn open_context_menu(state: &mut AppState, position: GeoPoint, screen: [f32; 2]) {
    if !state.interaction.accepts_new_mode() {
        log::debug!(
            "Kontextmenü ignoriert im Modus {}",
            state.interaction.name()
        );
        return;
    }
    state.view.spot_popup = None;
    state.interaction = InteractionMode::ContextMenuOpen(ContextMenuState { position, screen });
}

pub fn dismiss_context_menu(state: &mut AppState) {
    if matches!(state.interaction, InteractionMode::ContextMenuOpen(_)) {
        state.interaction = InteractionMode::Idle;
    }
}

/// Punkt, auf den das offene Kontextmenü zeigt.
pub fn context_menu_point(state: &AppState) -> Option<GeoPoint> {
    match &state.interaction {
        InteractionMode::ContextMenuOpen(menu) => Some(menu.position),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_does_not_open_over_dialog() {
        let mut state = AppState::new();
        state.interaction = InteractionMode::AddingSpot(crate::app::state::AddSpotDraft {
            position: GeoPoint::new(1.0, 1.0),
            name: String::new(),
        });
        open_context_menu(&mut state, GeoPoint::new(2.0, 2.0), [10.0, 10.0]);
        assert!(state.interaction.is_modal());
    }

    #[test]
    fn reopening_moves_menu() {
        let mut state = AppState::new();
        open_context_menu(&mut state, GeoPoint::new(2.0, 2.0), [10.0, 10.0]);
        open_context_menu(&mut state, GeoPoint::new(3.0, 3.0), [20.0, 20.0]);
        assert_eq!(context_menu_point(&state), Some(GeoPoint::new(3.0, 3.0)));
        dismiss_context_menu(&mut state);
        assert!(state.interaction.is_idle());
    }
}
