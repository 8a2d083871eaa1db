//! Keyboard-Shortcuts der Karte.
//!
//! Escape bricht den aktiven Modus ab, F5 lädt neu, +/- zoomen um die Kartenmitte.

use std::time::Instant;

use crate::app::{AppIntent, AppState};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Tastatur gehört einem fokussierten Textfeld
    if ui.ctx().memory(|m| m.focused().is_some()) {
        return events;
    }

    let (escape, reload, zoom_in, zoom_out) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::F5),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if escape {
        events.push(AppIntent::EscapePressed);
    }
    if reload {
        events.push(AppIntent::ReloadRequested);
    }

    if state.interaction.is_modal() {
        return events;
    }
    let center = [
        state.view.viewport_size[0] * 0.5,
        state.view.viewport_size[1] * 0.5,
    ];
    let steps = i32::from(zoom_in) - i32::from(zoom_out);
    if steps != 0 {
        events.push(AppIntent::MapZoomed {
            steps,
            anchor: center,
            now: Instant::now(),
        });
    }

    events
}
