//! Handler für Kontextmenü, Benachrichtigungen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;
use crate::shared::NotificationLevel;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

pub fn open_context_menu(state: &mut AppState, position: GeoPoint, screen: [f32; 2]) {
    use_cases::interaction::open_context_menu(state, position, screen);
}

pub fn dismiss_context_menu(state: &mut AppState) {
    use_cases::interaction::dismiss_context_menu(state);
}

/// Zeigt eine Meldung an (z.B. aus dem Panic-Hook).
pub fn push_notification(state: &mut AppState, level: NotificationLevel, message: String) {
    let now = state.now;
    state.notifications.push(level, message, now);
}

pub fn dismiss_notification(state: &mut AppState, id: u64) {
    state.notifications.dismiss(id);
}
