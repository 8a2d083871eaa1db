//! Kontextmenü der Karte als Vordergrund-Overlay.
//!
//! Liegt in einer eigenen `Order::Foreground`-Ebene, damit die Kartenfläche
//! darunter keine Klicks auf Menüeinträge abfängt.

use crate::app::context_menu::entries;
use crate::app::{AppIntent, AppState, InteractionMode};

/// Zeigt das Kontextmenü, falls eines offen ist.
pub fn show_context_menu(
    ctx: &egui::Context,
    state: &AppState,
    map_rect: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let InteractionMode::ContextMenuOpen(menu) = &state.interaction else {
        return events;
    };

    let pos = map_rect.min + egui::vec2(menu.screen[0], menu.screen[1]);
    egui::Area::new(egui::Id::new("map_context_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .constrain_to(map_rect)
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_min_width(170.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{:.5}, {:.5}",
                        menu.position.lat, menu.position.lng
                    ))
                    .weak()
                    .small(),
                );
                ui.separator();
                for entry in entries(state.has_destination()) {
                    if ui.button(entry.label).clicked() {
                        events.push(AppIntent::ContextMenuActionSelected {
                            action: entry.action,
                        });
                    }
                }
            });
        });

    events
}
