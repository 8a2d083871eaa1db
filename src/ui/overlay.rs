//! Overlays über der Kartenfläche: Platzieren-Hinweis und Zielort-Knopf.

use crate::app::{AppIntent, AppState};

/// Zeichnet die Karten-Overlays und gibt AppIntents zurück.
pub fn render_map_overlay(ctx: &egui::Context, state: &AppState, map_rect: egui::Rect) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if let Some(spot_id) = state.interaction.picking_target() {
        let name = state
            .spots
            .get(spot_id)
            .map(|s| s.name.as_str())
            .unwrap_or_default();
        egui::Area::new(egui::Id::new("picking_banner"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 8.0])
            .constrain_to(map_rect)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(format!("„{name}“ platzieren: auf die Karte klicken"));
                        if ui.button("Abbrechen").clicked() {
                            events.push(AppIntent::PickLocationCancelled);
                        }
                    });
                });
            });
    }

    if let Some(destination) = state.config.destination() {
        let pos = egui::pos2(map_rect.right() - 12.0, map_rect.top() + 12.0);
        egui::Area::new(egui::Id::new("locate_destination"))
            .order(egui::Order::Foreground)
            .pivot(egui::Align2::RIGHT_TOP)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                if ui
                    .button(format!("🎯 {}", destination.name))
                    .on_hover_text("Karte auf den Zielort zentrieren")
                    .clicked()
                {
                    events.push(AppIntent::LocateDestinationRequested);
                }
            });
    }

    events
}
