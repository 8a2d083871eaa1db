//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.session.scope.is_valid() {
                ui.label(format!(
                    "Spots: {} | Bilder: {}",
                    state.spot_count(),
                    state.guide_images.images().len()
                ));
            } else {
                ui.label("Kein Ziel gewählt");
            }

            ui.separator();

            let viewport = &state.view.viewport;
            ui.label(format!(
                "Zoom: {} | Mitte: ({:.5}, {:.5})",
                viewport.zoom, viewport.center.lat, viewport.center.lng
            ));

            ui.separator();
            ui.label(format!("Karte: {}", state.config.provider().label()));

            ui.separator();
            ui.label(format!("Modus: {}", state.interaction.name()));

            if state.session.scope.is_valid() && state.session.is_loading() {
                ui.separator();
                ui.spinner();
                ui.label("Lädt…");
            }

            // Ausstehendes Speichern des Ausschnitts
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if state.has_pending_viewport_save() {
                    ui.label(egui::RichText::new("● Ausschnitt ungespeichert").weak());
                }
            });
        });
    });
}
