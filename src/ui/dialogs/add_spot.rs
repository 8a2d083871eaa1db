use crate::app::{AppIntent, InteractionMode};

/// Zeigt den "Spot hinzufügen"-Dialog als modales Fenster.
pub fn show_add_spot_dialog(ctx: &egui::Context, interaction: &mut InteractionMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let InteractionMode::AddingSpot(draft) = interaction else {
        return events;
    };

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Spot hinzufügen")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.label(format!(
                "Position: {:.5}, {:.5}",
                draft.position.lat, draft.position.lng
            ));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Name:");
                let response = ui.text_edit_singleline(&mut draft.name);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    confirmed = !draft.name.trim().is_empty();
                }
                response.request_focus();
            });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let name_valid = !draft.name.trim().is_empty();

                ui.add_enabled_ui(name_valid, |ui| {
                    if ui.button("OK").clicked() {
                        confirmed = true;
                    }
                });

                if ui.button("Abbrechen").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        events.push(AppIntent::AddSpotConfirmed {
            name: draft.name.trim().to_string(),
        });
    } else if cancelled {
        events.push(AppIntent::AddSpotCancelled);
    }

    events
}
